// The simulation proper: owns all mutable state (screen, velocity field,
// star pool, rng) and advances it one animation frame at a time.
//
// Input events only ever touch the velocity-field target and the aim-point
// baseline; every star mutation happens inside `Simulation::step`, which
// runs once per frame on the single-threaded event loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{ConfigError, ProjectionModel, StarfieldConfig};
use super::constants::{
    DEPTH_ALPHA_BASE, DEPTH_ALPHA_SPAN, DEPTH_STREAK_WIDTH, FLICKER_ALPHA_BASE,
    FLICKER_ALPHA_SPAN, LATERAL_DRIFT_DIVISOR, MIN_STREAK_WIDTH, STAR_COUNT_DIVISOR, STAR_SIZE,
    STREAK_SCALE,
};
use super::input::{InputNormalizer, InputSample};
use super::pool::{recycle_depth, recycle_drag, wrap_lateral, Star, StarPool};
use super::velocity::VelocityField;

/// Canvas geometry in device pixels; recomputed on resize.
#[derive(Clone, Copy, Debug)]
pub struct ScreenState {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl ScreenState {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Result<Self, ConfigError> {
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    pub fn cx(&self) -> f32 {
        self.width / 2.0
    }

    pub fn cy(&self) -> f32 {
        self.height / 2.0
    }

    /// Depth span in the original pixel scale; divides `base_speed` down
    /// into the normalized `[Z_MIN, 1]` depth range.
    pub fn depth_range(&self) -> f32 {
        (self.width + self.height) / 2.0
    }

    pub fn derived_star_count(&self) -> usize {
        (((self.width + self.height) / STAR_COUNT_DIVISOR) as usize).max(1)
    }
}

/// Perspective projection of a depth-divide star into screen space.
#[inline]
pub fn project(star: &Star, screen: &ScreenState) -> (f32, f32) {
    (
        screen.cx() + star.x / star.z,
        screen.cy() + star.y / star.z,
    )
}

/// One renderable motion streak in screen space. The drawing layer is a
/// plain consumer; everything here is host-testable.
#[derive(Clone, Copy, Debug)]
pub struct StreakMark {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub width: f32,
    pub alpha: f32,
}

pub struct Simulation {
    config: StarfieldConfig,
    screen: ScreenState,
    velocity: VelocityField,
    normalizer: InputNormalizer,
    pool: StarPool,
    rng: StdRng,
}

impl Simulation {
    pub fn new(
        config: StarfieldConfig,
        width: f32,
        height: f32,
        pixel_ratio: f32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let screen = ScreenState::new(width, height, pixel_ratio)?;
        let count = config
            .star_count
            .unwrap_or_else(|| screen.derived_star_count());
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pool = StarPool::new(count);
        pool.place_all(&screen, config.model, config.min_depth_scale, &mut rng);
        Ok(Self {
            velocity: VelocityField::new(config.ease),
            normalizer: InputNormalizer::default(),
            config,
            screen,
            pool,
            rng,
        })
    }

    pub fn config(&self) -> &StarfieldConfig {
        &self.config
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn velocity(&self) -> &VelocityField {
        &self.velocity
    }

    pub fn stars(&self) -> &[Star] {
        self.pool.stars()
    }

    /// Feed one raw input sample; only the velocity target and the aim-point
    /// baseline change, never the pool.
    pub fn handle_input(&mut self, sample: InputSample) {
        self.normalizer
            .feed(sample, &self.screen, &mut self.velocity);
    }

    /// Pointer left / touch ended: suspend delta computation until the next
    /// sample.
    pub fn pointer_left(&mut self) {
        self.normalizer.clear();
    }

    /// Recompute screen geometry and re-place every star. Pool size is fixed
    /// at construction and does not track the new dimensions.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) -> Result<(), ConfigError> {
        self.screen = ScreenState::new(width, height, pixel_ratio)?;
        self.pool.place_all(
            &self.screen,
            self.config.model,
            self.config.min_depth_scale,
            &mut self.rng,
        );
        Ok(())
    }

    /// Swap in a new configuration; the only operation that may change the
    /// pool size. Velocity state is reset along with the pool.
    pub fn reconfigure(&mut self, config: StarfieldConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let count = config
            .star_count
            .unwrap_or_else(|| self.screen.derived_star_count());
        self.velocity = VelocityField::new(config.ease);
        self.pool = StarPool::new(count);
        self.config = config;
        self.pool.place_all(
            &self.screen,
            self.config.model,
            self.config.min_depth_scale,
            &mut self.rng,
        );
        Ok(())
    }

    /// Advance the field by one frame. Star updates are independent and
    /// order-free; any star leaving the valid volume is recycled within the
    /// same step, so the depth invariant holds at every frame boundary.
    pub fn step(&mut self) {
        self.velocity.step();
        // re-read at the top of the step; a resize may have replaced it
        let screen = self.screen;
        let v = self.velocity;
        let z_min = self.config.min_depth_scale;
        let threshold = self.config.overflow_threshold_px;
        match self.config.model {
            ProjectionModel::PointerDrag => {
                for star in self.pool.stars_mut() {
                    star.prev_x = star.x;
                    star.prev_y = star.y;
                    star.x += v.x * star.z;
                    star.y += v.y * star.z;
                    let out = star.x < -threshold
                        || star.x > screen.width + threshold
                        || star.y < -threshold
                        || star.y > screen.height + threshold;
                    if out {
                        recycle_drag(star, &screen, &v, z_min, threshold, &mut self.rng);
                    }
                }
            }
            ProjectionModel::DepthDivide => {
                let dz = self.config.base_speed / screen.depth_range();
                for star in self.pool.stars_mut() {
                    let (px, py) = project(star, &screen);
                    star.prev_x = px;
                    star.prev_y = py;
                    star.x += v.x / LATERAL_DRIFT_DIVISOR;
                    star.y += v.y / LATERAL_DRIFT_DIVISOR;
                    star.z -= dz;
                    if star.z < z_min {
                        recycle_depth(star, &screen, &mut self.rng);
                    } else {
                        wrap_lateral(star, &screen);
                    }
                }
            }
        }
    }

    /// Produce one streak per star. Pointer-drag streaks trail the field
    /// velocity and flicker; depth-divide streaks run from last frame's
    /// projection to this frame's, sized and faded by nearness.
    pub fn marks(&mut self, out: &mut Vec<StreakMark>) {
        out.clear();
        out.reserve(self.pool.len());
        let screen = self.screen;
        let v = self.velocity;
        match self.config.model {
            ProjectionModel::PointerDrag => {
                for star in self.pool.stars() {
                    let alpha = FLICKER_ALPHA_BASE + FLICKER_ALPHA_SPAN * self.rng.gen::<f32>();
                    out.push(StreakMark {
                        x1: star.x,
                        y1: star.y,
                        x2: star.x + v.x * STREAK_SCALE,
                        y2: star.y + v.y * STREAK_SCALE,
                        width: STAR_SIZE * star.z * screen.pixel_ratio,
                        alpha,
                    });
                }
            }
            ProjectionModel::DepthDivide => {
                for star in self.pool.stars() {
                    let (px, py) = project(star, &screen);
                    let near = 1.0 - star.z;
                    out.push(StreakMark {
                        x1: star.prev_x,
                        y1: star.prev_y,
                        x2: px,
                        y2: py,
                        width: (DEPTH_STREAK_WIDTH * near).max(MIN_STREAK_WIDTH)
                            * screen.pixel_ratio,
                        alpha: DEPTH_ALPHA_BASE + DEPTH_ALPHA_SPAN * near,
                    });
                }
            }
        }
    }
}
