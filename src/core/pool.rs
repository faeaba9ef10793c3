// Fixed-size star pool: placement and the recycling policy.
//
// Stars are never created or destroyed after construction; leaving the
// valid volume repositions them. Recycling biases the respawn toward the
// side the star should appear to emerge from, so the stream reads as
// continuous rather than as a reset.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::ProjectionModel;
use super::constants::RESPAWN_DEPTH_SPAN;
use super::sim::{project, ScreenState};
use super::velocity::VelocityField;

/// A single particle.
///
/// `x`, `y` are screen coordinates in the pointer-drag model and
/// center-relative lateral offsets in the depth-divide model. `prev_x`,
/// `prev_y` hold last frame's projected position so streaks can be drawn;
/// placement and recycling reset them to the current projection, which
/// collapses the first streak after a respawn to a dot.
#[derive(Clone, Copy, Debug, Default)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub prev_x: f32,
    pub prev_y: f32,
}

pub struct StarPool {
    stars: Vec<Star>,
}

impl StarPool {
    pub fn new(count: usize) -> Self {
        Self {
            stars: vec![Star::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn stars_mut(&mut self) -> &mut [Star] {
        &mut self.stars
    }

    /// Re-place every star uniformly over the model's full extent. Used at
    /// construction and after a resize; no incremental rescale.
    pub fn place_all(
        &mut self,
        screen: &ScreenState,
        model: ProjectionModel,
        z_min: f32,
        rng: &mut StdRng,
    ) {
        for star in &mut self.stars {
            place_star(star, screen, model, z_min, rng);
        }
    }
}

pub fn place_star(
    star: &mut Star,
    screen: &ScreenState,
    model: ProjectionModel,
    z_min: f32,
    rng: &mut StdRng,
) {
    star.z = rng.gen_range(z_min..1.0);
    match model {
        ProjectionModel::PointerDrag => {
            star.x = rng.gen_range(0.0..screen.width);
            star.y = rng.gen_range(0.0..screen.height);
            star.prev_x = star.x;
            star.prev_y = star.y;
        }
        ProjectionModel::DepthDivide => {
            star.x = rng.gen_range(-screen.cx()..screen.cx());
            star.y = rng.gen_range(-screen.cy()..screen.cy());
            let (px, py) = project(star, screen);
            star.prev_x = px;
            star.prev_y = py;
        }
    }
}

/// Pointer-drag recycling: the star left the screen rect by more than the
/// overflow threshold. When the field is moving, respawn on the edge the
/// stream flows away from, picking the axis with probability proportional to
/// the per-axis speed; the respawn sits exactly on the threshold so it
/// cannot re-trip the bounds check in the same frame.
pub fn recycle_drag(
    star: &mut Star,
    screen: &ScreenState,
    velocity: &VelocityField,
    z_min: f32,
    threshold: f32,
    rng: &mut StdRng,
) {
    star.z = rng.gen_range(z_min..1.0);
    let vx = velocity.x.abs();
    let vy = velocity.y.abs();
    if vx > 1.0 || vy > 1.0 {
        let horizontal = rng.gen::<f32>() < vx / (vx + vy);
        if horizontal {
            star.x = if velocity.x > 0.0 {
                -threshold
            } else {
                screen.width + threshold
            };
            star.y = rng.gen_range(0.0..screen.height);
        } else {
            star.y = if velocity.y > 0.0 {
                -threshold
            } else {
                screen.height + threshold
            };
            star.x = rng.gen_range(0.0..screen.width);
        }
    } else {
        star.x = rng.gen_range(0.0..screen.width);
        star.y = rng.gen_range(0.0..screen.height);
    }
    star.prev_x = star.x;
    star.prev_y = star.y;
}

/// Depth-divide recycling: the star crossed the near plane. It re-enters
/// near the far plane with a fresh lateral position, so the fly-through
/// stream never pops a star in at the viewer's nose.
pub fn recycle_depth(star: &mut Star, screen: &ScreenState, rng: &mut StdRng) {
    star.z = 1.0 - rng.gen::<f32>() * RESPAWN_DEPTH_SPAN;
    star.x = rng.gen_range(-screen.cx()..screen.cx());
    star.y = rng.gen_range(-screen.cy()..screen.cy());
    let (px, py) = project(star, screen);
    star.prev_x = px;
    star.prev_y = py;
}

/// Depth-divide lateral bound: wrap the violating axis to the opposite side
/// of the `[-2cx, 2cx) x [-2cy, 2cy)` volume. Returns whether a wrap
/// happened so the caller can suppress the streak for this frame.
pub fn wrap_lateral(star: &mut Star, screen: &ScreenState) -> bool {
    let mut wrapped = false;
    if star.x >= screen.width {
        star.x -= 2.0 * screen.width;
        wrapped = true;
    } else if star.x < -screen.width {
        star.x += 2.0 * screen.width;
        wrapped = true;
    }
    if star.y >= screen.height {
        star.y -= 2.0 * screen.height;
        wrapped = true;
    } else if star.y < -screen.height {
        star.y += 2.0 * screen.height;
        wrapped = true;
    }
    if wrapped {
        let (px, py) = project(star, screen);
        star.prev_x = px;
        star.prev_y = py;
    }
    wrapped
}
