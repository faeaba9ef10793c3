// Normalizes pointer, touch, and device-orientation samples into one
// canonical aim point in canvas pixel space, and turns consecutive aim
// points into velocity-field deltas.

use glam::Vec2;

use super::constants::{POINTER_DIRECTION, TOUCH_DIRECTION};
use super::sim::ScreenState;
use super::velocity::VelocityField;

/// Map a client-space position onto the canvas backing store, in device
/// pixels. `None` when the canvas has no layout extent, which window-level
/// listeners can still observe.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_min: Vec2,
    rect_size: Vec2,
    canvas_size: Vec2,
) -> Option<Vec2> {
    if !(rect_size.x > 0.0 && rect_size.y > 0.0) {
        return None;
    }
    Some((client - rect_min) / rect_size * canvas_size)
}

/// One raw sample from whichever input source is currently active.
#[derive(Clone, Copy, Debug)]
pub enum InputSample {
    /// Pointer/mouse position, already in canvas pixel space.
    Pointer { x: f32, y: f32 },
    /// First active touch point, already in canvas pixel space.
    Touch { x: f32, y: f32 },
    /// Raw tilt angles; the sensor may report null for either axis.
    Orientation { gamma: Option<f64>, beta: Option<f64> },
}

impl InputSample {
    /// Canonical aim point in canvas pixel space.
    ///
    /// Orientation maps `gamma in [-90, 90]` and `beta in [-180, 180]` onto
    /// `[0, 1]` and scales by the screen; null angles count as level (0).
    pub fn aim_point(&self, screen: &ScreenState) -> Vec2 {
        match *self {
            InputSample::Pointer { x, y } | InputSample::Touch { x, y } => Vec2::new(x, y),
            InputSample::Orientation { gamma, beta } => {
                let nx = (gamma.unwrap_or(0.0) as f32 + 90.0) / 180.0;
                let ny = (beta.unwrap_or(0.0) as f32 + 180.0) / 360.0;
                Vec2::new(nx * screen.width, ny * screen.height)
            }
        }
    }

    fn direction(&self) -> f32 {
        match self {
            InputSample::Pointer { .. } => POINTER_DIRECTION,
            InputSample::Touch { .. } | InputSample::Orientation { .. } => TOUCH_DIRECTION,
        }
    }
}

/// Tracks the last known aim point so deltas can be computed, suspending
/// delta emission across an "absent" gap (pointer-leave / touch-end).
#[derive(Clone, Copy, Debug, Default)]
pub struct InputNormalizer {
    last: Option<Vec2>,
}

impl InputNormalizer {
    /// Feed one sample: emits a target delta unless this is the first sample
    /// after an absence, which only re-establishes the baseline.
    pub fn feed(&mut self, sample: InputSample, screen: &ScreenState, field: &mut VelocityField) {
        let aim = sample.aim_point(screen);
        if let Some(prev) = self.last {
            field.apply_delta(aim - prev, sample.direction());
        }
        self.last = Some(aim);
    }

    /// Aim point becomes absent. Idempotent: a second clear changes nothing,
    /// and re-entry after a clear emits no spurious delta.
    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn aim(&self) -> Option<Vec2> {
        self.last
    }
}
