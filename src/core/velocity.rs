use glam::Vec2;

use super::constants::DELTA_DIVISOR;

/// Momentum-smoothed 2D drift vector driving the whole field.
///
/// Raw input deltas accumulate into the target `(tx, ty)`; once per frame the
/// applied drift `(x, y)` eases toward the target. There is deliberately no
/// decay toward zero: when input stops the field keeps coasting at the last
/// target.
#[derive(Clone, Copy, Debug)]
pub struct VelocityField {
    pub x: f32,
    pub y: f32,
    pub tx: f32,
    pub ty: f32,
    ease: f32,
}

impl VelocityField {
    pub fn new(ease: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            tx: 0.0,
            ty: 0.0,
            ease,
        }
    }

    /// Accumulate one aim-point delta into the target drift. Deltas arrive
    /// in device pixels, so devicePixelRatio is already applied by the
    /// coordinate mapping and must not be applied again here.
    ///
    /// `direction` is -1 for pointer input and +1 for touch/orientation
    /// ("move the cursor" vs "move the world").
    pub fn apply_delta(&mut self, delta: Vec2, direction: f32) {
        self.tx += delta.x / DELTA_DIVISOR * direction;
        self.ty += delta.y / DELTA_DIVISOR * direction;
    }

    /// Ease the applied drift toward the target; call exactly once per frame,
    /// before any star moves. The residual gap shrinks by `(1 - ease)` each
    /// frame.
    pub fn step(&mut self) {
        self.x += (self.tx - self.x) * self.ease;
        self.y += (self.ty - self.y) * self.ease;
    }
}
