// Simulation tuning constants shared by both projection models.

// Pool sizing
pub const STAR_COUNT_DIVISOR: f32 = 8.0; // default quantity = (width + height) / 8

// Input
pub const DELTA_DIVISOR: f32 = 8.0; // raw aim-point deltas are divided by this before easing
pub const POINTER_DIRECTION: f32 = -1.0; // desktop pointer moves the cursor
pub const TOUCH_DIRECTION: f32 = 1.0; // touch and tilt move the world

// Integration
pub const LATERAL_DRIFT_DIVISOR: f32 = 16.0; // depth-divide lateral drift per frame
pub const RESPAWN_DEPTH_SPAN: f32 = 0.25; // recycled stars re-enter near the far plane

// Streak marks
pub const STAR_SIZE: f32 = 3.0; // stroke width at full depth (pointer-drag)
pub const STREAK_SCALE: f32 = 2.0; // tail length as a multiple of field velocity
pub const DEPTH_STREAK_WIDTH: f32 = 2.0; // stroke width of a fully-near star (depth-divide)
pub const MIN_STREAK_WIDTH: f32 = 0.5; // far stars still render as a faint dot
pub const DEPTH_ALPHA_BASE: f32 = 0.25;
pub const DEPTH_ALPHA_SPAN: f32 = 0.75;
pub const FLICKER_ALPHA_BASE: f32 = 0.5;
pub const FLICKER_ALPHA_SPAN: f32 = 0.5;

// Configuration defaults
pub const DEFAULT_STAR_COLOR: &str = "#fff";
pub const DEFAULT_BASE_SPEED: f32 = 3.0; // depth units per frame, in the original pixel scale
pub const DEFAULT_EASE: f32 = 0.125;
pub const DEFAULT_MIN_DEPTH_SCALE: f32 = 0.2;
pub const DEFAULT_OVERFLOW_THRESHOLD_PX: f32 = 50.0;
