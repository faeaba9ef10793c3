// Configuration surface and fail-fast validation.
//
// A simulation must never start in an invalid state: every knob is checked
// once at construction (and again on explicit reconfiguration), after which
// the per-frame path is infallible.

use std::str::FromStr;
use thiserror::Error;

use super::constants::{
    DEFAULT_BASE_SPEED, DEFAULT_EASE, DEFAULT_MIN_DEPTH_SCALE, DEFAULT_OVERFLOW_THRESHOLD_PX,
    DEFAULT_STAR_COLOR,
};

/// How star coordinates map to the screen.
///
/// `PointerDrag` keeps stars in screen space and lets the velocity field drag
/// the whole field around; `DepthDivide` keeps stars as center-relative
/// offsets divided by depth, producing a fly-through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectionModel {
    #[default]
    PointerDrag,
    DepthDivide,
}

impl FromStr for ProjectionModel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pointer-drag" => Ok(ProjectionModel::PointerDrag),
            "depth-divide" => Ok(ProjectionModel::DepthDivide),
            other => Err(ConfigError::UnknownModel(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("star count must be positive")]
    ZeroStarCount,
    #[error("ease must be in (0, 1], got {0}")]
    InvalidEase(f32),
    #[error("base speed must be finite and non-negative, got {0}")]
    InvalidBaseSpeed(f32),
    #[error("minimum depth scale must be in (0, 1), got {0}")]
    InvalidDepthScale(f32),
    #[error("overflow threshold must be finite and non-negative, got {0}")]
    InvalidOverflowThreshold(f32),
    #[error("canvas dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },
    #[error("unknown projection model {0:?}")]
    UnknownModel(String),
}

#[derive(Clone, Debug)]
pub struct StarfieldConfig {
    /// Fixed pool size; `None` derives `(width + height) / 8` from the canvas.
    pub star_count: Option<usize>,
    /// CSS color used for every streak.
    pub star_color: String,
    /// Depth advance per frame (depth-divide model), in the original's
    /// pixel-sized depth scale; normalized by the screen's depth range.
    pub base_speed: f32,
    /// Exponential-smoothing coefficient pulling current velocity toward the
    /// accumulated target. 1/8 converges to <1% residual in ~35 frames.
    pub ease: f32,
    /// Lower depth bound `Z_MIN`; stars live in `[Z_MIN, 1.0]`.
    pub min_depth_scale: f32,
    /// Extra margin beyond the canvas a star may travel before recycling.
    pub overflow_threshold_px: f32,
    pub model: ProjectionModel,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: None,
            star_color: DEFAULT_STAR_COLOR.to_string(),
            base_speed: DEFAULT_BASE_SPEED,
            ease: DEFAULT_EASE,
            min_depth_scale: DEFAULT_MIN_DEPTH_SCALE,
            overflow_threshold_px: DEFAULT_OVERFLOW_THRESHOLD_PX,
            model: ProjectionModel::default(),
        }
    }
}

impl StarfieldConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.star_count == Some(0) {
            return Err(ConfigError::ZeroStarCount);
        }
        if !(self.ease > 0.0 && self.ease <= 1.0) {
            return Err(ConfigError::InvalidEase(self.ease));
        }
        if !self.base_speed.is_finite() || self.base_speed < 0.0 {
            return Err(ConfigError::InvalidBaseSpeed(self.base_speed));
        }
        if !(self.min_depth_scale > 0.0 && self.min_depth_scale < 1.0) {
            return Err(ConfigError::InvalidDepthScale(self.min_depth_scale));
        }
        if !self.overflow_threshold_px.is_finite() || self.overflow_threshold_px < 0.0 {
            return Err(ConfigError::InvalidOverflowThreshold(
                self.overflow_threshold_px,
            ));
        }
        Ok(())
    }
}
