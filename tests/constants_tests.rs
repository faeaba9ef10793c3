// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    // Divisors must never be zero
    assert!(STAR_COUNT_DIVISOR > 0.0);
    assert!(DELTA_DIVISOR > 0.0);
    assert!(LATERAL_DRIFT_DIVISOR > 0.0);

    // Rendering sizes should be positive
    assert!(STAR_SIZE > 0.0);
    assert!(STREAK_SCALE > 0.0);
    assert!(DEPTH_STREAK_WIDTH > 0.0);
    assert!(MIN_STREAK_WIDTH > 0.0);
    assert!(MIN_STREAK_WIDTH < DEPTH_STREAK_WIDTH);

    // Respawn band must sit inside the depth range
    assert!(RESPAWN_DEPTH_SPAN > 0.0 && RESPAWN_DEPTH_SPAN < 1.0);
    assert!(1.0 - RESPAWN_DEPTH_SPAN > DEFAULT_MIN_DEPTH_SCALE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alpha_ramps_stay_within_unit_range() {
    assert!(DEPTH_ALPHA_BASE >= 0.0);
    assert!(DEPTH_ALPHA_BASE + DEPTH_ALPHA_SPAN <= 1.0);
    assert!(FLICKER_ALPHA_BASE >= 0.0);
    assert!(FLICKER_ALPHA_BASE + FLICKER_ALPHA_SPAN <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn input_directions_are_opposite_unit_signs() {
    assert_eq!(POINTER_DIRECTION, -1.0);
    assert_eq!(TOUCH_DIRECTION, 1.0);
    assert_eq!(POINTER_DIRECTION + TOUCH_DIRECTION, 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_produce_a_valid_configuration() {
    assert!(DEFAULT_BASE_SPEED > 0.0);
    assert!(DEFAULT_EASE > 0.0 && DEFAULT_EASE <= 1.0);
    assert!(DEFAULT_MIN_DEPTH_SCALE > 0.0 && DEFAULT_MIN_DEPTH_SCALE < 1.0);
    assert!(DEFAULT_OVERFLOW_THRESHOLD_PX >= 0.0);
    assert!(DEFAULT_STAR_COLOR.starts_with('#'));
}
