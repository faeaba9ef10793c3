// The crate's library is wasm-only, so host-side tests include the pure
// simulation sources directly, mirroring the `src/core` module tree.
#![allow(dead_code)]

pub mod core {
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod input {
        include!("../../src/core/input.rs");
    }
    pub mod pool {
        include!("../../src/core/pool.rs");
    }
    pub mod sim {
        include!("../../src/core/sim.rs");
    }
    pub mod velocity {
        include!("../../src/core/velocity.rs");
    }
}

pub use core::config::{ConfigError, ProjectionModel, StarfieldConfig};
pub use core::input::{client_to_canvas_px, InputNormalizer, InputSample};
pub use core::sim::{project, ScreenState, Simulation, StreakMark};
pub use core::velocity::VelocityField;

/// A simulation with the reference geometry used across these tests:
/// 1000x800 at device pixel ratio 1.
pub fn reference_sim(config: StarfieldConfig, seed: u64) -> Simulation {
    Simulation::new(config, 1000.0, 800.0, 1.0, seed).expect("valid reference config")
}
