pub mod config;
pub mod constants;
pub mod input;
pub mod pool;
pub mod sim;
pub mod velocity;

pub use config::*;
pub use input::*;
pub use pool::*;
pub use sim::*;
pub use velocity::*;
