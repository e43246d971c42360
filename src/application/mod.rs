mod camera;
mod config;
mod cursor;
mod simulation;

pub use camera::OrbitCamera;
pub use config::{ConfigError, SimulationConfig};
pub use cursor::Cursor;
pub use simulation::Simulation;
