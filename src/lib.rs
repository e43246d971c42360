// Domain layer - Lattice store and generation engine
pub mod domain;

// Application layer - Simulation state and coordination
pub mod application;

// Infrastructure layer - Rendering and input for the viewer
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Coordinate, Lattice};
pub use application::{Cursor, OrbitCamera, Simulation, SimulationConfig};
