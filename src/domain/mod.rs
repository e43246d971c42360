mod algorithm;
mod cell;
mod coordinate;
mod lattice;
pub mod engine;
pub mod rules;

pub use algorithm::Algorithm;
pub use cell::Cell;
pub use coordinate::Coordinate;
pub use lattice::{DEFAULT_LIVE_PROBABILITY, Lattice};
pub use engine::{advance, advance_parallel, count_live_neighbors};
