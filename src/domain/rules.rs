//! The 3D survival/birth rule (B5/S456).
//!
//! Conway's 2D thresholds don't carry over to 26 neighbors, so the volume
//! version uses a wider survival band and a single birth count.

/// Fewest live neighbors a live cell needs to survive
pub const SURVIVE_MIN: u8 = 4;

/// Most live neighbors a live cell can have and still survive
pub const SURVIVE_MAX: u8 = 6;

/// Exact live-neighbor count that brings a dead cell to life
pub const BIRTH: u8 = 5;

/// Pure function computing a cell's next `alive` value:
/// 1. Live cell with 4-6 neighbors survives
/// 2. Dead cell with exactly 5 neighbors becomes alive
/// 3. All other cases result in a dead cell
pub const fn next_alive(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, SURVIVE_MIN..=SURVIVE_MAX) => true,
        (false, BIRTH) => true,
        _ => false,
    }
}
