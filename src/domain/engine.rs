//! Generation engine: neighbor counting and the double-buffered step.
//!
//! Every function here takes the current lattice by shared reference and
//! builds the next one from scratch, so no cell ever sees a neighbor's
//! next-generation value.

use super::{Algorithm, Coordinate, Lattice};
use rayon::prelude::*;

/// Count live cells in the 26-cell Moore neighborhood.
/// The lattice has hard walls: positions outside it count as dead.
pub fn count_live_neighbors(lattice: &Lattice, coordinate: Coordinate) -> u8 {
    coordinate
        .neighbors()
        .filter(|&n| lattice.is_alive(n))
        .count() as u8
}

/// Next `alive` value for the cell stored at `index`
#[inline]
fn next_state(lattice: &Lattice, index: usize) -> bool {
    let cell = lattice.cell_at(index);
    cell.evolve(count_live_neighbors(lattice, cell.coordinate)).alive
}

/// Compute the next generation serially
pub fn advance(lattice: &Lattice) -> Lattice {
    let cells = (0..lattice.len())
        .map(|idx| next_state(lattice, idx))
        .collect();
    Lattice::from_states(lattice.size(), cells)
}

/// Compute the next generation with rayon.
/// Each cell reads only the old snapshot, so the result matches `advance`.
pub fn advance_parallel(lattice: &Lattice) -> Lattice {
    let cells = (0..lattice.len())
        .into_par_iter()
        .map(|idx| next_state(lattice, idx))
        .collect();
    Lattice::from_states(lattice.size(), cells)
}

/// Dispatch to the selected algorithm
pub fn advance_with(lattice: &Lattice, algorithm: Algorithm) -> Lattice {
    match algorithm {
        Algorithm::Sequential => advance(lattice),
        Algorithm::Parallel => advance_parallel(lattice),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn lattice_with(grid_size: i32, live: &[(i32, i32, i32)]) -> Lattice {
        let mut lattice = Lattice::new(grid_size);
        for &c in live {
            lattice.toggle(c.into());
        }
        lattice
    }

    fn full(grid_size: i32) -> Lattice {
        Lattice::initialize(grid_size, 1.0, &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_count_center_of_full_cube() {
        assert_eq!(count_live_neighbors(&full(3), Coordinate::new(1, 1, 1)), 26);
    }

    #[test]
    fn test_corner_sees_at_most_seven() {
        let lattice = full(10);
        assert_eq!(count_live_neighbors(&lattice, Coordinate::new(0, 0, 0)), 7);
        assert_eq!(count_live_neighbors(&lattice, Coordinate::new(9, 9, 9)), 7);
    }

    #[test]
    fn test_edge_and_face_counts() {
        let lattice = full(10);
        // edge: 2 * 2 * 3 - 1
        assert_eq!(count_live_neighbors(&lattice, Coordinate::new(0, 0, 5)), 11);
        // face: 2 * 3 * 3 - 1
        assert_eq!(count_live_neighbors(&lattice, Coordinate::new(0, 5, 5)), 17);
    }

    #[test]
    fn test_no_wraparound() {
        let lattice = lattice_with(4, &[(3, 3, 3)]);
        assert_eq!(count_live_neighbors(&lattice, Coordinate::new(0, 0, 0)), 0);
        assert_eq!(count_live_neighbors(&lattice, Coordinate::new(2, 2, 2)), 1);
    }

    #[test]
    fn test_count_ignores_self() {
        let lattice = lattice_with(3, &[(1, 1, 1)]);
        assert_eq!(count_live_neighbors(&lattice, Coordinate::new(1, 1, 1)), 0);
    }

    #[test]
    fn test_count_outside_lattice() {
        let lattice = full(3);
        assert_eq!(count_live_neighbors(&lattice, Coordinate::new(-1, -1, -1)), 1);
        assert_eq!(count_live_neighbors(&lattice, Coordinate::new(10, 10, 10)), 0);
    }

    #[test]
    fn test_lonely_cell_dies_and_nothing_is_born() {
        let lattice = lattice_with(3, &[(1, 1, 1)]);
        for cell in lattice.iter_cells().filter(|c| !c.alive) {
            assert_eq!(count_live_neighbors(&lattice, cell.coordinate), 1);
        }

        let next = advance(&lattice);
        assert_eq!(next.len(), 27);
        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn test_dead_cell_with_five_neighbors_is_born() {
        let lattice = lattice_with(3, &[(0, 0, 0), (2, 0, 0), (0, 2, 0), (0, 0, 2), (2, 2, 2)]);
        let center = Coordinate::new(1, 1, 1);
        assert_eq!(count_live_neighbors(&lattice, center), 5);

        let next = advance(&lattice);
        assert!(next.is_alive(center));
    }

    #[test]
    fn test_full_small_cube_dies_out() {
        // Every cell of a full 3-cube has 7, 11, 17 or 26 neighbors
        let next = advance(&full(3));
        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn test_survivor_with_four_neighbors() {
        let lattice = lattice_with(5, &[(2, 2, 2), (1, 2, 2), (3, 2, 2), (2, 1, 2), (2, 3, 2)]);
        let next = advance(&lattice);
        assert!(next.is_alive(Coordinate::new(2, 2, 2)));
        // each arm sees the center and two diagonal arms
        assert!(!next.is_alive(Coordinate::new(1, 2, 2)));
        assert!(!next.is_alive(Coordinate::new(2, 3, 2)));
    }

    #[test]
    fn test_advance_leaves_previous_snapshot_untouched() {
        let lattice = Lattice::initialize(6, 0.4, &mut StdRng::seed_from_u64(11));
        let copy = lattice.clone();
        let _next = advance(&lattice);
        let _next = advance_parallel(&lattice);
        assert_eq!(lattice, copy);
    }

    #[test]
    fn test_advance_empty_lattice() {
        let lattice = Lattice::new(0);
        assert!(advance(&lattice).is_empty());
        assert!(advance_parallel(&lattice).is_empty());
    }

    proptest! {
        #[test]
        fn prop_neighbor_count_bounded(x in -2i32..8, y in -2i32..8, z in -2i32..8, seed: u64) {
            let lattice = Lattice::initialize(6, 0.5, &mut StdRng::seed_from_u64(seed));
            let count = count_live_neighbors(&lattice, Coordinate::new(x, y, z));
            prop_assert!(count <= 26);
        }

        #[test]
        fn prop_advance_is_deterministic(grid_size in 0i32..8, seed: u64) {
            let a = Lattice::initialize(grid_size, 0.3, &mut StdRng::seed_from_u64(seed));
            let b = Lattice::initialize(grid_size, 0.3, &mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(advance(&a), advance(&b));
        }

        #[test]
        fn prop_parallel_matches_sequential(grid_size in 0i32..9, probability in 0.0f64..1.0, seed: u64) {
            let lattice = Lattice::initialize(grid_size, probability, &mut StdRng::seed_from_u64(seed));
            let sequential = advance_with(&lattice, Algorithm::Sequential);
            prop_assert_eq!(sequential.len(), lattice.len());
            prop_assert_eq!(sequential, advance_with(&lattice, Algorithm::Parallel));
        }
    }
}
