use super::{Coordinate, rules};

/// Cell is the fundamental unit of the lattice.
/// Its identity is its coordinate; `alive` is the only state it carries.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub coordinate: Coordinate,
    pub alive: bool,
}

impl Cell {
    pub const fn new(coordinate: Coordinate, alive: bool) -> Self {
        Self { coordinate, alive }
    }

    /// Same cell with the opposite state
    pub const fn toggled(self) -> Self {
        Self {
            coordinate: self.coordinate,
            alive: !self.alive,
        }
    }

    /// Next-generation value of this cell given its live-neighbor count
    pub const fn evolve(self, neighbors: u8) -> Self {
        Self {
            coordinate: self.coordinate,
            alive: rules::next_alive(self.alive, neighbors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_keeps_coordinate() {
        let cell = Cell::new(Coordinate::new(1, 2, 3), false);
        let flipped = cell.toggled();
        assert_eq!(flipped.coordinate, cell.coordinate);
        assert!(flipped.alive);
        assert_eq!(flipped.toggled(), cell);
    }

    #[test]
    fn test_evolve_applies_rule() {
        let live = Cell::new(Coordinate::new(0, 0, 0), true);
        assert!(live.evolve(4).alive);
        assert!(!live.evolve(3).alive);

        let dead = Cell::new(Coordinate::new(0, 0, 0), false);
        assert!(dead.evolve(5).alive);
        assert!(!dead.evolve(4).alive);
    }
}
