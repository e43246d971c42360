/// Integer position of a cell in the cubic lattice.
/// Components are signed so out-of-range positions (e.g. a neighbor of a
/// boundary cell) can be represented and rejected by lookup.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Shift by the given offsets, or None if any axis overflows
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z.checked_add(dz)?,
        })
    }

    /// The 3D Moore neighborhood: all 26 positions one step away on any
    /// combination of axes, excluding the coordinate itself.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1)
            .flat_map(|dz| (-1..=1).flat_map(move |dy| (-1..=1).map(move |dx| (dx, dy, dz))))
            .filter(|&offset| offset != (0, 0, 0))
            .filter_map(move |(dx, dy, dz)| self.offset(dx, dy, dz))
    }
}

impl From<(i32, i32, i32)> for Coordinate {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_neighbors_are_26_distinct() {
        let center = Coordinate::new(5, 5, 5);
        let neighbors: HashSet<_> = center.neighbors().collect();
        assert_eq!(neighbors.len(), 26);
        assert!(!neighbors.contains(&center));
    }

    #[test]
    fn test_neighbors_stay_within_one_step() {
        let center = Coordinate::new(0, 0, 0);
        for n in center.neighbors() {
            assert!(n.x.abs() <= 1 && n.y.abs() <= 1 && n.z.abs() <= 1);
        }
    }

    #[test]
    fn test_neighbors_skip_overflowing_offsets() {
        let edge = Coordinate::new(i32::MAX, 0, 0);
        // 9 of the 26 offsets push x past i32::MAX
        assert_eq!(edge.neighbors().count(), 17);
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Coordinate::from((1, 2, 3)), Coordinate::new(1, 2, 3));
    }
}
