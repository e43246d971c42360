use crate::domain::Coordinate;

/// Cursor marks the cell the user will toggle from the keyboard.
/// It is kept inside `[0, grid_size)` on every axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    position: Coordinate,
}

impl Cursor {
    /// Cursor at the center of a cube with the given edge length
    pub fn centered(grid_size: i32) -> Self {
        let mid = (grid_size.max(1) - 1) / 2;
        Self {
            position: Coordinate::new(mid, mid, mid),
        }
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Step by the given offsets, staying inside the cube
    pub fn step(&mut self, dx: i32, dy: i32, dz: i32, grid_size: i32) {
        let max = grid_size.saturating_sub(1).max(0);
        let clamp = |v: i32, d: i32| v.saturating_add(d).clamp(0, max);
        self.position = Coordinate::new(
            clamp(self.position.x, dx),
            clamp(self.position.y, dy),
            clamp(self.position.z, dz),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered() {
        assert_eq!(Cursor::centered(10).position(), Coordinate::new(4, 4, 4));
        assert_eq!(Cursor::centered(3).position(), Coordinate::new(1, 1, 1));
        assert_eq!(Cursor::centered(0).position(), Coordinate::new(0, 0, 0));
    }

    #[test]
    fn test_step_stays_inside() {
        let mut cursor = Cursor::centered(3);
        cursor.step(5, -5, 1, 3);
        assert_eq!(cursor.position(), Coordinate::new(2, 0, 2));
        cursor.step(-1, 1, 0, 3);
        assert_eq!(cursor.position(), Coordinate::new(1, 1, 2));
    }

    #[test]
    fn test_step_with_minimum_grid_size() {
        let mut cursor = Cursor::centered(i32::MIN);
        cursor.step(1, -1, 0, i32::MIN);
        assert_eq!(cursor.position(), Coordinate::new(0, 0, 0));
    }

    #[test]
    fn test_step_after_shrink() {
        let mut cursor = Cursor::centered(10);
        cursor.step(0, 0, 0, 2);
        assert_eq!(cursor.position(), Coordinate::new(1, 1, 1));
    }
}
