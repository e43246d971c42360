use super::{Cell, Coordinate};
use rand::Rng;
use tracing::{debug, trace, warn};

/// Default chance that a cell starts alive on initialization
pub const DEFAULT_LIVE_PROBABILITY: f64 = 0.2;

/// Lattice stores every cell of a cubic grid in a flat, direct-indexed vector.
/// Index layout is z-major with x varying fastest, so each coordinate in
/// `[0, size)³` maps to exactly one slot and no other slot exists.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Lattice {
    size: usize,
    cells: Vec<bool>,
}

impl Lattice {
    /// Create a lattice with all cells dead.
    /// A zero or negative grid size yields an empty lattice, as does one
    /// whose cell count doesn't fit in `usize`.
    pub fn new(grid_size: i32) -> Self {
        let (size, len) = dimensions(grid_size);
        Self {
            size,
            cells: vec![false; len],
        }
    }

    /// Create a lattice where each cell is independently alive with
    /// `live_probability`, drawing from the supplied random source.
    pub fn initialize<R: Rng>(grid_size: i32, live_probability: f64, rng: &mut R) -> Self {
        let (size, len) = dimensions(grid_size);
        let cells: Vec<bool> = (0..len)
            .map(|_| rng.random::<f64>() < live_probability)
            .collect();

        let lattice = Self { size, cells };
        debug!(
            grid_size,
            live_probability,
            cells = lattice.len(),
            live = lattice.live_count(),
            "initialized lattice"
        );
        lattice
    }

    /// Assemble a lattice from per-index states produced by the engine
    pub(crate) fn from_states(size: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(Some(cells.len()), size.checked_pow(3));
        Self { size, cells }
    }

    /// Edge length of the cube
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (size³)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Convert a coordinate to its slot, or None when outside the cube
    fn index_of(&self, coordinate: Coordinate) -> Option<usize> {
        let axis = |v: i32| usize::try_from(v).ok().filter(|&v| v < self.size);
        let (x, y, z) = (axis(coordinate.x)?, axis(coordinate.y)?, axis(coordinate.z)?);
        Some((z * self.size + y) * self.size + x)
    }

    /// Inverse of `index_of` for slots known to be in range
    pub(crate) fn coordinate_of(&self, index: usize) -> Coordinate {
        let n = self.size;
        Coordinate::new((index % n) as i32, ((index / n) % n) as i32, (index / (n * n)) as i32)
    }

    /// Cell stored at a slot known to be in range
    #[inline]
    pub(crate) fn cell_at(&self, index: usize) -> Cell {
        Cell::new(self.coordinate_of(index), self.cells[index])
    }

    /// Check whether the coordinate belongs to this lattice
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.index_of(coordinate).is_some()
    }

    /// Get the cell at a coordinate (None when out of range)
    pub fn lookup(&self, coordinate: Coordinate) -> Option<Cell> {
        self.index_of(coordinate)
            .map(|idx| Cell::new(coordinate, self.cells[idx]))
    }

    /// Present and alive
    #[inline]
    pub fn is_alive(&self, coordinate: Coordinate) -> bool {
        self.index_of(coordinate).is_some_and(|idx| self.cells[idx])
    }

    /// Flip the cell at a coordinate and return its new value.
    /// Out-of-range coordinates leave the lattice untouched and return None.
    pub fn toggle(&mut self, coordinate: Coordinate) -> Option<Cell> {
        let Some(idx) = self.index_of(coordinate) else {
            trace!(?coordinate, "toggle outside lattice ignored");
            return None;
        };
        let cell = self.cell_at(idx).toggled();
        self.cells[idx] = cell.alive;
        Some(cell)
    }

    /// Number of live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterate over every cell, z-major with x varying fastest
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &alive)| Cell::new(self.coordinate_of(idx), alive))
    }

    /// Iterate over live cells only (what a renderer usually wants)
    pub fn iter_live(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter_cells().filter(|cell| cell.alive)
    }
}

/// Edge length and cell count for a requested grid size.
/// Sizes that are non-positive or whose cube overflows `usize` map to (0, 0)
/// so `size()` and `len()` always agree.
fn dimensions(grid_size: i32) -> (usize, usize) {
    if grid_size <= 0 {
        warn!(grid_size, "non-positive grid size, lattice will be empty");
        return (0, 0);
    }
    let size = usize::try_from(grid_size).unwrap_or(0);
    match size.checked_pow(3) {
        Some(len) => (size, len),
        None => {
            warn!(grid_size, "grid size cell count overflows, lattice will be empty");
            (0, 0)
        }
    }
}
