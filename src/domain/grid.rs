use super::{CellState, GridError, UpdateMode};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// Probability of a cell starting alive when none is given
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.5;

/// Grid owns the 2D cell buffer and applies generations in place.
///
/// A generation is two passes over every cell: the mark phase turns doomed
/// cells into zombies and newborn cells into embryos, then the cleanup phase
/// resolves zombies to dead and embryos to alive. Zombies still count as live
/// neighbors and embryos do not, so a mark never changes the neighbor count
/// seen by any other decision in the same pass. That is what makes a single
/// buffer sufficient.
///
/// Coordinates outside the grid are permanently dead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with all cells dead.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be positive, got {width}x{height}"
        );
        Self {
            width,
            height,
            cells: vec![CellState::Dead; width * height],
        }
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Buffer index for a signed coordinate, `None` when out of bounds
    fn index_of(&self, x: isize, y: isize) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| self.get_index(x, y))
    }

    /// Replace the whole grid with a copy of `rows`.
    ///
    /// `rows` must have exactly `height` rows of exactly `width` cells each,
    /// otherwise the grid is left untouched and `DimensionMismatch` is returned.
    pub fn set_grid<R: AsRef<[CellState]>>(&mut self, rows: &[R]) -> Result<(), GridError> {
        let (width, height) = self.dimensions();
        let mismatch = |found_width: usize| GridError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            found_width,
            found_height: rows.len(),
        };

        if rows.len() != height {
            let first_width = rows.first().map_or(0, |row| row.as_ref().len());
            return Err(mismatch(first_width));
        }
        if let Some(row) = rows.iter().map(AsRef::as_ref).find(|row| row.len() != width) {
            return Err(mismatch(row.len()));
        }

        self.cells.clear();
        self.cells
            .extend(rows.iter().flat_map(|row| row.as_ref().iter().copied()));
        Ok(())
    }

    /// Randomize with a thread-local generator
    pub fn set_random_grid(&mut self, p_alive: f64) {
        self.set_random_grid_with(&mut rand::rng(), p_alive);
    }

    /// Randomize reproducibly: the same seed always yields the same grid.
    pub fn set_random_grid_seeded(&mut self, seed: u64, p_alive: f64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.set_random_grid_with(&mut rng, p_alive);
    }

    /// Set every cell alive with probability `p_alive`, dead otherwise.
    /// The probability is clamped to `[0, 1]`; NaN counts as zero.
    pub fn set_random_grid_with<R: Rng>(&mut self, rng: &mut R, p_alive: f64) {
        let p = if p_alive.is_nan() {
            0.0
        } else {
            p_alive.clamp(0.0, 1.0)
        };

        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(p) {
                CellState::Alive
            } else {
                CellState::Dead
            };
        });
    }

    /// State at (x, y); anything outside the grid is dead.
    pub fn get_cell(&self, x: isize, y: isize) -> CellState {
        self.index_of(x, y)
            .map_or(CellState::Dead, |idx| self.cells[idx])
    }

    /// Zombie or embryo at (x, y)
    pub fn is_transient(&self, x: isize, y: isize) -> bool {
        self.get_cell(x, y).is_transient()
    }

    /// Count alive and zombie cells among the 8 Moore neighbors.
    /// Neighbors beyond the edges read as dead, there is no wrapping.
    pub fn neighbor_count(&self, x: isize, y: isize) -> u8 {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(nx), Some(ny)) => self.get_cell(nx, ny),
                _ => CellState::Dead,
            })
            .filter(|cell| cell.is_live())
            .count() as u8
    }

    /// Whether the mark phase should advance (x, y). Pure.
    pub fn should_transition(&self, x: isize, y: isize) -> bool {
        self.get_cell(x, y)
            .should_transition(self.neighbor_count(x, y))
    }

    /// Move (x, y) one step along Embryo -> Alive -> Zombie -> Dead -> Embryo.
    /// Out of bounds is a no-op.
    pub fn advance_cell(&mut self, x: isize, y: isize) {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = self.cells[idx].advance();
        }
    }

    /// All in-bounds coordinates in row-major order
    fn coordinates(&self) -> impl Iterator<Item = (isize, isize)> + use<> {
        let (width, height) = (self.width as isize, self.height as isize);
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// First half-step: mark dying cells as zombies and newborn cells as embryos.
    pub fn mark_for_transition(&mut self) {
        self.mark_for_transition_with(UpdateMode::default());
    }

    pub fn mark_for_transition_with(&mut self, mode: UpdateMode) {
        match mode {
            UpdateMode::InPlace => {
                for (x, y) in self.coordinates() {
                    if self.should_transition(x, y) {
                        self.advance_cell(x, y);
                    }
                }
            }
            UpdateMode::Parallel => {
                let width = self.width;
                let marked: Vec<(isize, isize)> = (0..self.cells.len())
                    .into_par_iter()
                    .map(|idx| ((idx % width) as isize, (idx / width) as isize))
                    .filter(|&(x, y)| self.should_transition(x, y))
                    .collect();

                for (x, y) in marked {
                    self.advance_cell(x, y);
                }
            }
        }
    }

    /// Second half-step: zombies die and embryos come alive.
    pub fn clean_up_grid(&mut self) {
        for (x, y) in self.coordinates() {
            if self.is_transient(x, y) {
                self.advance_cell(x, y);
            }
        }
    }

    /// One full generation: mark phase then cleanup phase.
    pub fn advance_generation(&mut self) {
        self.advance_generation_with(UpdateMode::default());
    }

    pub fn advance_generation_with(&mut self, mode: UpdateMode) {
        self.mark_for_transition_with(mode);
        self.clean_up_grid();
    }

    /// Independent copy of the grid as rows, top to bottom
    pub fn snapshot(&self) -> Vec<Vec<CellState>> {
        self.cells
            .chunks(self.width)
            .map(<[CellState]>::to_vec)
            .collect()
    }

    /// Number of cells counted live (alive or zombie)
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_live()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }
}
