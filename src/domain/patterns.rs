use super::CellState;

/// Represents a pattern that can be seeded onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>,  // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Render the pattern into `height` rows of `width` dead cells with the
    /// pattern's top-left corner at (x, y). Cells past the edges are clipped.
    /// The result is meant for `Grid::set_grid`.
    pub fn seed_rows(&self, width: usize, height: usize, x: usize, y: usize) -> Vec<Vec<CellState>> {
        let mut rows = vec![vec![CellState::Dead; width]; height];
        for (dx, dy) in &self.cells {
            let (px, py) = (x + dx, y + dy);
            if px < width && py < height {
                rows[py][px] = CellState::Alive;
            }
        }
        rows
    }

    /// Same as `seed_rows`, centred in the target area
    pub fn seed_rows_centered(&self, width: usize, height: usize) -> Vec<Vec<CellState>> {
        let x = width.saturating_sub(self.width) / 2;
        let y = height.saturating_sub(self.height) / 2;
        self.seed_rows(width, height, x, y)
    }
}

/// Classic patterns plus the 5x5 test world
pub mod presets {
    use super::*;

    /// Glider - moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    /// Test world: collapses onto a T-shaped cluster after one generation
    pub fn test_world() -> Pattern {
        Pattern::new(
            "Test world",
            "5x5 glider-like seed",
            vec![
                (1, 0), (4, 0),
                (1, 2), (2, 2), (3, 2),
                (2, 3),
                (0, 4), (4, 4),
            ]
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            block(),
            test_world(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grid, parse_rows};

    #[test]
    fn test_pattern_bounds() {
        let glider = presets::glider();
        assert_eq!((glider.width, glider.height), (3, 3));
        assert_eq!(presets::test_world().width, 5);
    }

    #[test]
    fn test_seed_rows_places_alive_cells() {
        let rows = presets::block().seed_rows(4, 3, 1, 1);
        assert_eq!(rows, parse_rows("dddd daad daad").unwrap());
    }

    #[test]
    fn test_seed_rows_clips_at_edges() {
        let rows = presets::block().seed_rows(3, 3, 2, 2);
        assert_eq!(rows, parse_rows("ddd ddd dda").unwrap());
    }

    #[test]
    fn test_seed_rows_centered() {
        let rows = presets::blinker().seed_rows_centered(5, 5);
        assert_eq!(rows, parse_rows("ddddd ddddd daaad ddddd ddddd").unwrap());
    }

    fn assert_period_two(pattern: Pattern) {
        let mut grid = Grid::new(6, 6);
        grid.set_grid(&pattern.seed_rows(6, 6, 1, 1)).unwrap();
        let start = grid.clone();

        grid.advance_generation();
        assert_ne!(grid, start, "{} changes after one generation", pattern.name);
        grid.advance_generation();
        assert_eq!(grid, start, "{} returns after two generations", pattern.name);
    }

    #[test]
    fn test_toad_oscillates() {
        assert_period_two(presets::toad());
    }

    #[test]
    fn test_beacon_oscillates() {
        assert_period_two(presets::beacon());
    }

    #[test]
    fn test_all_patterns_are_described() {
        let patterns = presets::all_patterns();
        assert_eq!(patterns.len(), 6);
        for pattern in &patterns {
            assert!(!pattern.description.is_empty(), "{}", pattern.name);
            assert!(pattern.cells.iter().all(|&(x, y)| x < pattern.width && y < pattern.height));
        }
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = Grid::new(4, 4);
        grid.set_grid(&presets::block().seed_rows(4, 4, 1, 1)).unwrap();
        let before = grid.clone();
        grid.advance_generation();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_glider_returns_after_four_generations() {
        let mut grid = Grid::new(8, 8);
        grid.set_grid(&presets::glider().seed_rows(8, 8, 0, 0)).unwrap();
        for _ in 0..4 {
            grid.advance_generation();
        }
        let expected = presets::glider().seed_rows(8, 8, 1, 1);
        assert_eq!(grid.snapshot(), expected);
    }
}
