mod cell;
mod error;
mod grid;
mod patterns;
mod algorithm;

pub use cell::{CellState, parse_rows};
pub use error::GridError;
pub use grid::{Grid, DEFAULT_ALIVE_PROBABILITY};
pub use patterns::{Pattern, presets};
pub use algorithm::UpdateMode;
