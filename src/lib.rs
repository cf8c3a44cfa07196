// Domain layer - the two-phase grid engine
pub mod domain;

// Application layer - driver state and configuration
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{CellState, Grid, GridError, Pattern, UpdateMode, presets};
pub use application::{GameState, SimulationConfig};
