mod config;
mod game_state;

pub use config::{ConfigError, InitialCondition, SimulationConfig};
pub use game_state::{GameState, Phase, RunState};
