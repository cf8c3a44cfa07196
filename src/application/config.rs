use thiserror::Error;

use crate::domain::DEFAULT_ALIVE_PROBABILITY;

pub const DEFAULT_GRID_SIZE: usize = 20;
/// One generation per second
pub const DEFAULT_UPDATES_PER_SECOND: f32 = 1.0;

/// How the world is populated at start-up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InitialCondition {
    /// Built-in 5x5 test world, centred
    Test,
    #[default]
    Random,
}

impl InitialCondition {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "t" => Some(InitialCondition::Test),
            "r" => Some(InitialCondition::Random),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown initial condition type {0:?}, expected \"t\" or \"r\"")]
    UnknownInitialCondition(String),

    #[error("invalid {name}: {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("grid dimensions must be positive, got {rows} rows x {cols} columns")]
    ZeroDimension { rows: usize, cols: usize },
}

/// Runtime settings for the simulation window
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub p_alive: f64,
    pub updates_per_second: f32,
    /// Fixed seed for reproducible random worlds
    pub seed: Option<u64>,
    pub initial: InitialCondition,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            p_alive: DEFAULT_ALIVE_PROBABILITY,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
            seed: None,
            initial: InitialCondition::default(),
        }
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: Option<String>) -> Result<T, ConfigError> {
    let value = value.ok_or(ConfigError::MissingValue(name))?;
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { name, value })
}

impl SimulationConfig {
    /// Parse `[t|r] [rows cols] [--seed N] [--p-alive P]` (program name excluded).
    pub fn from_args<I>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut positional = Vec::new();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => config.seed = Some(parse_number("seed", args.next())?),
                "--p-alive" => config.p_alive = parse_number("p-alive", args.next())?,
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        if let Some(flag) = positional.next() {
            config.initial = InitialCondition::from_flag(&flag)
                .ok_or(ConfigError::UnknownInitialCondition(flag))?;
        }
        if let Some(rows) = positional.next() {
            config.height = parse_number("rows", Some(rows))?;
            config.width = parse_number("cols", positional.next())?;
        }

        if config.width == 0 || config.height == 0 {
            return Err(ConfigError::ZeroDimension {
                rows: config.height,
                cols: config.width,
            });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::from_args(Vec::new()).unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.p_alive, 0.5);
    }

    #[test]
    fn test_random_with_dimensions() {
        let config = SimulationConfig::from_args(args(&["r", "30", "40", "--seed", "9"])).unwrap();
        assert_eq!(config.initial, InitialCondition::Random);
        assert_eq!((config.width, config.height), (40, 30));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_test_world() {
        let config = SimulationConfig::from_args(args(&["t"])).unwrap();
        assert_eq!(config.initial, InitialCondition::Test);
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(
            SimulationConfig::from_args(args(&["x"])),
            Err(ConfigError::UnknownInitialCondition("x".into()))
        );
    }

    #[test]
    fn test_missing_cols() {
        assert_eq!(
            SimulationConfig::from_args(args(&["r", "10"])),
            Err(ConfigError::MissingValue("cols"))
        );
    }

    #[test]
    fn test_bad_number() {
        assert!(matches!(
            SimulationConfig::from_args(args(&["r", "ten", "10"])),
            Err(ConfigError::InvalidNumber { name: "rows", .. })
        ));
    }

    #[test]
    fn test_zero_dimension() {
        assert_eq!(
            SimulationConfig::from_args(args(&["r", "0", "10"])),
            Err(ConfigError::ZeroDimension { rows: 0, cols: 10 })
        );
    }
}
