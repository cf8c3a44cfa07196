use macroquad::logging::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::application::{InitialCondition, SimulationConfig};
use crate::domain::{CellState, Grid, GridError, Pattern, UpdateMode, presets};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Paused,
}

/// Where the grid is within the current generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No zombies or embryos on the grid
    Stable,
    /// Mark phase applied, cleanup pending
    Marked,
}

/// GameState orchestrates the simulation.
/// This is the application layer that drives the grid engine; it never
/// touches rendering so it can be tested headless.
pub struct GameState {
    pub grid: Grid,
    pub mode: UpdateMode,
    pub run_state: RunState,
    pub phase: Phase,
    pub time_step: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub p_alive: f64,
    pub initial: InitialCondition,
    /// Index into `presets::all_patterns()` of the next pattern to seed
    pub pattern_index: usize,
    pub last_generation_ms: f32,
    rng: SmallRng,
}

impl GameState {
    /// Create a running state over an all-dead grid
    pub fn new(width: usize, height: usize) -> Self {
        let config = SimulationConfig {
            width,
            height,
            ..SimulationConfig::default()
        };
        Self::with_grid(Grid::new(width, height), &config)
    }

    fn with_grid(grid: Grid, config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self {
            grid,
            mode: UpdateMode::default(),
            run_state: RunState::Running,
            phase: Phase::Stable,
            time_step: 0,
            update_timer: 0.0,
            updates_per_second: config.updates_per_second,
            p_alive: config.p_alive,
            initial: config.initial,
            pattern_index: 0,
            last_generation_ms: 0.0,
            rng,
        }
    }

    /// Build the state described by `config` and apply its initial condition
    pub fn from_config(config: &SimulationConfig) -> Result<Self, GridError> {
        let mut state = Self::with_grid(Grid::new(config.width, config.height), config);
        state.seed_initial()?;
        Ok(state)
    }

    fn seed_initial(&mut self) -> Result<(), GridError> {
        match self.initial {
            InitialCondition::Test => self.seed_pattern(&presets::test_world())?,
            InitialCondition::Random => self.seed_random(self.p_alive),
        }
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            info!("paused at time step {}", self.time_step);
            self.run_state = RunState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.run_state == RunState::Paused {
            info!("resumed at time step {}", self.time_step);
            self.run_state = RunState::Running;
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        match self.run_state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    pub fn cycle_mode(mut self) -> Self {
        self.mode = self.mode.next();
        info!("update mode: {}", self.mode.name());
        self
    }

    fn reset_clock(&mut self) {
        self.time_step = 0;
        self.update_timer = 0.0;
        self.phase = Phase::Stable;
    }

    /// Replace the grid contents; the time step restarts on success.
    pub fn seed_rows<R: AsRef<[CellState]>>(&mut self, rows: &[R]) -> Result<(), GridError> {
        self.grid.set_grid(rows)?;
        self.reset_clock();
        Ok(())
    }

    pub fn seed_pattern(&mut self, pattern: &Pattern) -> Result<(), GridError> {
        let (width, height) = self.grid.dimensions();
        self.seed_rows(&pattern.seed_rows_centered(width, height))?;
        info!(
            "seeded {} ({}) on {}x{} grid",
            pattern.name, pattern.description, width, height
        );
        Ok(())
    }

    pub fn seed_random(&mut self, p_alive: f64) {
        self.grid.set_random_grid_with(&mut self.rng, p_alive);
        self.reset_clock();
        info!(
            "seeded random grid (p_alive = {}), {} cells alive",
            p_alive,
            self.grid.live_count()
        );
    }

    /// Reseed randomly with the configured probability
    pub fn randomize(mut self) -> Self {
        let p_alive = self.p_alive;
        self.seed_random(p_alive);
        self
    }

    /// Reseed with the built-in test world
    pub fn reseed_test_world(mut self) -> Self {
        if let Err(err) = self.seed_pattern(&presets::test_world()) {
            warn!("could not seed test world: {}", err);
        }
        self
    }

    /// Start over from the configured initial condition
    pub fn reset(mut self) -> Self {
        if let Err(err) = self.seed_initial() {
            warn!("could not reset world: {}", err);
        }
        self
    }

    /// Seed the next preset pattern, wrapping around after the last one
    pub fn next_pattern(mut self) -> Self {
        let patterns = presets::all_patterns();
        let pattern = &patterns[self.pattern_index % patterns.len()];
        if let Err(err) = self.seed_pattern(pattern) {
            warn!("could not seed {}: {}", pattern.name, err);
        }
        self.pattern_index = (self.pattern_index + 1) % patterns.len();
        self
    }

    /// Single step requested by the user; ignored while running
    pub fn manual_step(&mut self) {
        if !self.is_running() {
            self.step();
        }
    }

    /// Half-step requested by the user; ignored while running
    pub fn manual_half_step(&mut self) {
        if !self.is_running() {
            self.half_step();
        }
    }

    /// Apply one whole generation, finishing a pending cleanup first if
    /// the grid was left half-stepped.
    pub fn step(&mut self) {
        let start = std::time::Instant::now();
        match self.phase {
            Phase::Stable => self.grid.advance_generation_with(self.mode),
            Phase::Marked => self.grid.clean_up_grid(),
        }
        self.last_generation_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.phase = Phase::Stable;
        self.time_step += 1;
    }

    /// Apply only the next phase, exposing zombies and embryos in between.
    pub fn half_step(&mut self) {
        match self.phase {
            Phase::Stable => {
                self.grid.mark_for_transition_with(self.mode);
                self.phase = Phase::Marked;
            }
            Phase::Marked => {
                self.grid.clean_up_grid();
                self.phase = Phase::Stable;
                self.time_step += 1;
            }
        }
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running() {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.step();
            self.update_timer = 0.0;
        }

        self
    }
}
