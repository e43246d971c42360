use super::SimulationConfig;
use crate::domain::{Algorithm, Coordinate, Lattice, engine};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Instant;
use tracing::{debug, info};

/// Simulation orchestrates the automaton.
/// This is the application layer that owns the lattice and drives the engine;
/// the presentation layer holds it and calls in.
///
/// Run-control methods (`toggle_running`, `reset`, `tick`, `adjust_speed`)
/// consume and return `Self` so input handling can fold over them; lattice
/// edits (`toggle`, `advance`, `initialize`, `resize`) take `&mut self`.
pub struct Simulation<R = StdRng> {
    lattice: Lattice,
    grid_size: i32,
    live_probability: f64,
    running: bool,
    generation: u64,
    algorithm: Algorithm,
    updates_per_second: f32,
    update_timer: f32,
    last_step_time_ms: f32,
    rng: R,
}

impl Simulation<StdRng> {
    /// Create a simulation from config, seeding from it or from the OS
    pub fn new(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    /// Create a simulation drawing initial states from the given source
    pub fn with_rng(config: &SimulationConfig, mut rng: R) -> Self {
        let lattice = Lattice::initialize(config.grid_size, config.live_probability, &mut rng);
        info!(
            grid_size = config.grid_size,
            live_probability = config.live_probability,
            algorithm = config.algorithm.name(),
            "simulation created"
        );
        Self {
            lattice,
            grid_size: config.grid_size,
            live_probability: config.live_probability,
            running: false,
            generation: 0,
            algorithm: config.algorithm,
            updates_per_second: config.updates_per_second,
            update_timer: 0.0,
            last_step_time_ms: 0.0,
            rng,
        }
    }

    /// Current lattice snapshot
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn grid_size(&self) -> i32 {
        self.grid_size
    }

    pub fn live_probability(&self) -> f64 {
        self.live_probability
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn updates_per_second(&self) -> f32 {
        self.updates_per_second
    }

    /// Wall time of the most recent `advance`
    pub fn last_step_time_ms(&self) -> f32 {
        self.last_step_time_ms
    }

    pub fn live_cells(&self) -> usize {
        self.lattice.live_count()
    }

    /// Replace the lattice with a freshly randomized one of the given size.
    /// Generation and running state are left alone.
    pub fn initialize(&mut self, grid_size: i32) {
        self.grid_size = grid_size;
        self.lattice = Lattice::initialize(grid_size, self.live_probability, &mut self.rng);
        info!(grid_size, live = self.lattice.live_count(), "lattice initialized");
    }

    /// Change grid size: new lattice, generation zero, stopped
    pub fn resize(&mut self, grid_size: i32) {
        self.grid_size = grid_size;
        self.restart();
    }

    /// Flip one cell; coordinates outside the lattice are ignored
    pub fn toggle(&mut self, coordinate: Coordinate) {
        if let Some(cell) = self.lattice.toggle(coordinate) {
            debug!(?coordinate, alive = cell.alive, "cell toggled");
        }
    }

    /// Compute one generation and swap it in
    pub fn advance(&mut self) {
        let start = Instant::now();
        self.lattice = engine::advance_with(&self.lattice, self.algorithm);
        self.generation += 1;
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        debug!(
            generation = self.generation,
            live = self.lattice.live_count(),
            algorithm = self.algorithm.name(),
            elapsed_ms = self.last_step_time_ms,
            "generation advanced"
        );
    }

    /// Set the generation algorithm
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.running = !self.running;
        self
    }

    /// Reinitialize lattice, zero the generation counter and stop
    pub fn reset(mut self) -> Self {
        self.restart();
        self
    }

    /// Shared by `reset` (consuming) and `resize` (`&mut self`)
    fn restart(&mut self) {
        self.generation = 0;
        self.running = false;
        self.update_timer = 0.0;
        self.initialize(self.grid_size);
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Update simulation by one frame.
    /// Steps at most once per call, and only while running.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.advance();
            self.update_timer = 0.0;
        }

        self
    }
}
