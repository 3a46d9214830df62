//! Scheduling configuration: the weekly grid shape, quality-penalty knobs,
//! and the evolutionary engine's tunables.

use serde::{Deserialize, Serialize};

use crate::models::TimeGrid;

/// Top-level configuration consumed by the builder, fitness evaluator, and
/// evolutionary engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// The weekly time grid (day names, hours per day).
    pub grid: TimeGrid,
    /// Longest allowed run of consecutive hours per cohort per day before
    /// the excessive-consecutive-classes penalty kicks in.
    pub max_consecutive: u32,
    /// Evolutionary engine tunables.
    pub ga: GaConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: TimeGrid::default_week(),
            max_consecutive: 4,
            ga: GaConfig::default(),
        }
    }
}

impl Config {
    /// Creates a config with a custom grid, keeping other defaults.
    pub fn with_grid(mut self, grid: TimeGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Sets `max_consecutive`.
    pub fn with_max_consecutive(mut self, max_consecutive: u32) -> Self {
        self.max_consecutive = max_consecutive;
        self
    }

    /// Sets the GA tunables.
    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }
}

/// Evolutionary engine parameters (spec.md §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Chromosomes per generation.
    pub population_size: usize,
    /// Upper bound on generations.
    pub max_generations: u32,
    /// Probability a child is mutated (adaptively increased on stagnation).
    pub mutation_rate: f64,
    /// Fraction of top chromosomes copied unchanged each generation.
    pub elitism_rate: f64,
    /// Sampled candidates per parent selection.
    pub tournament_size: usize,
    /// Terminate once best fitness reaches this value.
    pub early_stop_fitness: f64,
    /// Generations of no improvement before the mutation rate is bumped.
    pub stagnation_window: u32,
    /// Upper bound on the adaptively-increased mutation rate.
    pub mutation_rate_cap: f64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            mutation_rate: 0.02,
            elitism_rate: 0.05,
            tournament_size: 5,
            early_stop_fitness: 0.99,
            stagnation_window: 20,
            mutation_rate_cap: 0.10,
        }
    }
}

impl GaConfig {
    /// Number of elite chromosomes carried over verbatim each generation.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64) * self.elitism_rate).floor() as usize
    }
}
