//! Evolutionary Engine: the generational search loop.
//!
//! # Reference
//! Grounded on `services/ga_engine.py`'s `run` method: elitism, tournament
//! selection, crossover-with-repair, mutation-with-repair, adaptive
//! mutation on stagnation, early stopping, and a progress/cancellation
//! contract expressed here as plain closures rather than ambient I/O.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::CoreError;
use crate::ga::chromosome::create_chromosome;
use crate::ga::fitness::fitness;
use crate::ga::operators::{crossover, evaluate_population, mutate, tournament_select};
use crate::models::{ProblemInstance, Schedule};

/// Emitted to an optional progress sink after each generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEvent {
    /// Zero-based generation index just completed.
    pub generation: u32,
    /// Best fitness observed so far.
    pub best_fitness: f64,
}

/// Cooperative cancellation signal, polled at generation boundaries.
pub type CancelSignal = Arc<AtomicBool>;

/// Optional hooks accepted by [`run_once`].
#[derive(Default)]
pub struct RunOptions {
    /// Invoked after every generation with the current best fitness.
    pub progress: Option<Box<dyn Fn(ProgressEvent) + Send + Sync>>,
    /// Polled at the top of every generation; once set, the run terminates
    /// and returns the best-ever chromosome found so far.
    pub cancel: Option<CancelSignal>,
}

impl RunOptions {
    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|c| c.load(Ordering::Relaxed))
    }

    fn report(&self, event: ProgressEvent) {
        if let Some(sink) = &self.progress {
            sink(event);
        }
    }
}

/// Outcome of one evolutionary run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    /// The best-ever chromosome found.
    pub schedule: Schedule,
    /// Its fitness.
    pub fitness: f64,
    /// Best fitness recorded at the end of each completed generation.
    pub fitness_history: Vec<f64>,
    /// Number of generations actually executed.
    pub generations_executed: u32,
    /// Whether the run terminated via early stopping or cancellation
    /// rather than exhausting `max_generations`.
    pub stopped_early: bool,
    /// Wall-clock duration of the run, in seconds.
    pub wall_time_seconds: f64,
    /// Sessions dropped from `schedule` by the constructor or by repair
    /// (spec's `UnschedulableSession` counter, carried through the engine).
    pub dropped_sessions: u32,
}

impl RunResult {
    /// Reinterprets a run cancelled before generation 0 completed as a typed
    /// error, for callers that want `Result`-shaped flow instead of
    /// inspecting `stopped_early`/`schedule.is_empty()` themselves.
    pub fn into_typed_result(self) -> Result<RunResult, CoreError> {
        if self.stopped_early && self.generations_executed == 0 && self.schedule.is_empty() {
            Err(CoreError::Cancelled)
        } else {
            Ok(self)
        }
    }
}

/// Runs one evolutionary search to completion (or early stop/cancellation).
///
/// Deterministic under a fixed `seed`: every stochastic decision (session
/// tie-break, constructor candidate choice, tournament sample, crossover
/// points, mutation strategy and target) draws from one `ChaCha8Rng` stream
/// seeded once at the start of the run.
pub fn run_once(problem: &ProblemInstance, seed: u64, config: &Config, options: &RunOptions) -> RunResult {
    let started_at = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ga = &config.ga;

    if options.is_cancelled() {
        return RunResult {
            schedule: Schedule::new(),
            fitness: 0.0,
            fitness_history: Vec::new(),
            generations_executed: 0,
            stopped_early: true,
            wall_time_seconds: started_at.elapsed().as_secs_f64(),
            dropped_sessions: 0,
        };
    }

    let population: Vec<Schedule> = (0..ga.population_size)
        .map(|_| create_chromosome(problem, &mut rng))
        .collect();

    if population.is_empty() {
        return RunResult {
            schedule: Schedule::new(),
            fitness: 0.0,
            fitness_history: Vec::new(),
            generations_executed: 0,
            stopped_early: false,
            wall_time_seconds: started_at.elapsed().as_secs_f64(),
            dropped_sessions: 0,
        };
    }

    let mut population = population;
    let mut fitness_history = Vec::new();
    let mut best_ever = population[0].clone();
    let mut best_ever_fitness = fitness(&best_ever, config);
    let mut generations_since_improvement = 0u32;
    let mut mutation_rate = ga.mutation_rate;
    let mut generations_executed = 0u32;
    let mut stopped_early = false;

    for generation in 0..ga.max_generations {
        if options.is_cancelled() {
            stopped_early = true;
            break;
        }

        let mut scored = evaluate_population(population, config);
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let (current_best_schedule, current_best_fitness) = scored[0].clone();
        fitness_history.push(current_best_fitness);
        generations_executed = generation + 1;

        if current_best_fitness > best_ever_fitness {
            best_ever = current_best_schedule.clone();
            best_ever_fitness = current_best_fitness;
            generations_since_improvement = 0;
        } else {
            generations_since_improvement += 1;
        }

        options.report(ProgressEvent {
            generation,
            best_fitness: best_ever_fitness,
        });

        if best_ever_fitness >= ga.early_stop_fitness {
            stopped_early = true;
            break;
        }

        if generations_since_improvement > ga.stagnation_window {
            mutation_rate = (mutation_rate * 1.1).min(ga.mutation_rate_cap);
            debug!(mutation_rate, "stagnation detected, bumping mutation rate");
        }

        let elite_count = ga.elite_count().min(scored.len());
        let mut next_generation: Vec<Schedule> = scored[0..elite_count].iter().map(|(s, _)| s.clone()).collect();

        while next_generation.len() < ga.population_size {
            let parent1 = tournament_select(&scored, ga.tournament_size, &mut rng);
            let parent2 = tournament_select(&scored, ga.tournament_size, &mut rng);
            let child = crossover(parent1, parent2, &mut rng).unwrap_or_else(abort_on_invariant_violation);
            let child = mutate(&child, problem, mutation_rate, &mut rng).unwrap_or_else(abort_on_invariant_violation);
            next_generation.push(child);
        }

        population = next_generation;
    }

    if generations_executed == ga.max_generations && !stopped_early {
        info!(generations_executed, "max_generations reached without early stop");
    }

    RunResult {
        dropped_sessions: best_ever.dropped_sessions,
        schedule: best_ever,
        fitness: best_ever_fitness,
        fitness_history,
        generations_executed,
        stopped_early,
        wall_time_seconds: started_at.elapsed().as_secs_f64(),
    }
}

/// Repair's own feasibility post-condition failed inside the generation
/// loop — a bug in the conflict scan, not a recoverable per-session drop.
/// Logged then re-raised as a panic, matching spec.md §7: internal
/// invariant violations are fatal and the run aborts.
fn abort_on_invariant_violation(e: CoreError) -> Schedule {
    error!(error = %e, "fatal invariant violation; aborting run");
    panic!("{e}");
}
