//! Constraint-aware genetic-algorithm core for weekly university timetable
//! scheduling.
//!
//! Five cooperating components, leaves-first:
//!
//! 1. [`build`] — Input Model Builder: raw records → immutable [`models::ProblemInstance`].
//! 2. [`ga::chromosome`] — Chromosome Constructor: greedy randomised [`models::Schedule`] construction.
//! 3. [`ga::fitness`] — Fitness Evaluator: pure `Schedule -> f64` scoring.
//! 4. [`ga::engine`] — Evolutionary Engine: the generational search loop.
//! 5. [`ga::orchestrator`] — Multi-start Orchestrator: parallel independent runs.
//!
//! [`repair`] handles incremental disruptions (instructor/room substitution,
//! emergency cancellation) without re-running evolution.
//!
//! This crate does not open sockets, files, or databases; it consumes and
//! emits plain records (see [`build::BuildInputs`], [`models::Schedule`],
//! [`ga::RunResult`]).

pub mod build;
pub mod config;
pub mod error;
pub mod ga;
pub mod models;
pub mod repair;

pub use build::{build_problem, BuildInputs};
pub use config::Config;
pub use error::CoreError;
pub use ga::{run_multi, run_once, RunOptions, RunResult};
