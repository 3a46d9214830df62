//! The evolutionary search stack: chromosome construction, fitness
//! evaluation, genetic operators, the per-run engine, and the multi-start
//! orchestrator that dispatches several runs across a worker pool.
//!
//! See [`crate`] for the five-component system overview.

pub mod chromosome;
pub mod engine;
pub mod fitness;
pub mod operators;
pub mod orchestrator;

pub use chromosome::create_chromosome;
pub use engine::{run_once, CancelSignal, ProgressEvent, RunOptions, RunResult};
pub use fitness::fitness;
pub use orchestrator::run_multi;
