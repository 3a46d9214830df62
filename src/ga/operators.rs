//! Genetic operators: tournament selection, two-point crossover, mutation,
//! and the deterministic conflict-repair scan shared by both.
//!
//! # Reference
//! Grounded on `services/ga_engine.py`'s `_tournament_selection`,
//! `_crossover`, and `_mutate`. Repair is intentionally a drop-on-conflict
//! scan rather than a validity-preserving operator, trading lost sessions
//! (absorbed by fitness) for genetic variety.

use rand::seq::index::sample;
use rand::Rng;

use crate::config::Config;
use crate::error::CoreError;
use crate::ga::fitness::fitness;
use crate::models::{ProblemInstance, Schedule, TimeSlot};

/// Samples `min(tournament_size, population.len())` distinct chromosomes
/// uniformly and returns the fittest (ties break on first-seen).
pub fn tournament_select<'a>(
    population: &'a [(Schedule, f64)],
    tournament_size: usize,
    rng: &mut impl Rng,
) -> &'a Schedule {
    let size = tournament_size.min(population.len());
    let picks = sample(rng, population.len(), size);

    let mut best_idx = picks.index(0);
    let mut best_fitness = population[best_idx].1;
    for i in picks.iter().skip(1) {
        if population[i].1 > best_fitness {
            best_idx = i;
            best_fitness = population[i].1;
        }
    }
    &population[best_idx].0
}

/// Two-point crossover with repair. If `min(|p1|, |p2|) < 2`, returns a
/// repaired copy of `p1`.
///
/// The child starts with `dropped_sessions = 0`: splicing slices from two
/// parents has no principled way to combine their individual drop counts, so
/// lineage resets here and `repair` below counts only what crossover itself
/// discards.
pub fn crossover(p1: &Schedule, p2: &Schedule, rng: &mut impl Rng) -> Result<Schedule, CoreError> {
    let n = p1.len().min(p2.len());
    if n < 2 {
        return repair(p1.clone());
    }

    let mid = n / 2;
    let c1 = rng.random_range(1..=mid.max(1));
    let c2 = rng.random_range(mid..n);
    let (c1, c2) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };

    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&p1.assignments[0..c1]);
    child.extend_from_slice(&p2.assignments[c1..c2]);
    child.extend_from_slice(&p1.assignments[c2..]);

    repair(Schedule::from_assignments(child))
}

/// Mutation strategies (spec §4.4). `room` is a documented no-op: the
/// original source lists a room-mutation branch that no `if` ever reaches,
/// so room reassignment is folded entirely into timeslot-driven repair.
enum MutationStrategy {
    Timeslot,
    Swap,
    Room,
}

fn pick_strategy(rng: &mut impl Rng) -> MutationStrategy {
    match rng.random_range(0..3) {
        0 => MutationStrategy::Timeslot,
        1 => MutationStrategy::Swap,
        _ => MutationStrategy::Room,
    }
}

/// Applies one mutation strategy with probability `mutation_rate`, then
/// re-runs conflict repair.
pub fn mutate(
    schedule: &Schedule,
    problem: &ProblemInstance,
    mutation_rate: f64,
    rng: &mut impl Rng,
) -> Result<Schedule, CoreError> {
    if schedule.is_empty() || rng.random::<f64>() >= mutation_rate {
        return Ok(schedule.clone());
    }

    let mut mutated = schedule.clone();
    match pick_strategy(rng) {
        MutationStrategy::Timeslot => {
            let idx = rng.random_range(0..mutated.assignments.len());
            mutated.assignments[idx].time_slot = random_slot(problem, rng);
        }
        MutationStrategy::Swap => {
            if mutated.assignments.len() >= 2 {
                let i = rng.random_range(0..mutated.assignments.len());
                let j = rng.random_range(0..mutated.assignments.len());
                let (a, b) = (mutated.assignments[i].time_slot, mutated.assignments[j].time_slot);
                mutated.assignments[i].time_slot = b;
                mutated.assignments[j].time_slot = a;
            }
        }
        MutationStrategy::Room => {}
    }

    repair(mutated)
}

fn random_slot(problem: &ProblemInstance, rng: &mut impl Rng) -> TimeSlot {
    problem.time_slots[rng.random_range(0..problem.time_slots.len())]
}

/// Deterministic conflict-removal pass: scans assignments in order,
/// tracking used `(instructor, slot)`, `(cohort, slot)`, `(room, slot)`
/// triples, and drops any assignment that collides with one already kept.
/// Drops are added to the incoming schedule's `dropped_sessions` count
/// rather than replacing it, so a chromosome's diagnostic counter survives
/// repeated repair across generations.
///
/// Checks its own post-condition (the returned schedule is feasible) before
/// returning; a violation can only mean the conflict scan above has a bug,
/// so it is reported as [`CoreError::InternalInvariantViolated`] rather than
/// silently handed back to the caller.
pub fn repair(schedule: Schedule) -> Result<Schedule, CoreError> {
    use std::collections::HashSet;

    let carried_dropped = schedule.dropped_sessions;
    let mut instructor_used = HashSet::new();
    let mut cohort_used = HashSet::new();
    let mut room_used = HashSet::new();
    let mut kept = Vec::with_capacity(schedule.len());
    let mut newly_dropped = 0u32;

    for a in schedule.assignments {
        let i_key = (a.instructor_id.clone(), a.time_slot);
        let c_key = (a.cohort_id.clone(), a.time_slot);
        let r_key = (a.room_id.clone(), a.time_slot);

        if instructor_used.contains(&i_key) || cohort_used.contains(&c_key) || room_used.contains(&r_key) {
            newly_dropped += 1;
            continue;
        }

        instructor_used.insert(i_key);
        cohort_used.insert(c_key);
        room_used.insert(r_key);
        kept.push(a);
    }

    let mut repaired = Schedule::from_assignments(kept);
    repaired.dropped_sessions = carried_dropped + newly_dropped;

    if !repaired.is_feasible() {
        return Err(CoreError::InternalInvariantViolated(
            "repair's conflict scan produced a schedule that is still infeasible".to_string(),
        ));
    }

    Ok(repaired)
}

/// Evaluates fitness for every chromosome in a population, for use by the
/// evolutionary engine's per-generation sort.
pub fn evaluate_population(population: Vec<Schedule>, config: &Config) -> Vec<(Schedule, f64)> {
    population
        .into_iter()
        .map(|s| {
            let f = fitness(&s, config);
            (s, f)
        })
        .collect()
}
