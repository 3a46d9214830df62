//! Repair Optimiser: incremental re-optimisation for localised disruptions
//! (instructor substitution, room substitution, emergency cancellation)
//! that does not require re-running evolution.
//!
//! # Reference
//! Grounded on `services/schedule_repair.py`'s substitution handlers. These
//! functions are pure transformations: they take a snapshot and return a
//! new snapshot plus a diff, leaving mutation of the live production
//! schedule to the caller (see spec.md §5's shared-resource policy).

use std::collections::HashSet;

use crate::error::CoreError;
use crate::models::{Assignment, Schedule};

/// Substitutes `original_instructor_id` with `substitute_instructor_id` on
/// every affected [`Assignment`].
///
/// Fails with [`CoreError::InfeasibleRepair`] (naming the first conflicting
/// slot) if the substitute is already booked at any of the affected slots;
/// no mutation is applied in that case. As a post-condition, the rewritten
/// schedule is checked for feasibility before it is returned; a failure
/// here would mean the conflict check above missed a case, and is reported
/// as [`CoreError::InternalInvariantViolated`].
pub fn substitute_instructor(
    schedule: &Schedule,
    original_instructor_id: &str,
    substitute_instructor_id: &str,
) -> Result<(Schedule, Vec<Assignment>), CoreError> {
    let substitute_slots: HashSet<_> = schedule
        .assignments_for_instructor(substitute_instructor_id)
        .iter()
        .map(|a| a.time_slot)
        .collect();

    let affected: Vec<&Assignment> = schedule.assignments_for_instructor(original_instructor_id);

    for a in &affected {
        if substitute_slots.contains(&a.time_slot) {
            return Err(CoreError::InfeasibleRepair(a.time_slot));
        }
    }

    let mut diff = Vec::new();
    let mut new_assignments = Vec::with_capacity(schedule.len());
    for a in &schedule.assignments {
        if a.instructor_id == original_instructor_id {
            let mut rewritten = a.clone();
            rewritten.instructor_id = substitute_instructor_id.to_string();
            diff.push(rewritten.clone());
            new_assignments.push(rewritten);
        } else {
            new_assignments.push(a.clone());
        }
    }

    let new_schedule = Schedule::from_assignments(new_assignments);
    if !new_schedule.is_feasible() {
        return Err(CoreError::InternalInvariantViolated(
            "instructor substitution produced an infeasible schedule despite passing the conflict check".to_string(),
        ));
    }

    Ok((new_schedule, diff))
}

/// Substitutes `old_room_id` with `new_room_id`. Any affected assignment
/// whose cohort's student count exceeds `new_room_capacity` is cancelled
/// (dropped from the returned schedule) rather than rewritten; the
/// cancelled assignments are returned separately.
///
/// `cohort_student_count` looks up a cohort's current student count by id.
///
/// The signature is fixed by spec.md §6 (no `Result`); the feasibility
/// post-condition is still checked, via `debug_assert!`, since a capacity
/// swap never changes a cohort/instructor/time-slot triple and so can only
/// ever violate feasibility if the capacity check itself is wrong.
pub fn substitute_room(
    schedule: &Schedule,
    old_room_id: &str,
    new_room_id: &str,
    new_room_capacity: u32,
    cohort_student_count: impl Fn(&str) -> Option<u32>,
) -> (Schedule, Vec<Assignment>) {
    let mut cancellations = Vec::new();
    let mut new_assignments = Vec::with_capacity(schedule.len());

    for a in &schedule.assignments {
        if a.room_id != old_room_id {
            new_assignments.push(a.clone());
            continue;
        }

        let student_count = cohort_student_count(&a.cohort_id).unwrap_or(u32::MAX);
        if student_count > new_room_capacity {
            cancellations.push(a.clone());
        } else {
            let mut rewritten = a.clone();
            rewritten.room_id = new_room_id.to_string();
            new_assignments.push(rewritten);
        }
    }

    let new_schedule = Schedule::from_assignments(new_assignments);
    debug_assert!(
        new_schedule.is_feasible(),
        "{}",
        CoreError::InternalInvariantViolated(
            "room substitution produced an infeasible schedule despite the capacity check".to_string()
        )
    );

    (new_schedule, cancellations)
}

/// Marks every assignment for `instructor_id` or `room_id` (whichever is
/// provided) as cancelled, returning the remaining schedule and the
/// cancelled assignments. Used when no substitute/replacement is supplied.
pub fn emergency_cancel(
    schedule: &Schedule,
    instructor_id: Option<&str>,
    room_id: Option<&str>,
) -> (Schedule, Vec<Assignment>) {
    let mut cancellations = Vec::new();
    let mut remaining = Vec::with_capacity(schedule.len());

    for a in &schedule.assignments {
        let affected = instructor_id.is_some_and(|id| a.instructor_id == id)
            || room_id.is_some_and(|id| a.room_id == id);
        if affected {
            cancellations.push(a.clone());
        } else {
            remaining.push(a.clone());
        }
    }

    (Schedule::from_assignments(remaining), cancellations)
}

/// Builds a `cohort_id -> student_count` lookup closure from a cohort list,
/// the shape [`substitute_room`] expects as its `cohort_student_count`
/// argument.
pub fn cohort_lookup(cohorts: &[crate::models::Cohort]) -> impl Fn(&str) -> Option<u32> + '_ {
    move |cohort_id: &str| cohorts.iter().find(|c| c.id() == cohort_id).map(|c| c.student_count)
}
