//! Schedule (chromosome) and Assignment (gene) models.
//!
//! A [`Schedule`] is an ordered sequence of [`Assignment`]s. Order is not
//! semantically meaningful but is preserved for determinism under a fixed
//! seed. A schedule is *feasible* iff no (instructor, slot), (cohort, slot),
//! or (room, slot) triple appears more than once.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::TimeSlot;

/// A single scheduled class session (gene).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Owning cohort identity string.
    pub cohort_id: String,
    /// Subject name.
    pub subject_name: String,
    /// Assigned instructor ID.
    pub instructor_id: String,
    /// Assigned room ID.
    pub room_id: String,
    /// Assigned time slot.
    pub time_slot: TimeSlot,
    /// Alternating-week label; defaults to `"all"`.
    pub week_label: String,
}

impl Assignment {
    /// Creates a new assignment with `week_label = "all"`.
    pub fn new(
        cohort_id: impl Into<String>,
        subject_name: impl Into<String>,
        instructor_id: impl Into<String>,
        room_id: impl Into<String>,
        time_slot: TimeSlot,
    ) -> Self {
        Self {
            cohort_id: cohort_id.into(),
            subject_name: subject_name.into(),
            instructor_id: instructor_id.into(),
            room_id: room_id.into(),
            time_slot,
            week_label: "all".to_string(),
        }
    }

    /// Sets a non-default week label.
    pub fn with_week_label(mut self, week_label: impl Into<String>) -> Self {
        self.week_label = week_label.into();
        self
    }
}

/// An ordered sequence of [`Assignment`]s representing one candidate weekly
/// plan (a chromosome, in genetic-algorithm terms).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Assignments, in construction order.
    pub assignments: Vec<Assignment>,
    /// Count of sessions that could not be placed (constructor) or had to be
    /// dropped to restore feasibility (repair). Diagnostic only; not used by
    /// fitness, which scores `assignments` as given.
    pub dropped_sessions: u32,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from a vector of assignments, with
    /// `dropped_sessions` left at zero.
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self { assignments, dropped_sessions: 0 }
    }

    /// Adds an assignment.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule has no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// All assignments for a given instructor.
    pub fn assignments_for_instructor<'a>(&'a self, instructor_id: &str) -> Vec<&'a Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.instructor_id == instructor_id)
            .collect()
    }

    /// All assignments for a given room.
    pub fn assignments_for_room<'a>(&'a self, room_id: &str) -> Vec<&'a Assignment> {
        self.assignments.iter().filter(|a| a.room_id == room_id).collect()
    }

    /// All assignments for a given cohort.
    pub fn assignments_for_cohort<'a>(&'a self, cohort_id: &str) -> Vec<&'a Assignment> {
        self.assignments.iter().filter(|a| a.cohort_id == cohort_id).collect()
    }

    /// Whether the schedule is feasible: no instructor/cohort/room is
    /// double-booked in the same time slot.
    pub fn is_feasible(&self) -> bool {
        let mut instructor_slots = HashSet::new();
        let mut cohort_slots = HashSet::new();
        let mut room_slots = HashSet::new();

        for a in &self.assignments {
            if !instructor_slots.insert((a.instructor_id.as_str(), a.time_slot))
                || !cohort_slots.insert((a.cohort_id.as_str(), a.time_slot))
                || !room_slots.insert((a.room_id.as_str(), a.time_slot))
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: u32, hour: u32) -> TimeSlot {
        TimeSlot::new(day, hour)
    }

    #[test]
    fn test_empty_schedule_is_feasible() {
        let s = Schedule::new();
        assert!(s.is_feasible());
        assert!(s.is_empty());
    }

    #[test]
    fn test_feasible_schedule() {
        let s = Schedule::from_assignments(vec![
            Assignment::new("C1", "Math", "T1", "R1", slot(0, 1)),
            Assignment::new("C1", "Math", "T1", "R1", slot(0, 2)),
        ]);
        assert!(s.is_feasible());
    }

    #[test]
    fn test_infeasible_double_booked_instructor() {
        let s = Schedule::from_assignments(vec![
            Assignment::new("C1", "Math", "T1", "R1", slot(0, 1)),
            Assignment::new("C2", "Physics", "T1", "R2", slot(0, 1)),
        ]);
        assert!(!s.is_feasible());
    }

    #[test]
    fn test_queries() {
        let s = Schedule::from_assignments(vec![
            Assignment::new("C1", "Math", "T1", "R1", slot(0, 1)),
            Assignment::new("C2", "Physics", "T2", "R1", slot(0, 2)),
        ]);
        assert_eq!(s.assignments_for_room("R1").len(), 2);
        assert_eq!(s.assignments_for_instructor("T1").len(), 1);
        assert_eq!(s.assignments_for_cohort("C2").len(), 1);
    }
}
