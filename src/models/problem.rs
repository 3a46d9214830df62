//! The immutable, pre-processed Problem Instance.

use std::collections::HashMap;

use super::{ClassSession, Room, TimeGrid, TimeSlot};

/// Rooms partitioned by eligibility, and the time grid they share.
#[derive(Debug, Clone)]
pub struct RoomPool {
    /// Laboratory rooms.
    pub labs: Vec<Room>,
    /// All non-laboratory rooms.
    pub other: Vec<Room>,
}

impl RoomPool {
    /// Eligible rooms for the given lab-ness, filtered to a minimum capacity.
    pub fn eligible(&self, is_lab: bool, min_capacity: u32) -> Vec<&Room> {
        let pool = if is_lab { &self.labs } else { &self.other };
        pool.iter().filter(|r| r.capacity >= min_capacity).collect()
    }
}

/// Diagnostics accumulated while building a [`ProblemInstance`].
#[derive(Debug, Clone, Default)]
pub struct BuildDiagnostics {
    /// Number of (cohort, subject) sessions dropped for lack of a qualified
    /// instructor at build time.
    pub dropped_sessions: u32,
}

/// The immutable, pre-processed description of a scheduling problem: the
/// time grid, the partitioned room pool, the pre-selected
/// `(cohort, subject) -> instructor` mapping, and the sessions to place.
///
/// Constructed once per optimisation run and shared read-only across all
/// chromosomes and worker threads.
#[derive(Debug, Clone)]
pub struct ProblemInstance {
    /// The weekly time grid.
    pub grid: TimeGrid,
    /// All time slots, in grid order.
    pub time_slots: Vec<TimeSlot>,
    /// Rooms partitioned by (lab, other).
    pub rooms: RoomPool,
    /// `subject_name -> qualified instructor ids`.
    pub subject_instructors: HashMap<String, Vec<String>>,
    /// `(cohort_id, subject_name) -> pre-selected instructor id`.
    pub preselected_instructors: HashMap<(String, String), String>,
    /// Class sessions to place. Every session here has a pre-selected
    /// instructor (sessions without one were dropped during the build).
    pub sessions: Vec<ClassSession>,
    /// Provisional instructor workload tally after pre-selection (hours).
    pub instructor_workload: HashMap<String, u32>,
    /// Build-time diagnostics (dropped sessions, etc).
    pub diagnostics: BuildDiagnostics,
}

impl ProblemInstance {
    /// Looks up the pre-selected instructor for a (cohort, subject) pair.
    pub fn instructor_for(&self, cohort_id: &str, subject_name: &str) -> Option<&str> {
        self.preselected_instructors
            .get(&(cohort_id.to_string(), subject_name.to_string()))
            .map(|s| s.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoomType;

    #[test]
    fn test_room_pool_eligibility() {
        let pool = RoomPool {
            labs: vec![Room::new("L1", "Lab 1", 20, RoomType::Laboratory)],
            other: vec![
                Room::new("R1", "Room 1", 30, RoomType::LectureHall),
                Room::new("R2", "Room 2", 10, RoomType::Classroom),
            ],
        };

        assert_eq!(pool.eligible(true, 20).len(), 1);
        assert_eq!(pool.eligible(true, 25).len(), 0);
        assert_eq!(pool.eligible(false, 10).len(), 2);
        assert_eq!(pool.eligible(false, 15).len(), 1);
    }
}
