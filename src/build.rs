//! Input Model Builder.
//!
//! Converts raw resource records into an immutable [`ProblemInstance`]:
//! the indexed set of time slots, room sets partitioned by type, the
//! instructor-per-(cohort, subject) pre-selection, and the multiset of
//! class sessions to place.
//!
//! # Reference
//! Grounded on the original `_calculate_hours_per_week` / `prepare_data`
//! pair in `services/ga_engine.py` of the source this spec was distilled
//! from: instructor pre-selection collapses the search space (instructor
//! becomes a function of `(cohort, subject)`) and balances workload before
//! any scheduling decision is made.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::error::CoreError;
use crate::models::{
    BuildDiagnostics, ClassSession, Cohort, Instructor, ProblemInstance, Room, RoomPool,
    RoomType, Subject,
};

/// Raw record sets consumed by [`build_problem`]. Plain enough to round-trip
/// through `serde_json` for fixture loading (see `tests/fixtures.rs`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildInputs {
    /// Cohorts (batches) to schedule.
    pub cohorts: Vec<Cohort>,
    /// Subject catalogue.
    pub subjects: Vec<Subject>,
    /// Instructor roster.
    pub instructors: Vec<Instructor>,
    /// Room inventory.
    pub rooms: Vec<Room>,
}

/// Builds an immutable [`ProblemInstance`] from raw inputs.
///
/// Per-record constraint violations (non-positive capacity/student count,
/// duplicate ids) abort the whole build and are returned as a batch of
/// [`CoreError::MalformedInput`]. Sessions that cannot find a qualified
/// instructor are silently dropped and counted in
/// [`crate::models::BuildDiagnostics::dropped_sessions`] rather than
/// aborting the build.
pub fn build_problem(inputs: BuildInputs, config: &Config) -> Result<ProblemInstance, Vec<CoreError>> {
    let errors = validate(&inputs);
    if !errors.is_empty() {
        return Err(errors);
    }

    let rooms = partition_rooms(inputs.rooms);
    let subjects_by_name: HashMap<&str, &Subject> =
        inputs.subjects.iter().map(|s| (s.name.as_str(), s)).collect();

    let subject_instructors = build_subject_instructor_map(&inputs.instructors);
    let mut instructor_workload: HashMap<String, u32> = inputs
        .instructors
        .iter()
        .map(|i| (i.id.clone(), 0u32))
        .collect();

    let mut preselected_instructors: HashMap<(String, String), String> = HashMap::new();
    let mut sessions: Vec<ClassSession> = Vec::new();
    let mut diagnostics = BuildDiagnostics::default();

    for cohort in &inputs.cohorts {
        let cohort_id = cohort.id();
        for subject_name in &cohort.subjects {
            let Some(subject) = subjects_by_name.get(subject_name.as_str()) else {
                continue;
            };
            let hours_per_week = subject.weekly_session_count();

            let qualified = subject_instructors.get(subject_name.as_str());
            let chosen = qualified.and_then(|candidates| {
                candidates
                    .iter()
                    .min_by_key(|id| instructor_workload.get(*id).copied().unwrap_or(0))
                    .cloned()
            });

            let Some(instructor_id) = chosen else {
                debug!(
                    cohort_id = %cohort_id,
                    subject = %subject_name,
                    "no qualified instructor; dropping {} session(s)",
                    hours_per_week
                );
                diagnostics.dropped_sessions += hours_per_week;
                continue;
            };

            *instructor_workload.entry(instructor_id.clone()).or_insert(0) += hours_per_week;
            preselected_instructors.insert((cohort_id.clone(), subject_name.clone()), instructor_id);

            for _ in 0..hours_per_week {
                sessions.push(ClassSession::new(
                    cohort_id.clone(),
                    subject_name.clone(),
                    subject.subject_type,
                    cohort.student_count,
                    subject.credits,
                    hours_per_week,
                ));
            }
        }
    }

    Ok(ProblemInstance {
        grid: config.grid.clone(),
        time_slots: config.grid.all_slots(),
        rooms,
        subject_instructors,
        preselected_instructors,
        sessions,
        instructor_workload,
        diagnostics,
    })
}

fn partition_rooms(rooms: Vec<Room>) -> RoomPool {
    let mut labs = Vec::new();
    let mut other = Vec::new();
    for room in rooms {
        if matches!(room.room_type, RoomType::Laboratory) {
            labs.push(room);
        } else {
            other.push(room);
        }
    }
    RoomPool { labs, other }
}

/// `subject_name -> qualified, available instructor ids`, in instructor
/// roster order (stable tie-break for pre-selection relies on this order).
fn build_subject_instructor_map(instructors: &[Instructor]) -> HashMap<String, Vec<String>> {
    let mut map: HashMap<String, Vec<String>> = HashMap::new();
    for instructor in instructors {
        if !instructor.available {
            continue;
        }
        for subject_name in &instructor.subjects {
            map.entry(subject_name.clone()).or_default().push(instructor.id.clone());
        }
    }
    map
}

fn validate(inputs: &BuildInputs) -> Vec<CoreError> {
    let mut errors = Vec::new();
    let mut seen_rooms = HashSet::new();
    let mut seen_instructors = HashSet::new();
    let mut seen_cohorts = HashSet::new();
    let mut seen_subjects = HashSet::new();

    for r in &inputs.rooms {
        if r.capacity < 1 {
            errors.push(CoreError::MalformedInput(format!(
                "room '{}' has non-positive capacity",
                r.id
            )));
        }
        if !seen_rooms.insert(r.id.as_str()) {
            errors.push(CoreError::MalformedInput(format!("duplicate room id '{}'", r.id)));
        }
    }

    for i in &inputs.instructors {
        if !seen_instructors.insert(i.id.as_str()) {
            errors.push(CoreError::MalformedInput(format!(
                "duplicate instructor id '{}'",
                i.id
            )));
        }
    }

    for s in &inputs.subjects {
        if s.credits < 1 {
            errors.push(CoreError::MalformedInput(format!(
                "subject '{}' has non-positive credits",
                s.name
            )));
        }
        if !seen_subjects.insert(s.name.as_str()) {
            errors.push(CoreError::MalformedInput(format!(
                "duplicate subject name '{}'",
                s.name
            )));
        }
    }

    for c in &inputs.cohorts {
        if c.student_count < 1 {
            errors.push(CoreError::MalformedInput(format!(
                "cohort '{}' has non-positive student count",
                c.id()
            )));
        }
        if !seen_cohorts.insert(c.id()) {
            errors.push(CoreError::MalformedInput(format!("duplicate cohort id '{}'", c.id())));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoomType, SubjectType};

    fn scenario_a() -> (BuildInputs, Config) {
        let inputs = BuildInputs {
            cohorts: vec![Cohort::new("CS", "UG", "1", 30).with_subject("Math")],
            subjects: vec![Subject::new("Math", 3, SubjectType::Theory)],
            instructors: vec![Instructor::new("T1", "Teacher One").with_subject("Math")],
            rooms: vec![Room::new("R1", "Room 1", 30, RoomType::LectureHall)],
        };
        let config = Config::default()
            .with_grid(crate::models::TimeGrid::new(vec!["Mon".into(), "Tue".into()], 2));
        (inputs, config)
    }

    #[test]
    fn test_scenario_a_session_enumeration() {
        let (inputs, config) = scenario_a();
        let problem = build_problem(inputs, &config).unwrap();

        assert_eq!(problem.sessions.len(), 2); // Math credits=3 -> 2 sessions
        assert_eq!(problem.diagnostics.dropped_sessions, 0);
        assert_eq!(problem.instructor_for("CS-UG-1", "Math"), Some("T1"));
        assert_eq!(problem.instructor_workload.get("T1"), Some(&2));
    }

    #[test]
    fn test_no_qualified_instructor_drops_session() {
        let inputs = BuildInputs {
            cohorts: vec![Cohort::new("CS", "UG", "1", 30).with_subject("Math")],
            subjects: vec![Subject::new("Math", 3, SubjectType::Theory)],
            instructors: vec![Instructor::new("T1", "Teacher One").with_subject("Physics")],
            rooms: vec![Room::new("R1", "Room 1", 30, RoomType::LectureHall)],
        };
        let config = Config::default();
        let problem = build_problem(inputs, &config).unwrap();

        assert_eq!(problem.sessions.len(), 0);
        assert_eq!(problem.diagnostics.dropped_sessions, 2);
    }

    #[test]
    fn test_workload_balancing_ties_break_first_seen() {
        let inputs = BuildInputs {
            cohorts: vec![
                Cohort::new("CS", "UG", "1", 30).with_subject("Math"),
                Cohort::new("CS", "UG", "2", 30).with_subject("Math"),
            ],
            subjects: vec![Subject::new("Math", 1, SubjectType::Theory)],
            instructors: vec![
                Instructor::new("T1", "Teacher One").with_subject("Math"),
                Instructor::new("T2", "Teacher Two").with_subject("Math"),
            ],
            rooms: vec![Room::new("R1", "Room 1", 30, RoomType::LectureHall)],
        };
        let config = Config::default();
        let problem = build_problem(inputs, &config).unwrap();

        // Both instructors start at workload 0; T1 wins the tie (first-seen).
        assert_eq!(problem.instructor_for("CS-UG-1", "Math"), Some("T1"));
        // T1 now has workload 1; T2 is least-loaded for the second cohort.
        assert_eq!(problem.instructor_for("CS-UG-2", "Math"), Some("T2"));
    }

    #[test]
    fn test_malformed_input_aborts_build() {
        let inputs = BuildInputs {
            cohorts: vec![],
            subjects: vec![],
            instructors: vec![],
            rooms: vec![Room::new("R1", "Room 1", 0, RoomType::LectureHall)],
        };
        let config = Config::default();
        let errors = build_problem(inputs, &config).unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_duplicate_room_id_aborts_build() {
        let inputs = BuildInputs {
            cohorts: vec![],
            subjects: vec![],
            instructors: vec![],
            rooms: vec![
                Room::new("R1", "Room 1", 10, RoomType::LectureHall),
                Room::new("R1", "Room 1 Dup", 10, RoomType::LectureHall),
            ],
        };
        let config = Config::default();
        let errors = build_problem(inputs, &config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("duplicate room")));
    }

    #[test]
    fn test_zero_cohorts_empty_problem() {
        let inputs = BuildInputs {
            cohorts: vec![],
            subjects: vec![],
            instructors: vec![],
            rooms: vec![],
        };
        let config = Config::default();
        let problem = build_problem(inputs, &config).unwrap();
        assert!(problem.sessions.is_empty());
        assert_eq!(problem.diagnostics.dropped_sessions, 0);
    }

    #[test]
    fn test_reproducible_build() {
        let (inputs1, config) = scenario_a();
        let (inputs2, _) = scenario_a();
        let p1 = build_problem(inputs1, &config).unwrap();
        let p2 = build_problem(inputs2, &config).unwrap();
        assert_eq!(p1.sessions.len(), p2.sessions.len());
        assert_eq!(p1.preselected_instructors, p2.preselected_instructors);
    }
}
