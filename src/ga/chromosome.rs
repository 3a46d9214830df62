//! Chromosome Constructor: greedy randomised builder producing a feasible
//! [`Schedule`] for a [`ProblemInstance`] under a given random generator.
//!
//! # Reference
//! Grounded on `services/ga_engine.py`'s `_create_chromosome`: sessions are
//! ordered tightest-constraint-first (labs, then high-credit subjects), and
//! each session greedily claims the first free (slot, room) pair from a
//! preference-ordered scan, with ties among equally-preferred candidates
//! broken uniformly at random.

use std::collections::HashSet;

use rand::Rng;

use crate::models::{Assignment, ProblemInstance, Room, Schedule, TimeSlot};

/// Builds one candidate [`Schedule`] by greedy randomised placement.
///
/// Sessions that cannot find a free, eligible (slot, room, instructor,
/// cohort) combination are dropped; this is expected and does not error.
pub fn create_chromosome(problem: &ProblemInstance, rng: &mut impl Rng) -> Schedule {
    let order = session_order(problem, rng);

    let mut instructor_used: HashSet<(String, TimeSlot)> = HashSet::new();
    let mut cohort_used: HashSet<(String, TimeSlot)> = HashSet::new();
    let mut room_used: HashSet<(String, TimeSlot)> = HashSet::new();

    let mut schedule = Schedule::new();

    for idx in order {
        let session = &problem.sessions[idx];
        let Some(instructor_id) = problem.instructor_for(&session.cohort_id, &session.subject_name) else {
            continue;
        };
        let instructor_id = instructor_id.to_string();

        let is_lab = session.is_lab();
        let eligible_rooms = problem.rooms.eligible(is_lab, session.student_count);
        let preferred_slots = preferred_slot_order(&problem.time_slots, is_lab);

        let candidates = collect_candidates(
            &preferred_slots,
            &eligible_rooms,
            &instructor_id,
            &session.cohort_id,
            &instructor_used,
            &cohort_used,
            &room_used,
        );

        if candidates.is_empty() {
            schedule.dropped_sessions += 1;
            continue;
        }

        let (slot, room_id) = candidates[rng.random_range(0..candidates.len())].clone();

        instructor_used.insert((instructor_id.clone(), slot));
        cohort_used.insert((session.cohort_id.clone(), slot));
        room_used.insert((room_id.clone(), slot));

        schedule.push(Assignment::new(
            session.cohort_id.clone(),
            session.subject_name.clone(),
            instructor_id,
            room_id,
            slot,
        ));
    }

    schedule
}

/// Session placement order: labs first, then higher-credit sessions first,
/// with a per-call random tiebreaker so repeated construction explores
/// different orderings under the same generator stream.
fn session_order(problem: &ProblemInstance, rng: &mut impl Rng) -> Vec<usize> {
    let mut keyed: Vec<(bool, i64, u64, usize)> = problem
        .sessions
        .iter()
        .enumerate()
        .map(|(i, s)| (!s.is_lab(), -(s.credits as i64), rng.random::<u64>(), i))
        .collect();
    keyed.sort();
    keyed.into_iter().map(|(_, _, _, i)| i).collect()
}

/// Preferred-slot iteration order: labs prefer `hour >= 3` first, non-labs
/// prefer `hour <= 3` first. Grid order is preserved within each group.
fn preferred_slot_order(slots: &[TimeSlot], is_lab: bool) -> Vec<TimeSlot> {
    let mut preferred = Vec::new();
    let mut rest = Vec::new();
    for &slot in slots {
        let prefers = if is_lab { slot.hour >= 3 } else { slot.hour <= 3 };
        if prefers {
            preferred.push(slot);
        } else {
            rest.push(slot);
        }
    }
    preferred.extend(rest);
    preferred
}

#[allow(clippy::too_many_arguments)]
fn collect_candidates(
    preferred_slots: &[TimeSlot],
    eligible_rooms: &[&Room],
    instructor_id: &str,
    cohort_id: &str,
    instructor_used: &HashSet<(String, TimeSlot)>,
    cohort_used: &HashSet<(String, TimeSlot)>,
    room_used: &HashSet<(String, TimeSlot)>,
) -> Vec<(TimeSlot, String)> {
    let mut candidates = Vec::new();
    for &slot in preferred_slots {
        if instructor_used.contains(&(instructor_id.to_string(), slot))
            || cohort_used.contains(&(cohort_id.to_string(), slot))
        {
            continue;
        }
        for room in eligible_rooms {
            if !room_used.contains(&(room.id.clone(), slot)) {
                candidates.push((slot, room.id.clone()));
                break;
            }
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{build_problem, BuildInputs};
    use crate::config::Config;
    use crate::models::{Cohort, Instructor, Room, RoomType, Subject, SubjectType, TimeGrid};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn scenario_a() -> (ProblemInstance, Config) {
        let inputs = BuildInputs {
            cohorts: vec![Cohort::new("CS", "UG", "1", 30).with_subject("Math")],
            subjects: vec![Subject::new("Math", 3, SubjectType::Theory)],
            instructors: vec![Instructor::new("T1", "Teacher One").with_subject("Math")],
            rooms: vec![Room::new("R1", "Room 1", 30, RoomType::LectureHall)],
        };
        let config = Config::default()
            .with_grid(TimeGrid::new(vec!["Mon".into(), "Tue".into()], 2))
            .with_max_consecutive(4);
        let problem = build_problem(inputs, &config).unwrap();
        (problem, config)
    }

    #[test]
    fn test_scenario_a_minimal_feasible() {
        let (problem, _config) = scenario_a();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let schedule = create_chromosome(&problem, &mut rng);

        assert_eq!(schedule.len(), 2);
        assert!(schedule.is_feasible());
        for a in &schedule.assignments {
            assert_eq!(a.instructor_id, "T1");
            assert_eq!(a.room_id, "R1");
        }
    }

    #[test]
    fn test_scenario_b_lab_routing() {
        let inputs = BuildInputs {
            cohorts: vec![Cohort::new("CS", "UG", "1", 35)
                .with_subject("Prog")
                .with_subject("ProgLab")],
            subjects: vec![
                Subject::new("Prog", 3, SubjectType::Theory),
                Subject::new("ProgLab", 2, SubjectType::Lab),
            ],
            instructors: vec![Instructor::new("T1", "Teacher One")
                .with_subject("Prog")
                .with_subject("ProgLab")
                .with_max_hours(40)],
            rooms: vec![
                Room::new("R1", "Lab 1", 40, RoomType::Laboratory),
                Room::new("R2", "Hall 1", 40, RoomType::LectureHall),
            ],
        };
        let config = Config::default();
        let problem = build_problem(inputs, &config).unwrap();

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let schedule = create_chromosome(&problem, &mut rng);

        assert!(schedule.is_feasible());
        for a in &schedule.assignments {
            if a.subject_name == "ProgLab" {
                assert_eq!(a.room_id, "R1");
            } else {
                assert_eq!(a.room_id, "R2");
            }
        }
    }

    #[test]
    fn test_unplaceable_session_is_dropped() {
        // Grid with only one slot and two sessions requiring the same
        // instructor/cohort: only one can be placed.
        let inputs = BuildInputs {
            cohorts: vec![Cohort::new("CS", "UG", "1", 10).with_subject("Math")],
            subjects: vec![Subject::new("Math", 3, SubjectType::Theory)],
            instructors: vec![Instructor::new("T1", "Teacher One").with_subject("Math")],
            rooms: vec![Room::new("R1", "Room 1", 10, RoomType::LectureHall)],
        };
        let config = Config::default().with_grid(TimeGrid::new(vec!["Mon".into()], 1));
        let problem = build_problem(inputs, &config).unwrap();
        assert_eq!(problem.sessions.len(), 2);

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let schedule = create_chromosome(&problem, &mut rng);

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.dropped_sessions, 1);
        assert!(schedule.is_feasible());
    }

    #[test]
    fn test_preferred_slot_order_labs_vs_nonlabs() {
        let grid = TimeGrid::new(vec!["Mon".into()], 4);
        let slots = grid.all_slots();

        let lab_order = preferred_slot_order(&slots, true);
        assert_eq!(lab_order[0].hour, 3);
        assert_eq!(lab_order[1].hour, 4);

        let nonlab_order = preferred_slot_order(&slots, false);
        assert_eq!(nonlab_order[0].hour, 1);
        assert_eq!(nonlab_order[1].hour, 2);
    }
}
