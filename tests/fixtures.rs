//! Fixture-construction integration test: builds a [`BuildInputs`] from a
//! JSON record set (the shape a caller would load from a file or HTTP body)
//! and runs it through the full build -> construct -> fitness path.

use timetable_ga_core::config::Config;
use timetable_ga_core::models::TimeGrid;
use timetable_ga_core::{build_problem, BuildInputs};

const SCENARIO_A_JSON: &str = r#"
{
  "cohorts": [
    { "department": "CS", "level": "UG", "semester": "1", "student_count": 30, "subjects": ["Math", "ProgLab"] }
  ],
  "subjects": [
    { "name": "Math", "code": null, "credits": 3, "subject_type": "Theory" },
    { "name": "ProgLab", "code": "CS101L", "credits": 2, "subject_type": "Lab" }
  ],
  "instructors": [
    { "id": "T1", "full_name": "Ada Lovelace", "subjects": ["Math", "ProgLab"], "max_hours_per_week": 20, "available": true }
  ],
  "rooms": [
    { "id": "R1", "name": "Lecture Hall", "capacity": 40, "room_type": "LectureHall" },
    { "id": "R2", "name": "Lab 1", "capacity": 40, "room_type": "Laboratory" }
  ]
}
"#;

#[test]
fn test_build_problem_from_json_fixture() {
    let inputs: BuildInputs = serde_json::from_str(SCENARIO_A_JSON).expect("fixture JSON should deserialize");
    assert_eq!(inputs.cohorts.len(), 1);
    assert_eq!(inputs.rooms.len(), 2);

    let config = Config::default().with_grid(TimeGrid::new(vec!["Mon".into(), "Tue".into(), "Wed".into()], 4));
    let problem = build_problem(inputs, &config).expect("well-formed fixture should build");

    // Math: 2 sessions (credits=3), ProgLab: 4 sessions (lab, credits=2 -> 2*2).
    assert_eq!(problem.sessions.len(), 6);
    assert_eq!(problem.diagnostics.dropped_sessions, 0);
    assert_eq!(problem.instructor_for("CS-UG-1", "Math"), Some("T1"));
}

#[test]
fn test_malformed_fixture_round_trips_into_build_errors() {
    let malformed = SCENARIO_A_JSON.replace(r#""capacity": 40, "room_type": "LectureHall""#, r#""capacity": 0, "room_type": "LectureHall""#);
    let inputs: BuildInputs = serde_json::from_str(&malformed).expect("fixture JSON should deserialize");

    let config = Config::default();
    let errors = build_problem(inputs, &config).unwrap_err();
    assert!(errors.iter().any(|e| e.to_string().contains("non-positive capacity")));
}
