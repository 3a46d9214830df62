//! University timetable domain models.
//!
//! Provides the core data types for representing a weekly timetable
//! scheduling problem and its candidate solutions.
//!
//! # Domain overview
//!
//! | Type | Role |
//! |------|------|
//! | [`Cohort`] | A group of students sharing a weekly schedule |
//! | [`Subject`] | A teachable subject; determines weekly session count |
//! | [`Instructor`] | A teacher qualified for a set of subjects |
//! | [`Room`] | A physical room, partitioned by [`RoomType`] |
//! | [`ClassSession`] | One required weekly hour of instruction |
//! | [`Assignment`] | A scheduled session (gene) |
//! | [`Schedule`] | An ordered sequence of assignments (chromosome) |
//! | [`ProblemInstance`] | The immutable, pre-processed problem description |

mod cohort;
mod instructor;
mod problem;
mod room;
mod schedule;
mod session;
mod subject;
mod timeslot;

pub use cohort::Cohort;
pub use instructor::Instructor;
pub use problem::{BuildDiagnostics, ProblemInstance, RoomPool};
pub use room::{Room, RoomType};
pub use schedule::{Assignment, Schedule};
pub use session::ClassSession;
pub use subject::{Subject, SubjectType};
pub use timeslot::{TimeGrid, TimeSlot};
