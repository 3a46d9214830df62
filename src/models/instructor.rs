//! Instructor model.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An instructor who may be pre-selected to teach sessions of the subjects
/// they are qualified for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: String,
    /// Full name.
    pub full_name: String,
    /// Names of subjects this instructor is qualified to teach.
    pub subjects: HashSet<String>,
    /// Maximum weekly teaching hours.
    pub max_hours_per_week: u32,
    /// Whether this instructor is currently available for assignment.
    pub available: bool,
}

impl Instructor {
    /// Creates a new available instructor with the default 20-hour weekly cap.
    pub fn new(id: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            subjects: HashSet::new(),
            max_hours_per_week: 20,
            available: true,
        }
    }

    /// Adds a teachable subject.
    pub fn with_subject(mut self, subject_name: impl Into<String>) -> Self {
        self.subjects.insert(subject_name.into());
        self
    }

    /// Sets the maximum weekly teaching hours.
    pub fn with_max_hours(mut self, max_hours_per_week: u32) -> Self {
        self.max_hours_per_week = max_hours_per_week;
        self
    }

    /// Sets availability.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Whether this instructor can teach the given subject.
    pub fn can_teach(&self, subject_name: &str) -> bool {
        self.subjects.contains(subject_name)
    }
}
