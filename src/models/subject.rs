//! Subject model.

use serde::{Deserialize, Serialize};

/// A teachable subject. `credits` and `subject_type` determine the required
/// weekly session count (see [`Subject::weekly_session_count`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name, used as the join key from cohorts and instructors.
    pub name: String,
    /// Optional short code.
    pub code: Option<String>,
    /// Credit weight (`>= 1`).
    pub credits: u32,
    /// Subject classification.
    pub subject_type: SubjectType,
}

/// Subject classification, driving room eligibility and session counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectType {
    /// Lecture-style theory subject.
    Theory,
    /// Requires a laboratory room.
    Lab,
    /// Hands-on practical subject (non-lab room).
    Practical,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(name: impl Into<String>, credits: u32, subject_type: SubjectType) -> Self {
        Self {
            name: name.into(),
            code: None,
            credits,
            subject_type,
        }
    }

    /// Sets the short code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Required weekly session count per §4.1 of the scheduling spec:
    ///
    /// | Subject type | Session count |
    /// |---|---|
    /// | Lab | `min(2*credits, 4)` |
    /// | Theory/Practical, credits >= 4 | 3 |
    /// | credits == 3 | 2 |
    /// | otherwise | 1 |
    pub fn weekly_session_count(&self) -> u32 {
        match self.subject_type {
            SubjectType::Lab => (2 * self.credits).min(4),
            _ if self.credits >= 4 => 3,
            _ if self.credits == 3 => 2,
            _ => 1,
        }
    }

    /// Whether this subject requires a laboratory room.
    pub fn is_lab(&self) -> bool {
        matches!(self.subject_type, SubjectType::Lab)
    }
}
