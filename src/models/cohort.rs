//! Cohort (batch) model.

use serde::{Deserialize, Serialize};

/// A group of students sharing a weekly schedule, identified by
/// `(department, level, semester)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    /// Department name.
    pub department: String,
    /// Level (e.g. year or grade).
    pub level: String,
    /// Semester label.
    pub semester: String,
    /// Number of students in the cohort (`>= 1`).
    pub student_count: u32,
    /// Names of subjects this cohort requires this week.
    pub subjects: Vec<String>,
}

impl Cohort {
    /// Creates a new cohort.
    pub fn new(
        department: impl Into<String>,
        level: impl Into<String>,
        semester: impl Into<String>,
        student_count: u32,
    ) -> Self {
        Self {
            department: department.into(),
            level: level.into(),
            semester: semester.into(),
            student_count,
            subjects: Vec::new(),
        }
    }

    /// Adds a required subject.
    pub fn with_subject(mut self, subject_name: impl Into<String>) -> Self {
        self.subjects.push(subject_name.into());
        self
    }

    /// Sets the required subjects list.
    pub fn with_subjects(mut self, subjects: Vec<String>) -> Self {
        self.subjects = subjects;
        self
    }

    /// Stable identity string: `department-level-semester`.
    pub fn id(&self) -> String {
        format!("{}-{}-{}", self.department, self.level, self.semester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cohort_id() {
        let c = Cohort::new("CS", "UG", "1", 30);
        assert_eq!(c.id(), "CS-UG-1");
    }

    #[test]
    fn test_cohort_builder() {
        let c = Cohort::new("CS", "UG", "1", 30)
            .with_subject("Math")
            .with_subject("Programming");
        assert_eq!(c.subjects, vec!["Math".to_string(), "Programming".to_string()]);
    }
}
