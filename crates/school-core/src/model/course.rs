use serde::{Deserialize, Serialize};

/// Course - something students register for
///
/// A course is taught by at most one instructor. `instructor_id` is `None`
/// for an unassigned course, including one whose instructor was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for this Course
    pub course_id: String,

    /// Human-readable name (required)
    pub course_name: String,

    /// Assigned instructor, if any
    pub instructor_id: Option<String>,
}

impl Course {
    /// Create an unassigned Course
    pub fn new(course_id: impl Into<String>, course_name: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            course_name: course_name.into(),
            instructor_id: None,
        }
    }

    /// Assign an instructor
    pub fn taught_by(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = Some(instructor_id.into());
        self
    }

    pub fn is_assigned(&self) -> bool {
        self.instructor_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_course_is_unassigned() {
        let course = Course::new("C1", "Databases");
        assert!(!course.is_assigned());

        let course = course.taught_by("I1");
        assert_eq!(course.instructor_id.as_deref(), Some("I1"));
    }
}
