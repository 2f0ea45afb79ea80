use serde::{Deserialize, Serialize};

/// Student - a person who registers for courses
///
/// Identified by an opaque `student_id` chosen by the front-end. The email
/// is unique across all students.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier for this Student
    pub student_id: String,

    /// Display name (required)
    pub name: String,

    /// Age in years, if known
    pub age: Option<i64>,

    /// Contact email (required, unique among students)
    pub email: String,
}

impl Student {
    /// Create a new Student with no recorded age
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            age: None,
            email: email.into(),
        }
    }

    /// Set the age
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student() {
        let student = Student::new("S1", "Ada", "ada@x.com").with_age(20);

        assert_eq!(student.student_id, "S1");
        assert_eq!(student.name, "Ada");
        assert_eq!(student.age, Some(20));
        assert_eq!(student.email, "ada@x.com");
    }

    #[test]
    fn test_json_shape() {
        let student = Student::new("S1", "Ada", "ada@x.com");
        let json = serde_json::to_value(&student).unwrap();

        assert_eq!(json["student_id"], "S1");
        assert!(json["age"].is_null());

        let back: Student = serde_json::from_value(json).unwrap();
        assert_eq!(back, student);
    }
}
