use serde::{Deserialize, Serialize};

/// Instructor - a person who may be assigned to teach courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    pub instructor_id: String,
    pub name: String,
    pub age: Option<i64>,
    /// Contact email (required, unique among instructors)
    pub email: String,
}

impl Instructor {
    /// Create a new Instructor with no recorded age
    pub fn new(
        instructor_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            instructor_id: instructor_id.into(),
            name: name.into(),
            age: None,
            email: email.into(),
        }
    }

    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }
}
