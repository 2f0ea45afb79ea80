use serde::{Deserialize, Serialize};

/// Registration - one student enrolled in one course
///
/// `registration_id` is assigned by the store on insert. The
/// `(student_id, course_id)` pair is unique across all registrations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub registration_id: i64,
    pub student_id: String,
    pub course_id: String,
}

/// Registration joined with the student and course names, for listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationView {
    pub registration_id: i64,
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
}
