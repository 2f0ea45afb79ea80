pub mod course;
pub mod instructor;
pub mod registration;
pub mod student;

pub use course::Course;
pub use instructor::Instructor;
pub use registration::{Registration, RegistrationView};
pub use student::Student;
