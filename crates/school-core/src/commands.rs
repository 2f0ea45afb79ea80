//! Command inventory issued by front-ends
//!
//! Every read and write a front-end can perform against the records store is
//! one variant here. The engine crate dispatches them against a connection.

use crate::model::{Course, Instructor, Student};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // ----- Students -----
    StudentCreate { student: Student },
    /// Replace name, age and email of an existing student
    StudentUpdate { student: Student },
    /// Delete a student; their registrations go with them
    StudentDelete { student_id: String },
    StudentGet { student_id: String },
    StudentList,
    /// Courses a student is registered in
    StudentCourses { student_id: String },

    // ----- Instructors -----
    InstructorCreate { instructor: Instructor },
    InstructorUpdate { instructor: Instructor },
    /// Delete an instructor; their courses become unassigned
    InstructorDelete { instructor_id: String },
    InstructorGet { instructor_id: String },
    InstructorList,
    /// Courses assigned to an instructor
    InstructorCourses { instructor_id: String },

    // ----- Courses -----
    CourseCreate { course: Course },
    /// Replace course_name and instructor of an existing course
    CourseUpdate { course: Course },
    /// Delete a course; its registrations go with it
    CourseDelete { course_id: String },
    CourseGet { course_id: String },
    CourseList,
    /// Students registered in a course
    CourseStudents { course_id: String },

    // ----- Registrations -----
    RegistrationCreate {
        student_id: String,
        course_id: String,
    },
    RegistrationUpdate {
        registration_id: i64,
        student_id: String,
        course_id: String,
    },
    RegistrationDelete { registration_id: i64 },
    /// Remove the registration of a student in a course, if any
    RegistrationRemove {
        student_id: String,
        course_id: String,
    },
    RegistrationList,
    /// Registrations joined with names, ordered by student then course name
    RegistrationListForDisplay,
}

impl Command {
    /// Stable operation name used in log events and error context
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::StudentCreate { .. } => "student_create",
            Command::StudentUpdate { .. } => "student_update",
            Command::StudentDelete { .. } => "student_delete",
            Command::StudentGet { .. } => "student_get",
            Command::StudentList => "student_list",
            Command::StudentCourses { .. } => "student_courses",
            Command::InstructorCreate { .. } => "instructor_create",
            Command::InstructorUpdate { .. } => "instructor_update",
            Command::InstructorDelete { .. } => "instructor_delete",
            Command::InstructorGet { .. } => "instructor_get",
            Command::InstructorList => "instructor_list",
            Command::InstructorCourses { .. } => "instructor_courses",
            Command::CourseCreate { .. } => "course_create",
            Command::CourseUpdate { .. } => "course_update",
            Command::CourseDelete { .. } => "course_delete",
            Command::CourseGet { .. } => "course_get",
            Command::CourseList => "course_list",
            Command::CourseStudents { .. } => "course_students",
            Command::RegistrationCreate { .. } => "registration_create",
            Command::RegistrationUpdate { .. } => "registration_update",
            Command::RegistrationDelete { .. } => "registration_delete",
            Command::RegistrationRemove { .. } => "registration_remove",
            Command::RegistrationList => "registration_list",
            Command::RegistrationListForDisplay => "registration_list_for_display",
        }
    }
}
