// Property: after any sequence of creates and updates drawn from a small
// email pool, no two students and no two instructors share an email, and
// every rejected write was a constraint violation.

use proptest::prelude::*;
use school_core::errors::ErrorKind;
use school_core::model::{Instructor, Student};
use school_store::db::open_store_in_memory;
use school_store::SqliteRepo;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    CreateStudent { id: u8, email: u8 },
    UpdateStudent { id: u8, email: u8 },
    CreateInstructor { id: u8, email: u8 },
    UpdateInstructor { id: u8, email: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    (0u8..4, 0u8..5, 0u8..4).prop_map(|(kind, id, email)| match kind {
        0 => Op::CreateStudent { id, email },
        1 => Op::UpdateStudent { id, email },
        2 => Op::CreateInstructor { id, email },
        _ => Op::UpdateInstructor { id, email },
    })
}

fn email(n: u8) -> String {
    format!("person{}@school.edu", n)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_emails_stay_unique(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let conn = open_store_in_memory().unwrap();

        for op in ops {
            let result = match op {
                Op::CreateStudent { id, email: e } => SqliteRepo::insert_student(
                    &conn,
                    &Student::new(format!("S{}", id), "Student", email(e)),
                ),
                Op::UpdateStudent { id, email: e } => SqliteRepo::update_student(
                    &conn,
                    &Student::new(format!("S{}", id), "Student", email(e)),
                ),
                Op::CreateInstructor { id, email: e } => SqliteRepo::insert_instructor(
                    &conn,
                    &Instructor::new(format!("I{}", id), "Instructor", email(e)),
                ),
                Op::UpdateInstructor { id, email: e } => SqliteRepo::update_instructor(
                    &conn,
                    &Instructor::new(format!("I{}", id), "Instructor", email(e)),
                ),
            };

            if let Err(err) = result {
                prop_assert!(
                    matches!(err.kind(), ErrorKind::ConstraintViolation | ErrorKind::NotFound),
                    "unexpected error kind {:?}",
                    err.kind()
                );
            }
        }

        let students = SqliteRepo::list_students(&conn).unwrap();
        let student_emails: HashSet<_> = students.iter().map(|s| s.email.clone()).collect();
        prop_assert_eq!(student_emails.len(), students.len());

        let instructors = SqliteRepo::list_instructors(&conn).unwrap();
        let instructor_emails: HashSet<_> = instructors.iter().map(|i| i.email.clone()).collect();
        prop_assert_eq!(instructor_emails.len(), instructors.len());
    }
}
