use school_core::errors::{ErrorKind, RecordsError, SchoolError};
use school_core_types::RequestId;

#[test]
fn test_not_found_verifiable_by_kind() {
    let err = SchoolError::StudentNotFound {
        student_id: "S404".to_string(),
    };

    let rec_err: RecordsError = err.into();

    assert_eq!(rec_err.kind(), ErrorKind::NotFound);
    assert_eq!(rec_err.code(), "ERR_NOT_FOUND");
    assert_eq!(rec_err.entity_id(), Some("S404"));
    assert!(rec_err.is_not_found());
}

#[test]
fn test_missing_field_is_constraint_violation() {
    let err = SchoolError::MissingField {
        entity: "course".to_string(),
        field: "course_name".to_string(),
    };

    let rec_err: RecordsError = err.into();

    assert_eq!(rec_err.kind(), ErrorKind::ConstraintViolation);
    assert_eq!(rec_err.code(), "ERR_CONSTRAINT_VIOLATION");
    assert!(rec_err.message().contains("course_name"));
}

#[test]
fn test_malformed_fields_are_invalid_input() {
    let email: RecordsError = SchoolError::InvalidEmail {
        email: "nope".to_string(),
    }
    .into();
    let age: RecordsError = SchoolError::InvalidAge { age: -3 }.into();

    assert_eq!(email.kind(), ErrorKind::InvalidInput);
    assert_eq!(age.kind(), ErrorKind::InvalidInput);
    assert_eq!(age.op(), Some("validate"));
}

#[test]
fn test_registration_not_found_carries_numeric_id() {
    let rec_err: RecordsError = SchoolError::RegistrationNotFound { registration_id: 7 }.into();
    assert_eq!(rec_err.entity_id(), Some("7"));
}

#[test]
fn test_request_id_context_survives_builder() {
    let request_id = RequestId::new();
    let err = RecordsError::new(ErrorKind::Persistence)
        .with_op("student_create")
        .with_request_id(request_id.clone());

    assert_eq!(err.request_id(), Some(&request_id));
    assert_eq!(err.op(), Some("student_create"));
    assert!(err.trace_id().is_none());
}
