use school_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using SchoolError
pub type Result<T> = std::result::Result<T, SchoolError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error surfaced to a front-end carries exactly one of these kinds.
/// Each kind maps to a stable code that front-ends and tests can match on
/// without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Integrity
    /// Primary-key collision, uniqueness violation, missing required field,
    /// or dangling foreign-key reference
    ConstraintViolation,
    /// The operation targets a row that does not exist
    NotFound,

    // Validation
    /// Field content is malformed (bad email, negative age)
    InvalidInput,

    // Integration/IO
    Io,
    Persistence,

    // Internal
    /// A layer returned something its caller cannot handle
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::Persistence => "ERR_PERSISTENCE",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification (`kind`) plus whatever context the failing
/// layer knew: the operation name, the key of the row involved, and the
/// correlation ids of the request that triggered it.
#[derive(Debug, Clone)]
pub struct RecordsError {
    kind: ErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl RecordsError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the key of the row involved
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when the error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        self.kind == ErrorKind::ConstraintViolation
    }

    /// True when the error reports a missing row
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

impl std::fmt::Display for RecordsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RecordsError {}

// ========== End Error Facility ==========

/// Domain error taxonomy raised before anything reaches the database
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchoolError {
    // ===== Required fields =====
    /// A required text field is empty or whitespace-only
    #[error("{entity} is missing required field '{field}'")]
    MissingField { entity: String, field: String },

    // ===== Field content =====
    /// Email lacks '@' or '.'
    #[error("Email address is not valid: {email}")]
    InvalidEmail { email: String },

    /// Age is negative
    #[error("Age must be a non-negative integer, got {age}")]
    InvalidAge { age: i64 },

    // ===== Lookups =====
    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: String },

    #[error("Instructor not found: {instructor_id}")]
    InstructorNotFound { instructor_id: String },

    #[error("Course not found: {course_id}")]
    CourseNotFound { course_id: String },

    #[error("Registration not found: {registration_id}")]
    RegistrationNotFound { registration_id: i64 },
}

impl From<SchoolError> for RecordsError {
    fn from(err: SchoolError) -> Self {
        let message = err.to_string();
        match err {
            SchoolError::MissingField { entity, .. } => {
                RecordsError::new(ErrorKind::ConstraintViolation)
                    .with_op("validate")
                    .with_entity_id(entity)
                    .with_message(message)
            }

            SchoolError::InvalidEmail { .. } | SchoolError::InvalidAge { .. } => {
                RecordsError::new(ErrorKind::InvalidInput)
                    .with_op("validate")
                    .with_message(message)
            }

            SchoolError::StudentNotFound { student_id } => RecordsError::new(ErrorKind::NotFound)
                .with_entity_id(student_id)
                .with_message(message),

            SchoolError::InstructorNotFound { instructor_id } => {
                RecordsError::new(ErrorKind::NotFound)
                    .with_entity_id(instructor_id)
                    .with_message(message)
            }

            SchoolError::CourseNotFound { course_id } => RecordsError::new(ErrorKind::NotFound)
                .with_entity_id(course_id)
                .with_message(message),

            SchoolError::RegistrationNotFound { registration_id } => {
                RecordsError::new(ErrorKind::NotFound)
                    .with_entity_id(registration_id.to_string())
                    .with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes_are_unique() {
        let kinds = [
            ErrorKind::ConstraintViolation,
            ErrorKind::NotFound,
            ErrorKind::InvalidInput,
            ErrorKind::Io,
            ErrorKind::Persistence,
            ErrorKind::Internal,
        ];
        let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), kinds.len());
    }

    #[test]
    fn test_display_includes_code_op_and_entity() {
        let err = RecordsError::new(ErrorKind::NotFound)
            .with_op("update_student")
            .with_entity_id("S9")
            .with_message("Student not found");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_NOT_FOUND]"));
        assert!(rendered.contains("update_student"));
        assert!(rendered.contains("S9"));
    }
}
