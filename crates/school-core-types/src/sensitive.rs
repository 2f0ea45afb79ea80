//! Redaction wrapper for personal data
//!
//! Student and instructor emails are personal data. Anything that reaches a
//! log line goes through `Sensitive<T>` so the value itself never does.

use std::fmt;

/// Wrapper for personal data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use school_core_types::Sensitive;
///
/// let email = Sensitive::new("a@x.com");
/// assert_eq!(format!("{}", email), "***REDACTED***");
/// assert_eq!(email.expose(), &"a@x.com");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_redacted_in_debug_and_display() {
        let email = Sensitive::new("jane@school.edu");
        assert_eq!(format!("{:?}", email), "***REDACTED***");
        assert_eq!(format!("{}", email), "***REDACTED***");
    }

    #[test]
    fn test_expose_and_into_inner() {
        let email = Sensitive::new(String::from("jane@school.edu"));
        assert_eq!(email.expose(), "jane@school.edu");
        assert_eq!(email.clone().into_inner(), "jane@school.edu");
    }

    #[test]
    fn test_redaction_inside_struct_debug() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct Contact {
            name: String,
            email: Sensitive<String>,
        }

        let contact = Contact {
            name: "Jane".to_string(),
            email: Sensitive::new("jane@school.edu".to_string()),
        };

        let debug_str = format!("{:?}", contact);
        assert!(debug_str.contains("Jane"));
        assert!(!debug_str.contains("jane@school.edu"));
    }
}
