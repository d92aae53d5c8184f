//! Error types for the course registry.

use thiserror::Error;

/// A field value rejected by entity validation.
///
/// The `Display` text is what the user sees; the rejected field keeps its
/// previous value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("First name must use only letters.")]
    InvalidFirstName,

    #[error("Last name must use only letters.")]
    InvalidLastName,

    #[error("Course name must not exceed {max} characters (got {len}).")]
    CourseNameTooLong { len: usize, max: usize },
}

/// Fatal problems reading the enrollment file.
///
/// Record indices are 1-based.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read the enrollment file")]
    Io(#[source] std::io::Error),

    #[error("the enrollment file is not valid JSON")]
    Parse(#[source] serde_json::Error),

    #[error("the enrollment file must contain a JSON array of records")]
    NotAnArray,

    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("missing dictionary key \"{key}\" in record {index}")]
    MissingKey { index: usize, key: &'static str },

    #[error("key \"{key}\" in record {index} must be a string")]
    InvalidValue { index: usize, key: &'static str },
}

/// Recoverable problems writing the enrollment file.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("could not write the registration data")]
    Io(#[from] std::io::Error),

    #[error("could not encode the registration data")]
    Serialize(#[from] serde_json::Error),

    #[error("could not replace the enrollment file")]
    Persist(#[from] tempfile::PersistError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn missing_key_names_record_and_key() {
        let err = LoadError::MissingKey {
            index: 2,
            key: "CourseName",
        };
        assert_eq!(
            err.to_string(),
            "missing dictionary key \"CourseName\" in record 2"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn io_errors_keep_technical_detail() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = SaveError::from(io);
        assert_eq!(err.to_string(), "could not write the registration data");
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("read-only"));
    }

    #[test]
    fn course_name_error_reports_length() {
        let err = ValidationError::CourseNameTooLong { len: 26, max: 25 };
        assert_eq!(
            err.to_string(),
            "Course name must not exceed 25 characters (got 26)."
        );
    }
}
