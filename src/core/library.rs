use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    // A book or member lookup missed.
    NotFound {
        message: String,
    },
    // A member id is already taken in the roster.
    DuplicateKey {
        message: String,
    },
    // An argument fell outside the declared policy range, e.g. a quantity
    // above the copy cap or a rating above the scale.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    // The operation would break a lending invariant: lending with no
    // available copies, removing a book or member with active loans, or
    // returning a copy that was never borrowed.
    InvalidState {
        message: String,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn invalid_state(message: &str) -> LibraryError {
        LibraryError::InvalidState { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::InvalidState { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for lending operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_create_not_found_error() {
        assert!(matches!(LibraryError::not_found("test"), LibraryError::NotFound { message: _ }));
    }

    #[test]
    fn test_should_create_duplicate_key_error() {
        assert!(matches!(LibraryError::duplicate_key("test"), LibraryError::DuplicateKey { message: _ }));
    }

    #[test]
    fn test_should_create_validation_error() {
        assert!(matches!(LibraryError::validation("test", None), LibraryError::Validation { message: _, reason_code: _ }));
    }

    #[test]
    fn test_should_create_invalid_state_error() {
        assert!(matches!(LibraryError::invalid_state("test"), LibraryError::InvalidState { message: _ }));
    }

    #[test]
    fn test_should_create_serialization_error() {
        assert!(matches!(LibraryError::serialization("test"), LibraryError::Serialization { message: _ }));
    }

    #[test]
    fn test_should_format_error_messages() {
        assert_eq!("Book not found: 1984", LibraryError::not_found("Book not found: 1984").to_string());
        assert_eq!("ID already taken: m1", LibraryError::duplicate_key("ID already taken: m1").to_string());
        assert_eq!("No available copies of the book: 1984",
                   LibraryError::invalid_state("No available copies of the book: 1984").to_string());
    }

    #[test]
    fn test_should_convert_serde_error() {
        let err = serde_json::from_str::<Vec<String>>("not-json").unwrap_err();
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization { message: _ }));
    }
}
