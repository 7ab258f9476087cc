use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    NotFound {
        message: String,
    },
    // Every copy of the title is lent out. The caller can retry once a copy has been returned.
    NoCopiesAvailable {
        message: String,
    },
    NoneCheckedOut {
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

    pub fn no_copies_available(message: &str) -> LibraryError {
        LibraryError::NoCopiesAvailable { message: message.to_string() }
    }

    pub fn none_checked_out(message: &str) -> LibraryError {
        LibraryError::NoneCheckedOut { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::NotFound { .. } => { false }
            LibraryError::NoCopiesAvailable { .. } => { true }
            LibraryError::NoneCheckedOut { .. } => { false }
            LibraryError::Serialization { .. } => { false }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            LibraryError::NotFound { message } => { message }
            LibraryError::NoCopiesAvailable { message } => { message }
            LibraryError::NoneCheckedOut { message } => { message }
            LibraryError::Serialization { message } => { message }
        }
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
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for catalog operations.
pub type LibraryResult<T> = Result<T, LibraryError>;
