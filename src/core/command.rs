use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Unavailable {
        message: String,
        retryable: bool,
    },
    Conflict {
        message: String,
    },
    Serialization {
        message: String,
    },
}

pub trait Command<Request, Response> {
    fn execute(&mut self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let retryable = other.retryable();
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::NoCopiesAvailable { message } => {
                CommandError::Unavailable { message, retryable }
            }
            LibraryError::NoneCheckedOut { message } => {
                CommandError::Conflict { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[test]
    fn test_should_map_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::not_found("test")), CommandError::NotFound{ .. }));
        assert_eq!(CommandError::Unavailable { message: "test".to_string(), retryable: true },
                   CommandError::from(LibraryError::no_copies_available("test")));
        assert!(matches!(CommandError::from(LibraryError::none_checked_out("test")), CommandError::Conflict{ .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("test")), CommandError::Serialization{ .. }));
    }
}
