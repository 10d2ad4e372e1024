use http::StatusCode;
use vj4_core::HttpError;

use crate::{ArgumentError, ErrorDict, ErrorKind, InternalError, UserFacingError};

/// Result alias for operations that fail with the taxonomy's base error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Root of the taxonomy
///
/// Handlers return this and let `?` carry it to the HTTP boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Shown to the end user with its own status and message
    #[error(transparent)]
    UserFacing(#[from] UserFacingError),

    /// Logged, shown as a generic 500
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl Error {
    /// The user-facing error, if this is one
    pub const fn as_user_facing(&self) -> Option<&UserFacingError> {
        match self {
            Self::UserFacing(error) => Some(error),
            Self::Internal(_) => None,
        }
    }

    /// Whether this is a user-facing error of `kind` or a subclass of it
    pub fn is_a(&self, kind: ErrorKind) -> bool {
        self.as_user_facing().is_some_and(|error| error.is_a(kind))
    }

    /// Structured form for API consumers
    ///
    /// Internal errors expose only their class name.
    pub fn to_dict(&self) -> ErrorDict {
        match self {
            Self::UserFacing(error) => error.to_dict(),
            Self::Internal(error) => ErrorDict {
                name: error.name().to_owned(),
                args: Vec::new(),
            },
        }
    }
}

impl From<ArgumentError> for Error {
    fn from(error: ArgumentError) -> Self {
        Self::Internal(InternalError::Argument(error))
    }
}

impl HttpError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UserFacing(error) => error.status_code(),
            Self::Internal(error) => error.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::UserFacing(error) => error.error_type(),
            Self::Internal(error) => error.error_type(),
        }
    }

    fn template_name(&self) -> &str {
        match self {
            Self::UserFacing(error) => error.template_name(),
            Self::Internal(error) => error.template_name(),
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::UserFacing(error) => error.client_message(),
            Self::Internal(error) => error.client_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use vj4_core::ErrorArg;

    use super::*;

    fn find_document(id: &str) -> Result<()> {
        Err(UserFacingError::document_not_found("system", "problem", id).into())
    }

    fn raise(kind: ErrorKind, args: Vec<ErrorArg>) -> Result<()> {
        Err(UserFacingError::new(kind, args)?.into())
    }

    #[test]
    fn propagates_with_question_mark() {
        fn handler() -> Result<()> {
            find_document("P1000")?;
            Ok(())
        }

        let err = handler().unwrap_err();
        assert!(err.is_a(ErrorKind::NotFound));
        assert!(err.is_a(ErrorKind::DocumentNotFound));
        assert!(!err.is_a(ErrorKind::Forbidden));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.client_message(), "Document P1000 not found.");
        assert_eq!(err.to_string(), "Document P1000 not found.");
    }

    #[test]
    fn malformed_raise_becomes_internal() {
        let err = raise(ErrorKind::UserNotFound, Vec::new()).unwrap_err();
        assert!(err.as_user_facing().is_none());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "An error has occurred.");
        assert_eq!(err.error_type(), "ArgumentError");
    }

    #[test]
    fn internal_dict_has_no_args() {
        let err = Error::from(InternalError::UpgradeLockAcquire);
        let dict = err.to_dict();
        assert_eq!(dict.name, "UpgradeLockAcquireError");
        assert!(dict.args.is_empty());
        assert_eq!(err.template_name(), "error.html");
    }
}
