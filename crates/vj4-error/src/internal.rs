use http::StatusCode;
use strum::IntoStaticStr;
use vj4_core::HttpError;

use crate::{ArgumentError, GENERIC_MESSAGE};

/// Errors that are never shown to end users as-is
///
/// They surface as a generic 500 at the HTTP boundary and are logged with
/// their full message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, IntoStaticStr)]
pub enum InternalError {
    /// Password hashing or verification failed
    #[error("hash error: {0}")]
    #[strum(serialize = "HashError")]
    Hash(String),

    /// An entity was found in a state the operation cannot handle
    #[error("invalid state: {0}")]
    #[strum(serialize = "InvalidStateError")]
    InvalidState(String),

    #[error(
        "Failed to acquire the upgrade lock. There may be another ongoing upgrade process, or a previous process is exited unexpectedly."
    )]
    #[strum(serialize = "UpgradeLockAcquireError")]
    UpgradeLockAcquire,

    #[error("Failed to release the upgrade lock. The database is malformed during the upgrade.")]
    #[strum(serialize = "UpgradeLockReleaseError")]
    UpgradeLockRelease,

    #[error("Database version mismatch, got {got}, expect {expect}. You need to invoke database upgrades.")]
    #[strum(serialize = "DatabaseVersionMismatchError")]
    DatabaseVersionMismatch {
        /// Version stored in the database
        got: i64,
        /// Version this build expects
        expect: i64,
    },

    /// A user-facing error was raised with arguments its kind cannot use
    #[error("malformed error arguments: {0}")]
    #[strum(serialize = "ArgumentError")]
    Argument(#[from] ArgumentError),
}

impl InternalError {
    /// Class name, e.g. `UpgradeLockAcquireError`
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

impl HttpError for InternalError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        self.name()
    }

    fn client_message(&self) -> String {
        GENERIC_MESSAGE.to_owned()
    }
}
