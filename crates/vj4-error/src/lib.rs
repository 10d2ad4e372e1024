//! Error taxonomy of the judge
//!
//! Every failure a request can end with is either a [`UserFacingError`]
//! (status, template name and a message rendered from positional arguments)
//! or an [`InternalError`] that the boundary turns into a generic 500.
//!
//! ```
//! use vj4_error::{ErrorKind, UserFacingError};
//!
//! let err = UserFacingError::document_not_found("system", "problem", "P1000");
//! assert_eq!(err.message(), "Document P1000 not found.");
//! assert_eq!(err.http_status(), 404);
//! assert!(err.is_a(ErrorKind::NotFound));
//! ```

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod internal;
mod kind;
pub mod template;
mod user_facing;

pub use error::{Error, Result};
pub use internal::InternalError;
pub use kind::{Arity, ErrorKind, GENERIC_MESSAGE};
pub use user_facing::{ArgumentError, ErrorDict, UserFacingError};
pub use vj4_core::{DEFAULT_TEMPLATE, ErrorArg, HttpError};
