//! Shared contracts between the error taxonomy and its collaborators

mod arg;
pub mod builtin;
mod error;

pub use arg::ErrorArg;
pub use builtin::{BuiltinPermissions, Permission, PermissionRegistry};
pub use error::{DEFAULT_TEMPLATE, HttpError};
