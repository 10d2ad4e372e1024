use std::str::FromStr;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use vj4_core::{BuiltinPermissions, ErrorArg, HttpError, PermissionRegistry, builtin};

use crate::kind::{Arity, ErrorKind};
use crate::template;

/// Errors building a user-facing error from a kind and its arguments
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// Argument count outside what the kind's message can use
    #[error("{kind} takes {arity} arguments, got {got}")]
    Arity {
        /// Kind being constructed
        kind: ErrorKind,
        /// Accepted argument counts
        arity: Arity,
        /// Number of arguments supplied
        got: usize,
    },

    /// Structured error names a class outside the catalog
    #[error("unknown error kind: {0}")]
    UnknownKind(String),
}

/// Structured form of a user-facing error for API consumers
///
/// Arguments are signed 64-bit integers or strings. Parsing a dict whose
/// arguments hold floats, booleans, nulls, nested values or integers outside
/// the `i64` range fails in the deserializer, before any [`ArgumentError`]
/// can be produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDict {
    /// Class name, e.g. `UserNotFoundError`
    pub name: String,
    /// Positional arguments, unrendered
    pub args: Vec<ErrorArg>,
}

/// An error meant to be shown to the end user
///
/// Carries its kind and positional arguments. Status, template name and
/// message all derive from those two.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", self.message())]
pub struct UserFacingError {
    kind: ErrorKind,
    args: Vec<ErrorArg>,
    /// Chosen once when a `PermissionError` is built
    permission_template: Option<&'static str>,
}

impl UserFacingError {
    /// Build an error of `kind` with positional `args`
    ///
    /// `PermissionError` resolves its argument against the builtin
    /// permission table.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Arity`] when the argument count does not fit
    /// the kind's message template
    pub fn new(kind: ErrorKind, args: Vec<ErrorArg>) -> Result<Self, ArgumentError> {
        Self::with_registry(kind, args, &BuiltinPermissions)
    }

    /// Like [`UserFacingError::new`], with an explicit permission registry
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Arity`] when the argument count does not fit
    /// the kind's message template
    pub fn with_registry(
        kind: ErrorKind,
        args: Vec<ErrorArg>,
        registry: &dyn PermissionRegistry,
    ) -> Result<Self, ArgumentError> {
        let arity = kind.arity();
        if !arity.accepts(args.len()) {
            return Err(ArgumentError::Arity {
                kind,
                arity,
                got: args.len(),
            });
        }

        if kind == ErrorKind::Permission {
            return Ok(Self::permission_with(registry, args));
        }

        Ok(Self::unchecked(kind, args))
    }

    fn unchecked(kind: ErrorKind, args: Vec<ErrorArg>) -> Self {
        Self {
            kind,
            args,
            permission_template: None,
        }
    }

    fn permission_with(registry: &dyn PermissionRegistry, mut args: Vec<ErrorArg>) -> Self {
        let view = registry.view_permission();

        let template = if args.iter().any(|arg| arg.is_within(view)) {
            template::PERMISSION_VIEW
        } else {
            if let Some(first) = args.first()
                && let Some(permission) = registry.lookup(first)
            {
                args.insert(0, ErrorArg::from(permission.description));
            }
            template::PERMISSION_REQUIRED
        };

        Self {
            kind: ErrorKind::Permission,
            args,
            permission_template: Some(template),
        }
    }

    /// Kind of this error
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Positional arguments, as raised (augmented for `PermissionError`)
    pub fn args(&self) -> &[ErrorArg] {
        &self.args
    }

    /// HTTP status for this error
    pub fn http_status(&self) -> StatusCode {
        self.kind.status()
    }

    /// Message template before argument substitution
    pub fn template(&self) -> &'static str {
        match self.kind {
            ErrorKind::Permission => self.permission_template.unwrap_or(template::PERMISSION_REQUIRED),
            ErrorKind::Privilege => {
                if self.args.iter().any(|arg| arg.is_within(builtin::PRIV_USER_PROFILE)) {
                    template::PRIVILEGE_LOGIN
                } else {
                    template::PRIVILEGE_REQUIRED
                }
            }
            ErrorKind::Validation if self.args.len() == 2 => template::VALIDATION_EITHER,
            kind => kind.template(),
        }
    }

    /// Rendered human-readable message
    pub fn message(&self) -> String {
        template::render(self.template(), &self.args)
    }

    /// Structured form: class name and raw arguments
    pub fn to_dict(&self) -> ErrorDict {
        ErrorDict {
            name: self.kind.name().to_owned(),
            args: self.args.clone(),
        }
    }

    /// Whether this error is of `kind` or one of its subclasses
    pub fn is_a(&self, kind: ErrorKind) -> bool {
        self.kind.is_a(kind)
    }
}

impl TryFrom<ErrorDict> for UserFacingError {
    type Error = ArgumentError;

    fn try_from(dict: ErrorDict) -> Result<Self, Self::Error> {
        let kind = ErrorKind::from_str(&dict.name).map_err(|_| ArgumentError::UnknownKind(dict.name.clone()))?;
        Self::new(kind, dict.args)
    }
}

impl HttpError for UserFacingError {
    fn status_code(&self) -> StatusCode {
        self.http_status()
    }

    fn error_type(&self) -> &str {
        self.kind.name()
    }

    fn client_message(&self) -> String {
        self.message()
    }
}

// Constructors for kinds whose message reads arguments. The argument lists
// match what the kind's template indexes, so they cannot fail.
impl UserFacingError {
    pub fn not_found(path: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::NotFound, vec![path.into()])
    }

    pub fn builtin_domain(domain_id: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::BuiltinDomain, vec![domain_id.into()])
    }

    pub fn validation(field: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::Validation, vec![field.into()])
    }

    /// Validation failure where either of two fields may be at fault
    pub fn validation_either(field: impl Into<ErrorArg>, other: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::Validation, vec![field.into(), other.into()])
    }

    pub fn blacklisted(address: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::Blacklisted, vec![address.into()])
    }

    pub fn unknown_field(field: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::UnknownField, vec![field.into()])
    }

    pub fn user_already_exist(uname: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::UserAlreadyExist, vec![uname.into()])
    }

    pub fn user_not_exist(uname: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::UserNotExist, vec![uname.into()])
    }

    pub fn login(uname: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::Login, vec![uname.into()])
    }

    /// A document of any type is missing; only `doc_id` is shown
    pub fn document_not_found(
        domain_id: impl Into<ErrorArg>,
        doc_type: impl Into<ErrorArg>,
        doc_id: impl Into<ErrorArg>,
    ) -> Self {
        Self::unchecked(
            ErrorKind::DocumentNotFound,
            vec![domain_id.into(), doc_type.into(), doc_id.into()],
        )
    }

    pub fn problem_data_not_found(domain_id: impl Into<ErrorArg>, pid: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::ProblemDataNotFound, vec![domain_id.into(), pid.into()])
    }

    pub fn record_data_not_found(rid: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::RecordDataNotFound, vec![rid.into()])
    }

    /// Missing domain permission, checked against the builtin permission table
    pub fn permission(perm: impl Into<ErrorArg>) -> Self {
        Self::permission_with(&BuiltinPermissions, vec![perm.into()])
    }

    /// Missing system privilege
    pub fn privilege(privilege: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::Privilege, vec![privilege.into()])
    }

    pub fn user_not_found(uid: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::UserNotFound, vec![uid.into()])
    }

    pub fn discussion_category_already_exist(domain_id: impl Into<ErrorArg>, name: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::DiscussionCategoryAlreadyExist, vec![domain_id.into(), name.into()])
    }

    pub fn discussion_category_not_found(domain_id: impl Into<ErrorArg>, name: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::DiscussionCategoryNotFound, vec![domain_id.into(), name.into()])
    }

    pub fn discussion_node_already_exist(domain_id: impl Into<ErrorArg>, name: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::DiscussionNodeAlreadyExist, vec![domain_id.into(), name.into()])
    }

    pub fn discussion_node_not_found(domain_id: impl Into<ErrorArg>, name: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::DiscussionNodeNotFound, vec![domain_id.into(), name.into()])
    }

    pub fn discussion_not_found(domain_id: impl Into<ErrorArg>, did: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::DiscussionNotFound, vec![domain_id.into(), did.into()])
    }

    pub fn message_not_found(mid: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::MessageNotFound, vec![mid.into()])
    }

    pub fn domain_not_found(domain_id: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::DomainNotFound, vec![domain_id.into()])
    }

    pub fn domain_already_exist(domain_id: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::DomainAlreadyExist, vec![domain_id.into()])
    }

    pub fn problem_not_found(domain_id: impl Into<ErrorArg>, pid: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::ProblemNotFound, vec![domain_id.into(), pid.into()])
    }

    pub fn record_not_found(rid: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::RecordNotFound, vec![rid.into()])
    }

    /// Rate limit hit: at most `max_operations` of `operation` per `period_secs`
    pub fn opcount_exceeded(
        operation: impl Into<ErrorArg>,
        period_secs: impl Into<ErrorArg>,
        max_operations: impl Into<ErrorArg>,
    ) -> Self {
        Self::unchecked(
            ErrorKind::OpcountExceeded,
            vec![operation.into(), period_secs.into(), max_operations.into()],
        )
    }

    pub fn domain_role_already_exist(domain_id: impl Into<ErrorArg>, role: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::DomainRoleAlreadyExist, vec![domain_id.into(), role.into()])
    }

    pub fn invalid_argument(name: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::InvalidArgument, vec![name.into()])
    }

    pub fn batch_copy_limit_exceeded(limit: impl Into<ErrorArg>, got: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::BatchCopyLimitExceeded, vec![limit.into(), got.into()])
    }

    pub fn send_mail(address: impl Into<ErrorArg>) -> Self {
        Self::unchecked(ErrorKind::SendMail, vec![address.into()])
    }
}
