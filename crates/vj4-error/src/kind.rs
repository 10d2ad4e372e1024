use std::fmt;

use http::StatusCode;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::template;

/// Message shown for any error without a more specific one
pub const GENERIC_MESSAGE: &str = "An error has occurred.";

/// Every user-facing error class
///
/// Intermediate classes (`BadRequestError`, `ForbiddenError`, `NotFoundError`,
/// `ValidationError`, `DocumentNotFoundError`) can be raised themselves and
/// are the parents that leaf kinds inherit status and message from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, IntoStaticStr)]
pub enum ErrorKind {
    #[strum(serialize = "UserFacingError")]
    UserFacing,
    #[strum(serialize = "BadRequestError")]
    BadRequest,
    #[strum(serialize = "ForbiddenError")]
    Forbidden,
    #[strum(serialize = "NotFoundError")]
    NotFound,
    #[strum(serialize = "BuiltinDomainError")]
    BuiltinDomain,
    #[strum(serialize = "ValidationError")]
    Validation,
    #[strum(serialize = "BlacklistedError")]
    Blacklisted,
    #[strum(serialize = "FileTooLongError")]
    FileTooLong,
    #[strum(serialize = "FileTypeNotAllowedError")]
    FileTypeNotAllowed,
    #[strum(serialize = "UnknownFieldError")]
    UnknownField,
    #[strum(serialize = "InvalidTokenError")]
    InvalidToken,
    /// Mismatch between a password and its confirmation field
    #[strum(serialize = "VerifyPasswordError")]
    VerifyPassword,
    #[strum(serialize = "UserAlreadyExistError")]
    UserAlreadyExist,
    #[strum(serialize = "UserNotExistError")]
    UserNotExist,
    #[strum(serialize = "LoginError")]
    Login,
    #[strum(serialize = "DocumentNotFoundError")]
    DocumentNotFound,
    #[strum(serialize = "ProblemDataNotFoundError")]
    ProblemDataNotFound,
    #[strum(serialize = "RecordDataNotFoundError")]
    RecordDataNotFound,
    #[strum(serialize = "PermissionError")]
    Permission,
    #[strum(serialize = "PrivilegeError")]
    Privilege,
    #[strum(serialize = "CsrfTokenError")]
    CsrfToken,
    #[strum(serialize = "InvalidOperationError")]
    InvalidOperation,
    #[strum(serialize = "AlreadyVotedError")]
    AlreadyVoted,
    #[strum(serialize = "UserNotFoundError")]
    UserNotFound,
    #[strum(serialize = "InvalidTokenDigestError")]
    InvalidTokenDigest,
    #[strum(serialize = "CurrentPasswordError")]
    CurrentPassword,
    #[strum(serialize = "DiscussionCategoryAlreadyExistError")]
    DiscussionCategoryAlreadyExist,
    #[strum(serialize = "DiscussionCategoryNotFoundError")]
    DiscussionCategoryNotFound,
    #[strum(serialize = "DiscussionNodeAlreadyExistError")]
    DiscussionNodeAlreadyExist,
    #[strum(serialize = "DiscussionNodeNotFoundError")]
    DiscussionNodeNotFound,
    #[strum(serialize = "DiscussionNotFoundError")]
    DiscussionNotFound,
    #[strum(serialize = "MessageNotFoundError")]
    MessageNotFound,
    #[strum(serialize = "DomainNotFoundError")]
    DomainNotFound,
    #[strum(serialize = "DomainAlreadyExistError")]
    DomainAlreadyExist,
    #[strum(serialize = "DomainJoinForbiddenError")]
    DomainJoinForbidden,
    #[strum(serialize = "DomainJoinAlreadyMemberError")]
    DomainJoinAlreadyMember,
    #[strum(serialize = "InvalidJoinInvitationCodeError")]
    InvalidJoinInvitationCode,
    #[strum(serialize = "ContestAlreadyAttendedError")]
    ContestAlreadyAttended,
    #[strum(serialize = "ContestNotAttendedError")]
    ContestNotAttended,
    #[strum(serialize = "ContestScoreboardHiddenError")]
    ContestScoreboardHidden,
    #[strum(serialize = "ContestNotLiveError")]
    ContestNotLive,
    #[strum(serialize = "HomeworkScoreboardHiddenError")]
    HomeworkScoreboardHidden,
    #[strum(serialize = "HomeworkNotLiveError")]
    HomeworkNotLive,
    #[strum(serialize = "HomeworkAlreadyAttendedError")]
    HomeworkAlreadyAttended,
    #[strum(serialize = "HomeworkNotAttendedError")]
    HomeworkNotAttended,
    #[strum(serialize = "ProblemNotFoundError")]
    ProblemNotFound,
    #[strum(serialize = "TrainingRequirementNotSatisfiedError")]
    TrainingRequirementNotSatisfied,
    #[strum(serialize = "TrainingAlreadyEnrollError")]
    TrainingAlreadyEnroll,
    #[strum(serialize = "RecordNotFoundError")]
    RecordNotFound,
    #[strum(serialize = "OpcountExceededError")]
    OpcountExceeded,
    #[strum(serialize = "UsageExceededError")]
    UsageExceeded,
    #[strum(serialize = "DomainRoleAlreadyExistError")]
    DomainRoleAlreadyExist,
    #[strum(serialize = "ModifyBuiltinRoleError")]
    ModifyBuiltinRole,
    #[strum(serialize = "UserAlreadyDomainMemberError")]
    UserAlreadyDomainMember,
    #[strum(serialize = "InvalidArgumentError")]
    InvalidArgument,
    #[strum(serialize = "NoProblemError")]
    NoProblem,
    #[strum(serialize = "BatchCopyLimitExceededError")]
    BatchCopyLimitExceeded,
    #[strum(serialize = "SendMailError")]
    SendMail,
}

impl ErrorKind {
    /// Class name used in structured output (e.g. `DocumentNotFoundError`)
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Class this kind inherits status and message from
    pub const fn parent(self) -> Option<Self> {
        match self {
            Self::UserFacing => None,
            Self::BadRequest | Self::Forbidden | Self::NotFound | Self::SendMail => Some(Self::UserFacing),
            Self::InvalidArgument => Some(Self::BadRequest),
            Self::FileTooLong | Self::FileTypeNotAllowed => Some(Self::Validation),
            Self::DiscussionNotFound | Self::ProblemNotFound => Some(Self::DocumentNotFound),
            Self::DocumentNotFound
            | Self::ProblemDataNotFound
            | Self::RecordDataNotFound
            | Self::UserNotFound
            | Self::DiscussionCategoryNotFound
            | Self::DiscussionNodeNotFound
            | Self::MessageNotFound
            | Self::DomainNotFound
            | Self::RecordNotFound
            | Self::NoProblem => Some(Self::NotFound),
            Self::BuiltinDomain
            | Self::Validation
            | Self::Blacklisted
            | Self::UnknownField
            | Self::InvalidToken
            | Self::VerifyPassword
            | Self::UserAlreadyExist
            | Self::UserNotExist
            | Self::Login
            | Self::Permission
            | Self::Privilege
            | Self::CsrfToken
            | Self::InvalidOperation
            | Self::AlreadyVoted
            | Self::InvalidTokenDigest
            | Self::CurrentPassword
            | Self::DiscussionCategoryAlreadyExist
            | Self::DiscussionNodeAlreadyExist
            | Self::DomainAlreadyExist
            | Self::DomainJoinForbidden
            | Self::DomainJoinAlreadyMember
            | Self::InvalidJoinInvitationCode
            | Self::ContestAlreadyAttended
            | Self::ContestNotAttended
            | Self::ContestScoreboardHidden
            | Self::ContestNotLive
            | Self::HomeworkScoreboardHidden
            | Self::HomeworkNotLive
            | Self::HomeworkAlreadyAttended
            | Self::HomeworkNotAttended
            | Self::TrainingRequirementNotSatisfied
            | Self::TrainingAlreadyEnroll
            | Self::OpcountExceeded
            | Self::UsageExceeded
            | Self::DomainRoleAlreadyExist
            | Self::ModifyBuiltinRole
            | Self::UserAlreadyDomainMember
            | Self::BatchCopyLimitExceeded => Some(Self::Forbidden),
        }
    }

    /// This kind followed by its parents up to `UserFacingError`
    pub fn ancestors(self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self), |kind| kind.parent())
    }

    /// Whether this kind is `ancestor` or inherits from it
    pub fn is_a(self, ancestor: Self) -> bool {
        self.ancestors().any(|kind| kind == ancestor)
    }

    /// HTTP status, fixed by the branch of the hierarchy the kind sits in
    pub fn status(self) -> StatusCode {
        self.ancestors()
            .find_map(Self::own_status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    const fn own_status(self) -> Option<StatusCode> {
        match self {
            Self::BadRequest => Some(StatusCode::BAD_REQUEST),
            Self::Forbidden => Some(StatusCode::FORBIDDEN),
            Self::NotFound => Some(StatusCode::NOT_FOUND),
            _ => None,
        }
    }

    /// Static message template, inherited from the nearest parent defining one
    ///
    /// `ValidationError`, `PermissionError` and `PrivilegeError` pick their
    /// template from their arguments; this returns their default one.
    pub fn template(self) -> &'static str {
        self.ancestors().find_map(Self::own_template).unwrap_or(GENERIC_MESSAGE)
    }

    #[allow(clippy::too_many_lines)]
    const fn own_template(self) -> Option<&'static str> {
        let template = match self {
            Self::UserFacing => GENERIC_MESSAGE,
            Self::BadRequest
            | Self::Forbidden
            | Self::InvalidToken
            | Self::CsrfToken
            | Self::InvalidOperation
            | Self::InvalidTokenDigest => return None,
            Self::NotFound => "Path {0} not found.",
            Self::BuiltinDomain => "Domain {0} is bulit-in and cannot be modified.",
            Self::Validation => template::VALIDATION_SINGLE,
            Self::Blacklisted => "Address {0} is blacklisted.",
            Self::FileTooLong => "The uploaded file is too long.",
            Self::FileTypeNotAllowed => "This type of files are not allowed to be uploaded.",
            Self::UnknownField => "Unknown field {0}.",
            Self::VerifyPassword => "Passwords don't match.",
            Self::UserAlreadyExist => "User {0} already exists.",
            Self::UserNotExist => "User {0} not exists.",
            Self::Login => "Invalid password for user {0}.",
            Self::DocumentNotFound => "Document {2} not found.",
            Self::ProblemDataNotFound => "Data of problem {1} not found.",
            Self::RecordDataNotFound => "Data of record {0} not found.",
            Self::Permission => template::PERMISSION_REQUIRED,
            Self::Privilege => template::PRIVILEGE_REQUIRED,
            Self::AlreadyVoted => "You've already voted.",
            Self::UserNotFound => "User {0} not found.",
            Self::CurrentPassword => "Current password doesn't match.",
            Self::DiscussionCategoryAlreadyExist => "Discussion category {1} already exists.",
            Self::DiscussionCategoryNotFound => "Discussion category {1} not found.",
            Self::DiscussionNodeAlreadyExist => "Discussion node {1} already exists.",
            Self::DiscussionNodeNotFound => "Discussion node {1} not found.",
            Self::DiscussionNotFound => "Discussion {1} not found.",
            Self::MessageNotFound => "Message {0} not found.",
            Self::DomainNotFound => "Domain {0} not found.",
            Self::DomainAlreadyExist => "Domain {0} already exists.",
            Self::DomainJoinForbidden => {
                "You are not allowed to join the domain. The link is either invalid or expired."
            }
            Self::DomainJoinAlreadyMember => "Failed to join the domain. You are already a member.",
            Self::InvalidJoinInvitationCode => "The invitation code you provided is invalid.",
            Self::ContestAlreadyAttended => "You've already attended this contest.",
            Self::ContestNotAttended => "You haven't attended this contest yet.",
            Self::ContestScoreboardHidden => "Contest scoreboard is not visible.",
            Self::ContestNotLive => "This contest is not live.",
            Self::HomeworkScoreboardHidden => "Homework scoreboard is not visible.",
            Self::HomeworkNotLive => "This homework is not open.",
            Self::HomeworkAlreadyAttended => "You've already claimed this homework.",
            Self::HomeworkNotAttended => "You haven't claimed this homework yet.",
            Self::ProblemNotFound => "Problem {1} not found.",
            Self::TrainingRequirementNotSatisfied => "Training requirement is not satisfied.",
            Self::TrainingAlreadyEnroll => "You've already enrolled this training.",
            Self::RecordNotFound => "Record {0} not found.",
            Self::OpcountExceeded => "Too frequent operations of {0} (limit: {2} operations in {1} seconds).",
            Self::UsageExceeded => "Usage exceeded.",
            Self::DomainRoleAlreadyExist => "Role {1} already exists in domain {0}.",
            Self::ModifyBuiltinRole => "Built-in roles cannot be modified.",
            Self::UserAlreadyDomainMember => "The user is already a member of the domain.",
            Self::InvalidArgument => "Argument {0} is invalid.",
            Self::NoProblem => "No problem.",
            Self::BatchCopyLimitExceeded => "Only {0} problems can be copied in one request, got {1}.",
            Self::SendMail => "Failed to send mail to {0}.",
        };
        Some(template)
    }

    /// Number of positional arguments this kind accepts
    pub fn arity(self) -> Arity {
        match self {
            Self::Validation => Arity::between(1, 2),
            Self::Privilege => Arity::at_least(0),
            kind => Arity::at_least(template::required_args(kind.template())),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepted range of positional argument counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    /// Fewest arguments the message template can be rendered with
    pub min: usize,
    /// Most arguments the kind gives a meaning to, if bounded
    pub max: Option<usize>,
}

impl Arity {
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max: Some(max) }
    }

    pub const fn accepts(self, count: usize) -> bool {
        match self.max {
            Some(max) => count >= self.min && count <= max,
            None => count >= self.min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "exactly {max}"),
            Some(max) => write!(f, "{} to {max}", self.min),
            None => write!(f, "at least {}", self.min),
        }
    }
}
