//! Builtin domain permissions and system privileges
//!
//! Permissions are bit-flags granted to domain roles, privileges are
//! bit-flags granted to users system-wide. Errors raised by the permission
//! checks carry these flags as arguments.

use crate::ErrorArg;

pub const PERM_NONE: i64 = 0;
pub const PERM_VIEW: i64 = 1 << 0;
pub const PERM_EDIT_PERM: i64 = 1 << 1;
pub const PERM_MOD_BADGE: i64 = 1 << 2;
pub const PERM_EDIT_DESCRIPTION: i64 = 1 << 3;
pub const PERM_VIEW_PROBLEM: i64 = 1 << 4;
pub const PERM_CREATE_PROBLEM: i64 = 1 << 5;
pub const PERM_EDIT_PROBLEM: i64 = 1 << 6;
pub const PERM_EDIT_PROBLEM_SELF: i64 = 1 << 7;
pub const PERM_VIEW_PROBLEM_HIDDEN: i64 = 1 << 8;
pub const PERM_SUBMIT_PROBLEM: i64 = 1 << 9;
pub const PERM_READ_PROBLEM_DATA: i64 = 1 << 10;
pub const PERM_READ_PROBLEM_DATA_SELF: i64 = 1 << 11;
pub const PERM_VIEW_DISCUSSION: i64 = 1 << 12;
pub const PERM_CREATE_DISCUSSION: i64 = 1 << 13;
pub const PERM_HIGHLIGHT_DISCUSSION: i64 = 1 << 14;
pub const PERM_EDIT_DISCUSSION: i64 = 1 << 15;
pub const PERM_DELETE_DISCUSSION: i64 = 1 << 16;
pub const PERM_VIEW_CONTEST: i64 = 1 << 17;
pub const PERM_VIEW_CONTEST_SCOREBOARD: i64 = 1 << 18;
pub const PERM_CREATE_CONTEST: i64 = 1 << 19;
pub const PERM_ATTEND_CONTEST: i64 = 1 << 20;
pub const PERM_EDIT_CONTEST: i64 = 1 << 21;
pub const PERM_VIEW_HOMEWORK: i64 = 1 << 22;
pub const PERM_CREATE_HOMEWORK: i64 = 1 << 23;
pub const PERM_ATTEND_HOMEWORK: i64 = 1 << 24;
pub const PERM_VIEW_TRAINING: i64 = 1 << 25;
pub const PERM_CREATE_TRAINING: i64 = 1 << 26;
pub const PERM_EDIT_TRAINING: i64 = 1 << 27;
pub const PERM_READ_RECORD_CODE: i64 = 1 << 28;
pub const PERM_REJUDGE: i64 = 1 << 29;
pub const PERM_ALL: i64 = -1;

pub const PRIV_NONE: i64 = 0;
pub const PRIV_SET_PRIV: i64 = 1 << 0;
pub const PRIV_SET_PERM: i64 = 1 << 1;
pub const PRIV_USER_PROFILE: i64 = 1 << 2;
pub const PRIV_REGISTER_USER: i64 = 1 << 3;
pub const PRIV_READ_PROBLEM_DATA: i64 = 1 << 4;
pub const PRIV_READ_RECORD_CODE: i64 = 1 << 7;
pub const PRIV_WRITE_RECORD: i64 = 1 << 8;
pub const PRIV_CREATE_DOMAIN: i64 = 1 << 9;
pub const PRIV_ALL: i64 = -1;

/// A named domain permission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permission {
    /// Group shown together on the role editor (e.g. `perm_problem`)
    pub family: &'static str,
    /// Stable key name (e.g. `perm_view_problem`)
    pub key: &'static str,
    /// Bit-flag value
    pub bit: i64,
    /// Human readable description
    pub description: &'static str,
}

impl Permission {
    /// Whether `arg` refers to this permission, by bit or by key name
    #[must_use]
    pub fn matches(&self, arg: &ErrorArg) -> bool {
        match arg {
            ErrorArg::Int(bit) => *bit == self.bit,
            ErrorArg::Str(key) => key == self.key,
        }
    }
}

/// Lookup of permissions referenced by error arguments
pub trait PermissionRegistry {
    /// Resolve an argument to a known permission
    fn lookup(&self, key: &ErrorArg) -> Option<&Permission>;

    /// Bit-flag meaning "may view the domain at all"
    fn view_permission(&self) -> i64 {
        PERM_VIEW
    }
}

const fn perm(family: &'static str, key: &'static str, bit: i64, description: &'static str) -> Permission {
    Permission {
        family,
        key,
        bit,
        description,
    }
}

/// Every builtin domain permission, in role editor order
pub static PERMISSIONS: &[Permission] = &[
    perm("perm_general", "perm_view", PERM_VIEW, "View this domain"),
    perm("perm_general", "perm_edit_perm", PERM_EDIT_PERM, "Edit permissions of a role"),
    perm("perm_general", "perm_mod_badge", PERM_MOD_BADGE, "Show MOD badge"),
    perm("perm_general", "perm_edit_description", PERM_EDIT_DESCRIPTION, "Edit description of this domain"),
    perm("perm_problem", "perm_view_problem", PERM_VIEW_PROBLEM, "View problems"),
    perm("perm_problem", "perm_create_problem", PERM_CREATE_PROBLEM, "Create problems"),
    perm("perm_problem", "perm_edit_problem", PERM_EDIT_PROBLEM, "Edit problems"),
    perm("perm_problem", "perm_edit_problem_self", PERM_EDIT_PROBLEM_SELF, "Edit own problems"),
    perm("perm_problem", "perm_view_problem_hidden", PERM_VIEW_PROBLEM_HIDDEN, "View all problems"),
    perm("perm_problem", "perm_submit_problem", PERM_SUBMIT_PROBLEM, "Submit problem"),
    perm("perm_problem", "perm_read_problem_data", PERM_READ_PROBLEM_DATA, "Read data of problem"),
    perm(
        "perm_problem",
        "perm_read_problem_data_self",
        PERM_READ_PROBLEM_DATA_SELF,
        "Read data of own problems",
    ),
    perm("perm_discussion", "perm_view_discussion", PERM_VIEW_DISCUSSION, "View discussions"),
    perm("perm_discussion", "perm_create_discussion", PERM_CREATE_DISCUSSION, "Create discussions"),
    perm(
        "perm_discussion",
        "perm_highlight_discussion",
        PERM_HIGHLIGHT_DISCUSSION,
        "Highlight discussions",
    ),
    perm("perm_discussion", "perm_edit_discussion", PERM_EDIT_DISCUSSION, "Edit discussions"),
    perm("perm_discussion", "perm_delete_discussion", PERM_DELETE_DISCUSSION, "Delete discussions"),
    perm("perm_contest", "perm_view_contest", PERM_VIEW_CONTEST, "View contests"),
    perm(
        "perm_contest",
        "perm_view_contest_scoreboard",
        PERM_VIEW_CONTEST_SCOREBOARD,
        "View contest scoreboard",
    ),
    perm("perm_contest", "perm_create_contest", PERM_CREATE_CONTEST, "Create contests"),
    perm("perm_contest", "perm_attend_contest", PERM_ATTEND_CONTEST, "Attend contests"),
    perm("perm_contest", "perm_edit_contest", PERM_EDIT_CONTEST, "Edit any contests"),
    perm("perm_homework", "perm_view_homework", PERM_VIEW_HOMEWORK, "View homework"),
    perm("perm_homework", "perm_create_homework", PERM_CREATE_HOMEWORK, "Create homework"),
    perm("perm_homework", "perm_attend_homework", PERM_ATTEND_HOMEWORK, "Claim homework"),
    perm("perm_training", "perm_view_training", PERM_VIEW_TRAINING, "View training plans"),
    perm("perm_training", "perm_create_training", PERM_CREATE_TRAINING, "Create training plans"),
    perm("perm_training", "perm_edit_training", PERM_EDIT_TRAINING, "Edit training plans"),
    perm("perm_record", "perm_read_record_code", PERM_READ_RECORD_CODE, "Read all record codes"),
    perm("perm_record", "perm_rejudge", PERM_REJUDGE, "Rejudge records"),
];

/// Registry over [`PERMISSIONS`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinPermissions;

impl PermissionRegistry for BuiltinPermissions {
    fn lookup(&self, key: &ErrorArg) -> Option<&Permission> {
        PERMISSIONS.iter().find(|permission| permission.matches(key))
    }
}
