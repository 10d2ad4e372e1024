use std::fmt;

use serde::{Deserialize, Serialize};

/// Positional argument carried by an error
///
/// Errors keep their arguments in the order they were raised with; message
/// templates address them by index. Integers double as permission and
/// privilege bit-flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorArg {
    /// Integer value, count or bit-flag
    Int(i64),
    /// Free-form text (identifiers, field names, addresses)
    Str(String),
}

impl ErrorArg {
    /// Integer payload, if this is an integer argument
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Str(_) => None,
        }
    }

    /// Text payload, if this is a string argument
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Int(_) => None,
            Self::Str(value) => Some(value),
        }
    }

    /// Whether this argument, OR'd with `flag`, leaves `flag` unchanged
    ///
    /// Strings never match.
    #[must_use]
    pub const fn is_within(&self, flag: i64) -> bool {
        match self {
            Self::Int(value) => *value | flag == flag,
            Self::Str(_) => false,
        }
    }
}

impl fmt::Display for ErrorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

impl From<i64> for ErrorArg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ErrorArg {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ErrorArg {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<String> for ErrorArg {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for ErrorArg {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<&String> for ErrorArg {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_bare_values() {
        let args = vec![ErrorArg::from("doc123"), ErrorArg::from(42)];
        let json = serde_json::to_string(&args).unwrap();
        assert_eq!(json, r#"["doc123",42]"#);

        let parsed: Vec<ErrorArg> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, args);
    }

    #[test]
    fn displays_without_quotes() {
        assert_eq!(ErrorArg::from("alice").to_string(), "alice");
        assert_eq!(ErrorArg::from(-7).to_string(), "-7");
    }

    #[test]
    fn within_flag() {
        assert!(ErrorArg::Int(0).is_within(1));
        assert!(ErrorArg::Int(1).is_within(1));
        assert!(!ErrorArg::Int(2).is_within(1));
        assert!(!ErrorArg::from("1").is_within(1));
    }
}
