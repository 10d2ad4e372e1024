use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Failure to substitute a `{{ ... }}` placeholder
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// Referenced variable is unset and has no default
    #[error("environment variable not found: `{0}` (line {1})")]
    MissingVar(String, usize),
    /// Placeholder is not of the form `env.NAME`
    #[error("only variables scoped with 'env.' are supported: `{0}` (line {1})")]
    UnsupportedScope(String, usize),
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{ scope.NAME }}` with an optional `| default("...")` filter
    RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*(?P<key>[A-Za-z0-9_.]+)\s*(?:\|\s*default\("(?P<default>[^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern is valid")
    })
}

fn resolve(caps: &Captures<'_>, line: usize) -> Result<String, ExpandError> {
    let key = &caps["key"];
    let Some(var) = key.strip_prefix("env.").filter(|var| !var.contains('.')) else {
        return Err(ExpandError::UnsupportedScope(key.to_owned(), line));
    };

    match (std::env::var(var), caps.name("default")) {
        (Ok(value), _) => Ok(value),
        (Err(_), Some(default)) => Ok(default.as_str().to_owned()),
        (Err(_), None) => Err(ExpandError::MissingVar(var.to_owned(), line)),
    }
}

/// Replace `{{ env.VAR }}` placeholders in raw config text
///
/// Comment lines are copied untouched, so commented-out settings may name
/// variables that are not set.
pub fn expand_env(input: &str) -> Result<String, ExpandError> {
    let mut output = String::with_capacity(input.len());

    for (index, line) in input.split_inclusive('\n').enumerate() {
        if line.trim_start().starts_with('#') {
            output.push_str(line);
            continue;
        }

        let mut last = 0;
        for caps in placeholder().captures_iter(line) {
            let whole = caps.get(0).expect("group 0 always matches");
            output.push_str(&line[last..whole.start()]);
            output.push_str(&resolve(&caps, index + 1)?);
            last = whole.end();
        }
        output.push_str(&line[last..]);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_without_placeholders_is_unchanged() {
        let input = "[errors]\nformat = \"json\"\n";
        assert_eq!(expand_env(input).unwrap(), input);
    }

    #[test]
    fn substitutes_set_variables() {
        temp_env::with_vars([("VJ4_HOST", Some("127.0.0.1")), ("VJ4_PORT", Some("8888"))], || {
            let out = expand_env("listen_address = \"{{ env.VJ4_HOST }}:{{env.VJ4_PORT}}\"").unwrap();
            assert_eq!(out, "listen_address = \"127.0.0.1:8888\"");
        });
    }

    #[test]
    fn unset_variable_is_reported_with_line() {
        temp_env::with_var_unset("VJ4_MISSING", || {
            let err = expand_env("a = 1\nb = \"{{ env.VJ4_MISSING }}\"").unwrap_err();
            assert_eq!(err, ExpandError::MissingVar("VJ4_MISSING".to_owned(), 2));
        });
    }

    #[test]
    fn default_applies_only_when_unset() {
        temp_env::with_var_unset("VJ4_FILTER", || {
            let out = expand_env("log_filter = \"{{ env.VJ4_FILTER | default(\"debug\") }}\"").unwrap();
            assert_eq!(out, "log_filter = \"debug\"");
        });
        temp_env::with_var("VJ4_FILTER", Some("warn"), || {
            let out = expand_env("log_filter = \"{{ env.VJ4_FILTER | default(\"debug\") }}\"").unwrap();
            assert_eq!(out, "log_filter = \"warn\"");
        });
    }

    #[test]
    fn other_scopes_are_rejected() {
        let err = expand_env("x = \"{{ secrets.TOKEN }}\"").unwrap_err();
        assert!(matches!(err, ExpandError::UnsupportedScope(ref key, 1) if key == "secrets.TOKEN"));

        let nested = expand_env("x = \"{{ env.A.B }}\"").unwrap_err();
        assert!(matches!(nested, ExpandError::UnsupportedScope(..)));
    }

    #[test]
    fn comments_are_not_expanded() {
        temp_env::with_var_unset("VJ4_MISSING", || {
            let input = "  # old = \"{{ env.VJ4_MISSING }}\"\nformat = \"html\"";
            assert_eq!(expand_env(input).unwrap(), input);
        });
    }
}
