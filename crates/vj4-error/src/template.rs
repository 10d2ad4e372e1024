//! Positional message templates
//!
//! Templates address arguments by index (`{0}`, `{2}`); `{{` and `}}` stand
//! for literal braces. Indices may be skipped, the argument list keeps slots
//! that only sibling kinds read.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use vj4_core::ErrorArg;

pub(crate) const VALIDATION_SINGLE: &str = "Field {0} validation failed.";
pub(crate) const VALIDATION_EITHER: &str = "Field {0} or {1} validation failed.";
pub(crate) const PERMISSION_REQUIRED: &str = "You don't have the required permission ({0}) in this domain.";
pub(crate) const PERMISSION_VIEW: &str = "You cannot visit this domain.";
pub(crate) const PRIVILEGE_REQUIRED: &str = "You don't have the required privilege.";
pub(crate) const PRIVILEGE_LOGIN: &str = "You're not logged in.";

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `{{`, `}}` or `{index}`; anything else is literal text
    RE.get_or_init(|| Regex::new(r"\{\{|\}\}|\{(?P<index>[0-9]+)\}").expect("placeholder pattern is valid"))
}

fn index(caps: &Captures<'_>) -> Option<usize> {
    caps.name("index")?.as_str().parse().ok()
}

/// Substitute `args` into `template`
///
/// A placeholder without a matching argument is kept verbatim.
pub fn render(template: &str, args: &[ErrorArg]) -> String {
    placeholder()
        .replace_all(template, |caps: &Captures<'_>| match &caps[0] {
            "{{" => "{".to_owned(),
            "}}" => "}".to_owned(),
            whole => index(caps)
                .and_then(|i| args.get(i))
                .map_or_else(|| whole.to_owned(), ToString::to_string),
        })
        .into_owned()
}

/// Number of arguments needed to fill every placeholder of `template`
pub fn required_args(template: &str) -> usize {
    placeholder()
        .captures_iter(template)
        .filter_map(|caps| index(&caps))
        .map(|i| i + 1)
        .max()
        .unwrap_or(0)
}
