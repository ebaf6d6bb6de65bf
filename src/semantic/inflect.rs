//! Shared string inflection utilities.
//!
//! Narrative templates need human-readable forms of table and column names:
//! `user_accounts` → "User Accounts", `UserRoles` → "User Roles", and
//! singular forms for per-record phrasing.

use inflector::Inflector;

/// Convert a snake_case or PascalCase identifier to spaced Title Case.
///
/// # Examples
/// ```ignore
/// assert_eq!(humanize("user_accounts"), "User Accounts");
/// assert_eq!(humanize("UserRoles"), "User Roles");
/// ```
pub fn humanize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    text.to_title_case()
}

/// Singularize a humanized word or phrase.
///
/// Applies suffix rules in priority order: `ies` → `y`, then strip `es`,
/// then strip `s`. Anything else passes through unchanged. The rules are
/// deliberately simple; the narrative templates are tuned to them.
///
/// # Examples
/// ```ignore
/// assert_eq!(singularize("Categories"), "Category");
/// assert_eq!(singularize("Statuses"), "Status");
/// assert_eq!(singularize("Users"), "User");
/// ```
pub fn singularize(text: &str) -> String {
    if let Some(stem) = strip_suffix_ci(text, "ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = strip_suffix_ci(text, "es") {
        return stem.to_string();
    }
    if let Some(stem) = strip_suffix_ci(text, "s") {
        return stem.to_string();
    }
    text.to_string()
}

/// Case-insensitive ASCII suffix strip. Returns `None` when the suffix does
/// not match or stripping would split a UTF-8 character.
fn strip_suffix_ci<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let n = s.len();
    let m = suffix.len();
    if n < m {
        return None;
    }
    if s.as_bytes()[n - m..].eq_ignore_ascii_case(suffix.as_bytes()) {
        s.get(..n - m)
    } else {
        None
    }
}
