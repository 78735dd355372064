//! Small string helpers.

/// Returns true when the value is absent, empty, or only whitespace.
///
/// Whitespace is Unicode whitespace (spaces, tabs, newlines and friends).
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
