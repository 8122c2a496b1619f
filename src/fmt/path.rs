//! Shortens absolute paths by stripping the project root.

/// Paths outside the project root pass through unchanged; paths under it
/// become relative, without a leading separator.
#[must_use]
pub fn strip_root(root: &str, path: &str) -> String {
    if root.is_empty() || path.is_empty() {
        return path.to_string();
    }

    let prefixed = format!("{}/", root.trim_end_matches('/'));
    path.strip_prefix(&prefixed)
        .map_or_else(|| path.to_string(), ToString::to_string)
}
