//! Adds a prefix string to every line of a block of text.

/// Blank lines get the prefix right-trimmed, so a prefix ending in a space
/// doesn't leave trailing whitespace on otherwise-empty lines.
#[must_use]
pub fn add(prefix: &str, lines: &str) -> String {
    if prefix.is_empty() {
        return lines.to_string();
    }

    lines
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                prefix.trim_end().to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
