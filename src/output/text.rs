//! Free-text fragment: plain lines, rendered verbatim.

/// Accumulates lines of text for headers and prose blocks.
#[derive(Debug, Clone, Default)]
pub struct Text {
    lines: Vec<String>,
}

impl Text {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line as given, even when empty.
    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Splits on embedded newlines so multi-line blocks land as separate lines.
    pub fn lines(&mut self, text: &str) -> &mut Self {
        for line in text.split('\n') {
            self.lines.push(line.to_string());
        }
        self
    }

    pub fn blank_line(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}
