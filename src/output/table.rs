//! Two-column table fragment: padded titles on the left, content on the right.

use serde_json::Value;

use crate::fmt::value::nice_export;

/// Content for one table row — plain text or a structured tree that gets
/// exported into readable lines at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum RowContent {
    /// Pre-formatted text; may contain embedded newlines.
    Text(String),
    /// Structured data, exported via [`nice_export`] when the table renders.
    Tree(Value),
    /// Nothing to show. `row()` drops these silently.
    Empty,
}

impl RowContent {
    /// The presence filter: rows whose content is empty are never added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Tree(value) => match value {
                Value::Null => true,
                Value::Array(items) => items.is_empty(),
                Value::Object(map) => map.is_empty(),
                _ => false,
            },
        }
    }

    fn lines(&self) -> Vec<String> {
        let rendered = match self {
            Self::Empty => String::new(),
            Self::Text(text) => text.clone(),
            Self::Tree(value) => nice_export(value, "", "", "  "),
        };
        rendered.split('\n').map(ToString::to_string).collect()
    }
}

impl From<&str> for RowContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RowContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for RowContent {
    fn from(value: Value) -> Self {
        Self::Tree(value)
    }
}

impl From<Option<String>> for RowContent {
    fn from(text: Option<String>) -> Self {
        text.map_or(Self::Empty, Self::Text)
    }
}

impl From<Option<&str>> for RowContent {
    fn from(text: Option<&str>) -> Self {
        text.map_or(Self::Empty, Into::into)
    }
}

#[derive(Debug, Clone)]
struct Row {
    title: String,
    content: RowContent,
}

/// Renders rows in a two-column layout; the title column is sized to the
/// longest title plus two spaces.
#[derive(Debug, Clone, Default)]
pub struct Table {
    rows: Vec<Option<Row>>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a row. Empty content (empty string, empty collection, absent
    /// value) is dropped without adding a row — content presence is the
    /// filter, not an error.
    pub fn row(&mut self, title: impl Into<String>, content: impl Into<RowContent>) -> &mut Self {
        let content = content.into();
        if content.is_empty() {
            return self;
        }

        self.rows.push(Some(Row {
            title: title.into(),
            content,
        }));

        self
    }

    /// Appends a rendering-only blank separator row.
    pub fn blank_row(&mut self) -> &mut Self {
        self.rows.push(None);
        self
    }

    /// Row count including blank separators — used to observe the presence filter.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Multi-line content continues under a blank title column so the
    /// content column stays aligned.
    #[must_use]
    pub fn render(&self) -> String {
        let width = self.longest_title() + 2;

        let mut lines = Vec::new();
        for row in &self.rows {
            let Some(row) = row else {
                lines.push(String::new());
                continue;
            };

            let mut title = row.title.as_str();
            for content_line in row.content.lines() {
                lines.push(format!("{title:<width$}{content_line}"));
                title = "";
            }
        }

        lines.join("\n")
    }

    fn longest_title(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .map(|row| row.title.chars().count())
            .max()
            .unwrap_or(0)
    }
}
