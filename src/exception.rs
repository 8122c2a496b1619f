//! Snapshot of an exception chain, carried by the report input.
//!
//! Reports are rendered after the fact, possibly on another thread than the
//! failure, so the chain is captured as plain data rather than held as a
//! live error value.

use crate::fmt::SUB_ROW;
use crate::fmt::path::strip_root;
use crate::output::Table;

/// A source location attached to an exception frame or detail group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLocation {
    /// File path; absolute paths are shortened against the project root at
    /// render time.
    pub file: String,
    pub line: u32,
    /// Free-text descriptor of the enclosing function/method, e.g. `fn "handle"`.
    pub function: Option<String>,
}

impl FrameLocation {
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
            function: None,
        }
    }

    /// Names the enclosing function, rendered as `(fn "name")`.
    #[must_use]
    pub fn in_function(mut self, name: impl Into<String>) -> Self {
        self.function = Some(format!("fn \"{}\"", name.into()));
        self
    }

    /// `"<file> on line <line> (<function>) (last application frame)"`,
    /// with the optional parts included as available.
    #[must_use]
    pub fn render(&self, project_root: &str, last_application_frame: bool) -> String {
        let file = strip_root(project_root, &self.file);
        let file = file.trim_start_matches('/');

        let mut parts = vec![format!("{file} on line {}", self.line)];

        if let Some(function) = &self.function {
            if !function.is_empty() {
                parts.push(format!("({function})"));
            }
        }

        if last_application_frame {
            parts.push("(last application frame)".to_string());
        }

        parts.join(" ")
    }
}

/// One link in a reported exception chain, following cause links to
/// arbitrary depth.
#[derive(Debug, Clone)]
pub struct CaughtException {
    pub type_name: String,
    pub message: String,
    pub code: Option<i64>,
    /// Deepest application frame, when known.
    pub location: Option<FrameLocation>,
    /// The actual throw site, when it differs from the application frame.
    pub vendor_location: Option<FrameLocation>,
    pub cause: Option<Box<CaughtException>>,
}

impl CaughtException {
    #[must_use]
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            code: None,
            location: None,
            vendor_location: None,
            cause: None,
        }
    }

    /// Captures a `std::error::Error` and its source chain. Only the
    /// outermost error's type name is recoverable; sources render by
    /// message alone.
    #[must_use]
    pub fn from_error<E: std::error::Error>(error: &E) -> Self {
        let mut root = Self::new(std::any::type_name::<E>(), error.to_string());

        let mut messages = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            messages.push(cause.to_string());
            source = cause.source();
        }

        let mut chain: Option<Box<Self>> = None;
        for message in messages.into_iter().rev() {
            let mut cause = Self::new("", message);
            cause.cause = chain;
            chain = Some(Box::new(cause));
        }
        root.cause = chain;

        root
    }

    #[must_use]
    pub const fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the deepest application frame.
    #[must_use]
    pub fn located_at(mut self, location: FrameLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Sets the actual throw site; only rendered when it differs from the
    /// application frame.
    #[must_use]
    pub fn thrown_at(mut self, location: FrameLocation) -> Self {
        self.vendor_location = Some(location);
        self
    }

    #[must_use]
    pub fn caused_by(mut self, cause: Self) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// `Type: "message" (code N)`; just `"message"` when the type is unknown.
    #[must_use]
    pub fn type_and_message(&self) -> String {
        let code = self.code.map(|code| format!(" (code {code})")).unwrap_or_default();

        if self.type_name.is_empty() {
            format!("\"{}\"{code}", self.message)
        } else {
            format!("{}: \"{}\"{code}", self.type_name, self.message)
        }
    }

    /// Renders the whole chain into the table: `exception` / `prev-ex.` /
    /// `prev-ex. N` entries, outermost first, each with its location rows.
    pub fn render_to_table(&self, table: &mut Table, project_root: &str, number: Option<usize>) {
        let mut current = Some(self);
        let mut depth = 0usize;

        while let Some(exception) = current {
            let title = match depth {
                0 => number.map_or_else(|| "exception".to_string(), |n| format!("exception {n}")),
                1 => "prev-ex.".to_string(),
                n => format!("prev-ex. {n}"),
            };

            table.row(title, exception.type_and_message());

            let app_location = exception
                .location
                .as_ref()
                .map(|location| location.render(project_root, false));
            if let Some(rendered) = &app_location {
                table.row(format!("{SUB_ROW}location"), rendered.clone());
            }

            if let Some(vendor) = &exception.vendor_location {
                let rendered = vendor.render(project_root, false);
                if app_location.as_deref() != Some(rendered.as_str()) {
                    table.row(format!("{SUB_ROW}vendor"), rendered);
                }
            }

            depth += 1;
            current = exception.cause.as_deref();
        }
    }
}
