//! Unified error type for all clearlog operations.

use std::path::PathBuf;

/// Error type for clearlog operations.
///
/// Variants are `Clone` so pipe failures can be collected during the first
/// pipeline pass and rendered again by the internal-errors pipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid reporting level string.
    InvalidLevel(String),
    /// No renderer registered under this id.
    UnknownRenderer(String),
    /// Timezone name not found in the tz database.
    InvalidTimezone(String),
    /// A configured date/time format part chrono could not render.
    InvalidDateTimeFormat(String),
    /// The accumulated fragments rendered to more than one kind of output.
    MixedOutputKinds(Vec<&'static str>),
    /// A pipe step failed while building a report.
    Pipe {
        /// Name of the pipe step that failed.
        pipe: &'static str,
        /// What went wrong, as reported by the step.
        message: String,
    },
    /// I/O error while loading a config file.
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error, stringified to keep the type `Clone`.
        message: String,
    },
    /// TOML config parsing error.
    ConfigParse(String),
}

impl Error {
    /// Pipe failures carry their own message; the runner adds the step name.
    #[must_use]
    pub fn pipe(pipe: &'static str, message: impl Into<String>) -> Self {
        Self::Pipe {
            pipe,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLevel(level) => write!(f, "invalid reporting level: \"{level}\""),
            Self::UnknownRenderer(id) => write!(f, "no renderer registered as \"{id}\""),
            Self::InvalidTimezone(tz) => write!(f, "unknown timezone: \"{tz}\""),
            Self::InvalidDateTimeFormat(part) => {
                write!(f, "invalid date/time format: \"{part}\"")
            }
            Self::MixedOutputKinds(kinds) => {
                write!(f, "fragments rendered to mixed kinds: {}", kinds.join(", "))
            }
            Self::Pipe { pipe, message } => write!(f, "pipe \"{pipe}\" failed: {message}"),
            Self::Io { path, message } => {
                write!(f, "I/O error reading {}: {message}", path.display())
            }
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for Error {}
