//! The eight reporting levels a log entry can carry.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Severity attached to one report, from least to most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Development-time detail.
    Debug,
    /// Normal operational events.
    Info,
    /// Normal but notable events.
    Notice,
    /// Anomalies that may need attention.
    Warning,
    /// Failures that prevented an operation from completing.
    Error,
    /// Failures in a critical component.
    Critical,
    /// Conditions requiring immediate action.
    Alert,
    /// The system is unusable.
    Emergency,
}

impl Level {
    /// Lowercase because config files and the prefix template use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Notice => "notice",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
            Self::Alert => "alert",
            Self::Emergency => "emergency",
        }
    }

    /// The `%LEVEL%` prefix token substitutes the uppercase form.
    #[must_use]
    pub const fn as_upper_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Notice => "NOTICE",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
            Self::Alert => "ALERT",
            Self::Emergency => "EMERGENCY",
        }
    }

    /// Convenience for iteration — used by validation tests.
    pub const ALL: [Self; 8] = [
        Self::Debug,
        Self::Info,
        Self::Notice,
        Self::Warning,
        Self::Error,
        Self::Critical,
        Self::Alert,
        Self::Emergency,
    ];
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Accepts exactly the eight lowercase names. No aliases and no case
    /// folding — a level that isn't recognised must abort the report attempt.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "notice" => Ok(Self::Notice),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            "alert" => Ok(Self::Alert),
            "emergency" => Ok(Self::Emergency),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}
