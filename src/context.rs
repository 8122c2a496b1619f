//! Optional structured-context collaborators.
//!
//! A context-tracking library in the host application can annotate
//! exceptions and call sites with rich detail. The core only consumes that
//! data through these traits; when no provider is wired in, every pipe that
//! depends on one simply contributes nothing.

use serde_json::Value;

use crate::exception::{CaughtException, FrameLocation};
use crate::level::Level;

/// Which traversal the detail groups should come back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOrder {
    /// Oldest frame first.
    CallStack,
    /// Most recent frame first.
    StackTrace,
}

/// One annotation attached to a detail group.
#[derive(Debug, Clone)]
pub enum Annotation {
    /// The exception was thrown in this group's frame.
    ExceptionThrown,
    /// The exception was caught (by the framework) in this group's frame.
    ExceptionCaught,
    /// Caller-supplied context data recorded at this frame.
    Context(Value),
}

/// Annotations grouped by the frame they were recorded at.
#[derive(Debug, Clone)]
pub struct DetailGroup {
    pub location: FrameLocation,
    /// The deepest frame belonging to the application rather than a dependency.
    pub in_last_application_frame: bool,
    /// Whether this group's frame is also the last frame overall.
    pub in_last_frame: bool,
    pub annotations: Vec<Annotation>,
}

/// Rich per-report annotation data supplied by an external collaborator.
///
/// Every method has a neutral default so providers implement only what they
/// track. The two setters exist so the orchestrator can push explicitly
/// chosen channel/level values back onto the context, keeping its record
/// consistent with what actually got logged.
pub trait StructuredContext: Send + Sync {
    /// Known-issue descriptions the report subject relates to.
    fn known_issues(&self) -> Vec<String> {
        Vec::new()
    }

    /// `(name, id)` pairs; an empty name renders the id alone.
    fn trace_identifiers(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Preferred channels, consulted when the caller didn't pick one.
    fn channels(&self) -> Vec<String> {
        Vec::new()
    }

    /// Preferred level, consulted when the caller didn't pick one.
    fn level(&self) -> Option<Level> {
        None
    }

    /// Whether the detail groups carry anything worth a CONTEXT DETAILS block.
    fn details_worth_listing(&self) -> bool {
        false
    }

    /// The ordering algorithm is the provider's own; the core just asks for
    /// one of the two traversals.
    fn detail_groups(&self, order: DetailOrder) -> Vec<DetailGroup> {
        let _ = order;
        Vec::new()
    }

    fn set_channels(&mut self, channels: &[String]) {
        let _ = channels;
    }

    fn set_level(&mut self, level: Level) {
        let _ = level;
    }
}

/// Hands out a [`StructuredContext`] for the report subject.
pub trait ContextSource: Send + Sync {
    /// Context recorded for this specific exception, if any.
    fn for_exception(&self, exception: &CaughtException) -> Option<Box<dyn StructuredContext>>;

    /// Context snapshotted at the current call site, for plain messages.
    fn current(&self) -> Option<Box<dyn StructuredContext>>;
}
