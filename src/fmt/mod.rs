//! Small formatting helpers shared by the pipes and the renderer.

pub mod cmdline;
pub mod path;
pub mod prefix;
pub mod timestamp;
pub mod value;

/// Marker for indented sub-rows ("- location", "- agent", …).
pub(crate) const SUB_ROW: &str = "- ";

/// Indentation for nested levels inside exported values.
pub(crate) const NESTED: &str = "  ";
