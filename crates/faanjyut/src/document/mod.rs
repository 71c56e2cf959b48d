//! document module
pub mod node;

/// Re-export the document tree types
pub use node::{DocumentNode, MARK_HIGHLIGHT, MARK_TEXT_STYLE, MARK_UNDERLINE, Mark};
