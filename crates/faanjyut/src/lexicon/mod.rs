//! lexicon module
pub mod compiler;

/// Re-export the compiled lexicon types
pub use compiler::{Lexicon, LexiconEntry, LexiconMatch};
