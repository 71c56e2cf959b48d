//! faanjyut（翻粵）— Mandarin→Cantonese register conversion
//!
//! Converts Mandarin-register written text into Cantonese-register text while
//! preserving rich-text formatting, flags characters whose pronunciation may
//! trip up a reader, and reflows plain text into fixed-width display lines
//! for video subtitle production.
//!
//! All transformations are pure and synchronous. The compiled lexicon and
//! phonetic pattern set are built once at startup, immutable thereafter, and
//! safely shared across concurrent calls.

/// Conversion module - the substitution engine, phonetic annotator and mode pipeline
pub mod convert;

/// Document module - the rich-text document tree consumed and produced by the engines
pub mod document;

/// Error module - FaanjyutError, FaanjyutResult and the lexicon error taxonomy
pub mod errors;

/// Lexicon module - raw entry validation and the compiled longest-match lexicon
pub mod lexicon;

/// Line-break module - weighted width-aware wrapping for subtitle text
pub mod linebreak;

/// Phonetic module - character romanization and confusable-initial flagging
pub mod phonetic;

/// Re-exports
pub use convert::{Converter, Mode, annotate, substitute};
pub use document::{DocumentNode, Mark};
pub use errors::{FaanjyutError, FaanjyutResult, LexiconError};
pub use lexicon::{Lexicon, LexiconEntry};
pub use linebreak::{LineBreakOptions, LineBreaker};
pub use phonetic::PhoneticClassifier;
