//! phonetic module
pub mod classifier;

/// Re-export the classifier types
pub use classifier::{DEFAULT_HINT_PATTERNS, FlaggedChar, PhoneticClassifier, PinyinRomanizer, Romanizer};
