//! Phonetic Classifier
//!
//! Maps characters to a tone-neutral romanization and flags the ones whose
//! pronunciation starts with a known confusable initial. The romanization
//! provider sits behind the narrow [`Romanizer`] contract so it can be
//! swapped out in tests; the default provider is backed by the [pinyin]
//! crate, which carries readings for traditional characters.
//!
//! The classifier is constructed once, explicitly, and handed to callers —
//! there is no ambient global dictionary registration.
//!
//! [pinyin]: https://crates.io/crates/pinyin

use pinyin::ToPinyin;

/// Initials that commonly trip up a Cantonese-speaking reader.
// TODO: make the pattern set loadable alongside the lexicon once the hint
// vocabulary grows beyond these four initials.
pub const DEFAULT_HINT_PATTERNS: [&str; 4] = ["guang", "guo", "kuang", "n"];

/// Single-character romanization lookup.
///
/// Returns the tone-neutral romanized syllable for a character, or `None`
/// when the character has no known reading (Latin letters, punctuation,
/// rare ideographs). Any correctly behaving provider is substitutable.
pub trait Romanizer: Send + Sync {
  /// Romanizes one character, tone-neutral.
  fn romanize(&self, ch: char) -> Option<String>;
}

/// Default [`Romanizer`] backed by the `pinyin` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinRomanizer;

impl Romanizer for PinyinRomanizer {
  fn romanize(&self, ch: char) -> Option<String> {
    ch.to_pinyin().map(|p| p.plain().to_string())
  }
}

/// A character the classifier flagged, with its byte offset in the scanned
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlaggedChar {
  /// Byte offset of the character in the scanned text
  pub offset: usize,
  /// The flagged character
  pub ch: char,
}

/// Flags characters whose romanized initial matches a fixed pattern set.
///
/// Immutable after construction and `Send + Sync`, so one instance can serve
/// any number of concurrent annotation calls.
pub struct PhoneticClassifier {
  patterns: Vec<String>,
  romanizer: Box<dyn Romanizer>,
}

impl PhoneticClassifier {
  /// Creates a classifier with the default pattern set and pinyin provider.
  #[must_use]
  pub fn new() -> Self {
    Self::with_romanizer(Box::new(PinyinRomanizer))
  }

  /// Creates a classifier with the default pattern set and a custom provider.
  #[must_use]
  pub fn with_romanizer(romanizer: Box<dyn Romanizer>) -> Self {
    Self {
      patterns: DEFAULT_HINT_PATTERNS.iter().map(|s| (*s).to_string()).collect(),
      romanizer,
    }
  }

  /// True if the character's romanization starts with any hint pattern.
  #[must_use]
  pub fn is_flagged(&self, ch: char) -> bool {
    match self.romanizer.romanize(ch) {
      Some(syllable) => self.patterns.iter().any(|p| syllable.starts_with(p.as_str())),
      None => false,
    }
  }

  /// Finds the first (lowest-index) flagged character in `text`.
  #[must_use]
  pub fn first_flagged(&self, text: &str) -> Option<FlaggedChar> {
    text
      .char_indices()
      .find(|&(_, ch)| self.is_flagged(ch))
      .map(|(offset, ch)| FlaggedChar { offset, ch })
  }
}

impl Default for PhoneticClassifier {
  fn default() -> Self {
    Self::new()
  }
}
