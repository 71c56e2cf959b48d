//! Line-Breaking Engine
//!
//! Reflows plain text into fixed-width display lines for subtitle
//! production. Pipeline, strictly in order: full-width punctuation becomes
//! spaces, the caller's flat dictionary applies (order-sensitive, literal
//! find-and-replace-all), Latin runs are isolated with spaces, the text is
//! segmented into words, and the words are greedily packed under a weighted
//! budget (CJK ideograph 1.0, Latin letter 0.5, everything else 1.0).
//!
//! A token is never split: a single token heavier than the budget still ends
//! up alone on its own line.

use tracing::debug;

use crate::linebreak::segmenter::{JiebaSegmenter, Segmenter};

/// Default line budget, roughly 16 full-width characters.
pub const DEFAULT_MAX_WEIGHT: f32 = 16.0;

/// Full-width CJK punctuation replaced by a single space before wrapping.
const PUNCTUATION: [char; 15] = [
  '，', '。', '？', '！', '、', '；', '：', '（', '）', '《', '》', '【', '】', '｛', '｝',
];

/// Per-call options for [`LineBreaker::wrap`].
#[derive(Debug, Clone)]
pub struct LineBreakOptions {
  /// Literal pattern → replacement pairs, applied globally in order.
  ///
  /// Distinct from the lexicon substitution engine: this is a flat
  /// find-and-replace-all, order-sensitive when patterns overlap.
  pub dictionary: Vec<(String, String)>,
  /// Weighted line budget
  pub max_weight: f32,
}

impl Default for LineBreakOptions {
  fn default() -> Self {
    Self {
      dictionary: Vec::new(),
      max_weight: DEFAULT_MAX_WEIGHT,
    }
  }
}

/// Replaces every full-width punctuation mark with a single space.
#[must_use]
pub fn replace_punctuation(text: &str) -> String {
  text
    .chars()
    .map(|ch| if PUNCTUATION.contains(&ch) { ' ' } else { ch })
    .collect()
}

/// Applies the flat dictionary, one global literal replace per pair, in order.
#[must_use]
pub fn apply_dictionary(text: &str, dictionary: &[(String, String)]) -> String {
  let mut result = text.to_string();
  for (pattern, replacement) in dictionary {
    if pattern.is_empty() {
      continue;
    }
    result = result.replace(pattern.as_str(), replacement);
  }
  result
}

/// Inserts a space boundary around every maximal run of Latin letters, so the
/// segmenter treats Latin words as standalone tokens even when glued to CJK
/// text.
#[must_use]
pub fn isolate_latin_runs(text: &str) -> String {
  let mut out = String::with_capacity(text.len() + 8);
  let mut in_latin = false;
  for ch in text.chars() {
    let latin = ch.is_ascii_alphabetic();
    if latin && !in_latin {
      out.push(' ');
    } else if !latin && in_latin {
      out.push(' ');
    }
    out.push(ch);
    in_latin = latin;
  }
  if in_latin {
    out.push(' ');
  }
  out
}

/// Display weight of one character: CJK 1.0, Latin letter 0.5, other 1.0.
#[must_use]
pub fn char_weight(ch: char) -> f32 {
  if ('\u{4e00}'..='\u{9fa5}').contains(&ch) {
    1.0
  } else if ch.is_ascii_alphabetic() {
    0.5
  } else {
    1.0
  }
}

/// Summed display weight of a token.
#[must_use]
pub fn text_weight(text: &str) -> f32 {
  text.chars().map(char_weight).sum()
}

/// Width-aware line breaker.
///
/// Owns a segmenter built once at startup; `wrap` itself is pure and may be
/// called concurrently.
pub struct LineBreaker {
  segmenter: Box<dyn Segmenter>,
}

impl LineBreaker {
  /// Builds a line breaker over the default jieba segmenter.
  #[must_use]
  pub fn new() -> Self {
    Self::with_segmenter(Box::new(JiebaSegmenter::new()))
  }

  /// Builds a line breaker over a custom segmentation provider.
  #[must_use]
  pub fn with_segmenter(segmenter: Box<dyn Segmenter>) -> Self {
    Self { segmenter }
  }

  /// Wraps `text` into display lines joined by `\n`.
  ///
  /// Empty input yields empty output. A line may exceed the budget only when
  /// it consists of a single token whose own weight exceeds it.
  #[must_use]
  pub fn wrap(&self, text: &str, options: &LineBreakOptions) -> String {
    // Punctuation first, then the dictionary: a dictionary entry may target
    // the spaces punctuation left behind, never the punctuation itself.
    let normalized = replace_punctuation(text);
    let substituted = apply_dictionary(&normalized, &options.dictionary);
    let isolated = isolate_latin_runs(&substituted);

    let words = self.segmenter.segment(&isolated);
    debug!(tokens = words.len(), "斷行分詞完成");

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();
    let mut current_weight = 0.0_f32;

    for word in &words {
      let word_weight = text_weight(word);

      if current_weight + word_weight > options.max_weight && !current_line.is_empty() {
        let closed = current_line.trim();
        // a line holding nothing but separator tokens is dropped, not emitted
        if !closed.is_empty() {
          lines.push(closed.to_string());
        }
        current_line = word.clone();
        current_weight = word_weight;
      } else {
        current_line.push_str(word);
        current_weight += word_weight;
      }
    }

    let last = current_line.trim();
    if !last.is_empty() {
      lines.push(last.to_string());
    }

    lines.join("\n")
  }
}

impl Default for LineBreaker {
  fn default() -> Self {
    Self::new()
  }
}
