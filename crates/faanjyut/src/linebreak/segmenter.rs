//! Word segmentation behind a narrow contract.
//!
//! The line breaker only needs "text in, ordered tokens out", so the
//! segmenter is a trait; the default provider is [jieba-rs], which handles
//! traditional-Chinese text. Concatenating the returned tokens always
//! reproduces the input exactly (segmentation is a partition, never a
//! rewrite).
//!
//! [jieba-rs]: https://crates.io/crates/jieba-rs

use jieba_rs::Jieba;

/// Locale-aware word segmentation contract.
pub trait Segmenter: Send + Sync {
  /// Segments `text` into word-granularity tokens, in order.
  fn segment(&self, text: &str) -> Vec<String>;
}

/// Default [`Segmenter`] backed by jieba.
///
/// Jieba loads its embedded dictionary at construction time, which is
/// expensive; build one instance at startup and share it.
pub struct JiebaSegmenter {
  jieba: Jieba,
}

impl JiebaSegmenter {
  /// Loads the embedded dictionary and builds the segmenter.
  #[must_use]
  pub fn new() -> Self {
    Self {
      jieba: Jieba::new(),
    }
  }
}

impl Default for JiebaSegmenter {
  fn default() -> Self {
    Self::new()
  }
}

impl Segmenter for JiebaSegmenter {
  fn segment(&self, text: &str) -> Vec<String> {
    self.jieba.cut(text, false).into_iter().map(str::to_owned).collect()
  }
}
