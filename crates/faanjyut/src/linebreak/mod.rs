//! linebreak module
pub mod segmenter;
pub mod wrapper;

/// Re-export the line-breaking types
pub use segmenter::{JiebaSegmenter, Segmenter};
pub use wrapper::{
  DEFAULT_MAX_WEIGHT, LineBreakOptions, LineBreaker, apply_dictionary, char_weight,
  isolate_latin_runs, replace_punctuation, text_weight,
};
