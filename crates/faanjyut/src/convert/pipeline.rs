//! Conversion pipeline and mode dispatch.
//!
//! A [`Converter`] owns the compiled lexicon and the phonetic classifier for
//! the lifetime of a conversion session. The Cantonese mode runs substitution
//! followed by annotation; the other declared modes are pass-through identity
//! transforms for now.

use std::str::FromStr;

use tracing::{debug, info};

use crate::convert::{annotate, substitute};
use crate::document::DocumentNode;
use crate::errors::FaanjyutResult;
use crate::lexicon::Lexicon;
use crate::phonetic::PhoneticClassifier;

/// Target register for a conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Mandarin→Cantonese conversion with phonetic hints
  Cantonese,
  /// Declared but not yet implemented; identity transform
  Mandarin,
  /// Declared but not yet implemented; identity transform
  Subtitle,
}

impl Mode {
  /// The mode's wire tag.
  #[must_use]
  pub fn tag(&self) -> &'static str {
    match self {
      Mode::Cantonese => "cantonese",
      Mode::Mandarin => "mandarin",
      Mode::Subtitle => "subtitle",
    }
  }
}

impl FromStr for Mode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "cantonese" => Ok(Self::Cantonese),
      "mandarin" => Ok(Self::Mandarin),
      "subtitle" => Ok(Self::Subtitle),
      _ => Err(format!(
        "未知模式：{s}。可用模式：cantonese, mandarin, subtitle"
      )),
    }
  }
}

impl std::fmt::Display for Mode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.tag())
  }
}

/// Conversion session facade.
///
/// Holds the compiled lexicon and classifier; both are immutable after
/// construction, so one `Converter` may be shared across threads.
pub struct Converter {
  lexicon: Lexicon,
  classifier: PhoneticClassifier,
}

impl Converter {
  /// Creates a converter from an already-compiled lexicon and classifier.
  #[must_use]
  pub fn new(lexicon: Lexicon, classifier: PhoneticClassifier) -> Self {
    Self {
      lexicon,
      classifier,
    }
  }

  /// Creates a converter over the built-in lexicon and default classifier.
  ///
  /// # Errors
  /// Fails only if the embedded lexicon data is broken.
  pub fn with_builtin() -> FaanjyutResult<Self> {
    Ok(Self::new(Lexicon::builtin()?, PhoneticClassifier::new()))
  }

  /// The compiled lexicon this session uses.
  #[must_use]
  pub fn lexicon(&self) -> &Lexicon {
    &self.lexicon
  }

  /// Transforms a document according to the selected mode.
  ///
  /// Cantonese mode runs substitution then annotation; every other mode
  /// returns the document unchanged.
  #[must_use]
  pub fn process(&self, document: &DocumentNode, mode: Mode) -> DocumentNode {
    match mode {
      Mode::Cantonese => {
        let substituted = substitute(document, &self.lexicon);
        let annotated = annotate(&substituted, &self.classifier);
        debug!(mode = %mode, "文件轉換完成");
        annotated
      }
      Mode::Mandarin | Mode::Subtitle => {
        info!(mode = %mode, "模式尚未實作，原樣返回");
        document.clone()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::document::Mark;
  use serde_json::json;

  fn converter() -> Converter {
    let lexicon = Lexicon::compile(
      json!([
        { "sourceForm": "的", "targetForm": "嘅" },
        { "sourceForm": "國", "targetForm": "國家" }
      ])
      .as_array()
      .unwrap(),
    )
    .unwrap();
    Converter::new(lexicon, PhoneticClassifier::new())
  }

  fn doc(children: Vec<DocumentNode>) -> DocumentNode {
    DocumentNode::container("doc", vec![DocumentNode::container("paragraph", children)])
  }

  #[test]
  fn mode_parses_from_wire_tags() {
    assert_eq!("cantonese".parse::<Mode>().unwrap(), Mode::Cantonese);
    assert_eq!("mandarin".parse::<Mode>().unwrap(), Mode::Mandarin);
    assert_eq!("subtitle".parse::<Mode>().unwrap(), Mode::Subtitle);
    assert!("klingon".parse::<Mode>().is_err());
  }

  #[test]
  fn mode_display_matches_tag() {
    assert_eq!(Mode::Cantonese.to_string(), "cantonese");
  }

  #[test]
  fn non_cantonese_modes_are_identity() {
    let cv = converter();
    let input = doc(vec![DocumentNode::text_leaf("我的書", Vec::new())]);
    assert_eq!(cv.process(&input, Mode::Mandarin), input);
    assert_eq!(cv.process(&input, Mode::Subtitle), input);
  }

  #[test]
  fn cantonese_mode_substitutes_then_annotates() {
    let cv = converter();
    // 的→嘅 rewrites; 你 (pinyin "ni") then gets a phonetic hint.
    let input = doc(vec![DocumentNode::text_leaf("你的書", Vec::new())]);
    let result = cv.process(&input, Mode::Cantonese);

    let leaves = result.content.as_ref().unwrap()[0].content.as_deref().unwrap();
    let texts: Vec<&str> = leaves.iter().map(|n| n.text.as_deref().unwrap()).collect();
    assert_eq!(texts, vec!["你", "嘅", "書"]);

    // 你 flagged by the n-initial pattern
    assert_eq!(leaves[0].marks, vec![Mark::phonetic_hint()]);
    // 嘅 carries the replacement mark and no hint
    assert_eq!(leaves[1].marks, vec![Mark::replaced_text()]);
    assert!(leaves[2].marks.is_empty());
  }

  #[test]
  fn with_builtin_compiles() {
    let cv = Converter::with_builtin().unwrap();
    assert!(!cv.lexicon().is_empty());
  }
}
