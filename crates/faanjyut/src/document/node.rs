//! Rich-text document tree.
//!
//! The structure mirrors the JSON the surrounding editor emits
//! (tiptap/ProseMirror style): every node carries a `type` tag, text leaves
//! carry `text` + `marks`, containers carry `content`. Attributes the engine
//! does not understand are kept verbatim in `attrs` and survive every
//! transformation untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Mark kind for human-authored "do not touch" runs.
///
/// A leaf carrying this mark is immutable content: neither the substitution
/// engine nor the phonetic annotator may rewrite or split it.
pub const MARK_UNDERLINE: &str = "underline";

/// Mark kind appended to replacement leaves (red "this word changed" signal).
pub const MARK_TEXT_STYLE: &str = "textStyle";

/// Mark kind appended to phonetic-hint leaves (yellow highlight).
pub const MARK_HIGHLIGHT: &str = "highlight";

/// Colour attached to replacement leaves.
const REPLACED_COLOR: &str = "#ff0000";

/// Colour attached to phonetic-hint leaves.
const HINT_COLOR: &str = "#fff59d";

/// A named formatting attribute attached to a run of text.
///
/// Mark order on a leaf is load-bearing: transformations may append new marks
/// but never reorder or drop the original ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
  /// Mark kind, e.g. `"bold"`, `"underline"`, `"textStyle"`, `"highlight"`
  #[serde(rename = "type")]
  pub kind: String,

  /// Opaque key-value attributes (e.g. `{"color": "#ff0000"}`)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attrs: Option<Map<String, Value>>,
}

impl Mark {
  /// Creates a bare mark with no attributes.
  pub fn new(kind: impl Into<String>) -> Self {
    Self {
      kind: kind.into(),
      attrs: None,
    }
  }

  /// The mark appended to every leaf the substitution engine rewrote.
  #[must_use]
  pub fn replaced_text() -> Self {
    Self {
      kind: MARK_TEXT_STYLE.to_string(),
      attrs: attrs_with_color(REPLACED_COLOR),
    }
  }

  /// The mark appended to every character the phonetic annotator flagged.
  #[must_use]
  pub fn phonetic_hint() -> Self {
    Self {
      kind: MARK_HIGHLIGHT.to_string(),
      attrs: attrs_with_color(HINT_COLOR),
    }
  }
}

fn attrs_with_color(color: &str) -> Option<Map<String, Value>> {
  let mut attrs = Map::new();
  attrs.insert("color".to_string(), json!(color));
  Some(attrs)
}

/// One node of the rich-text document tree.
///
/// Either a text leaf (`text` is `Some`) or a container (`content` is
/// `Some`). A node that is neither — or that claims to be a text node but
/// carries no text — is treated as opaque and passed through unchanged,
/// because losing part of the user's document is worse than skipping a
/// malformed node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
  /// Node kind, e.g. `"doc"`, `"paragraph"`, `"text"`
  #[serde(rename = "type")]
  pub kind: String,

  /// Leaf text (text nodes only)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,

  /// Formatting marks on a leaf, in author order
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub marks: Vec<Mark>,

  /// Opaque node attributes, preserved verbatim
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attrs: Option<Map<String, Value>>,

  /// Child nodes (container nodes only)
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<Vec<DocumentNode>>,
}

impl DocumentNode {
  /// Creates a text leaf with the given marks.
  pub fn text_leaf(text: impl Into<String>, marks: Vec<Mark>) -> Self {
    Self {
      kind: "text".to_string(),
      text: Some(text.into()),
      marks,
      attrs: None,
      content: None,
    }
  }

  /// Creates a container node of the given kind.
  pub fn container(kind: impl Into<String>, content: Vec<DocumentNode>) -> Self {
    Self {
      kind: kind.into(),
      text: None,
      marks: Vec::new(),
      attrs: None,
      content: Some(content),
    }
  }

  /// True for a well-formed text leaf (kind `"text"` with actual text).
  #[must_use]
  pub fn is_text_leaf(&self) -> bool {
    self.kind == "text" && self.text.is_some()
  }

  /// True if any mark on this node has the given kind.
  #[must_use]
  pub fn has_mark(&self, kind: &str) -> bool {
    self.marks.iter().any(|mark| mark.kind == kind)
  }
}
