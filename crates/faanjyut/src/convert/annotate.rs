//! Phonetic Annotation Engine
//!
//! Runs strictly after substitution. Walks the document with the same
//! leaf/container recursion and the same underline immunity as the
//! substitution engine, and wraps each confusable character in its own leaf
//! carrying a yellow `highlight` mark. Leaves containing any Latin letter are
//! assumed non-Chinese and skipped entirely.

use tracing::debug;

use crate::document::{DocumentNode, MARK_UNDERLINE, Mark};
use crate::phonetic::PhoneticClassifier;

/// Applies phonetic hinting to a whole document.
#[must_use]
pub fn annotate(document: &DocumentNode, classifier: &PhoneticClassifier) -> DocumentNode {
  let mut out = document.clone();
  if let Some(children) = &document.content {
    out.content = Some(
      children
        .iter()
        .flat_map(|child| process_node(child, classifier))
        .collect(),
    );
  }
  debug!("發音提示標注完成");
  out
}

fn process_node(node: &DocumentNode, classifier: &PhoneticClassifier) -> Vec<DocumentNode> {
  if node.is_text_leaf() {
    if node.has_mark(MARK_UNDERLINE) {
      return vec![node.clone()];
    }
    let text = node.text.as_deref().unwrap_or_default();
    return annotate_leaf(text, &node.marks, classifier);
  }

  if let Some(children) = &node.content {
    let mut container = node.clone();
    container.content = Some(
      children
        .iter()
        .flat_map(|child| process_node(child, classifier))
        .collect(),
    );
    return vec![container];
  }

  vec![node.clone()]
}

/// Splits a leaf around every flagged character, left to right.
fn annotate_leaf(
  text: &str,
  marks: &[Mark],
  classifier: &PhoneticClassifier,
) -> Vec<DocumentNode> {
  // Latin runs are assumed non-Chinese and exempt from hinting.
  if text.chars().any(|ch| ch.is_ascii_alphabetic()) {
    return vec![DocumentNode::text_leaf(text, marks.to_vec())];
  }

  if classifier.first_flagged(text).is_none() {
    return vec![DocumentNode::text_leaf(text, marks.to_vec())];
  }

  let mut out = Vec::new();
  let mut rest = text;

  loop {
    match classifier.first_flagged(rest) {
      None => {
        if !rest.is_empty() {
          out.push(DocumentNode::text_leaf(rest, marks.to_vec()));
        }
        break;
      }
      Some(hit) => {
        if hit.offset > 0 {
          out.push(DocumentNode::text_leaf(&rest[..hit.offset], marks.to_vec()));
        }

        let mut hinted_marks = marks.to_vec();
        hinted_marks.push(Mark::phonetic_hint());
        out.push(DocumentNode::text_leaf(hit.ch, hinted_marks));

        rest = &rest[hit.offset + hit.ch.len_utf8()..];
      }
    }
  }

  out
}
