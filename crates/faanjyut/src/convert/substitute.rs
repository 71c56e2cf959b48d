//! Tree Substitution Engine
//!
//! Rewrites every text leaf of a document tree through the compiled lexicon.
//! A matched run is replaced by its Cantonese form and tagged with a red
//! `textStyle` mark; the unchanged prefix keeps the original marks, and the
//! suffix is rescanned for further matches. Replacement text itself is never
//! rescanned, so substitution cannot loop even when a target form contains a
//! source form.
//!
//! The input tree is not mutated; a new tree is built bottom-up, with each
//! leaf expanding into 0..N leaves and containers flattening one level.

use tracing::debug;

use crate::document::{DocumentNode, MARK_UNDERLINE, Mark};
use crate::lexicon::Lexicon;

/// Applies lexicon substitution to a whole document.
#[must_use]
pub fn substitute(document: &DocumentNode, lexicon: &Lexicon) -> DocumentNode {
  let mut out = document.clone();
  if let Some(children) = &document.content {
    out.content = Some(
      children
        .iter()
        .flat_map(|child| process_node(child, lexicon))
        .collect(),
    );
  }
  debug!("詞彙替換完成");
  out
}

/// Rewrites one node into 0..N nodes.
fn process_node(node: &DocumentNode, lexicon: &Lexicon) -> Vec<DocumentNode> {
  if node.is_text_leaf() {
    // underline marks human-authored "do not touch" content
    if node.has_mark(MARK_UNDERLINE) {
      return vec![node.clone()];
    }
    let text = node.text.as_deref().unwrap_or_default();
    return substitute_leaf(text, &node.marks, lexicon);
  }

  if let Some(children) = &node.content {
    let mut container = node.clone();
    container.content = Some(
      children
        .iter()
        .flat_map(|child| process_node(child, lexicon))
        .collect(),
    );
    return vec![container];
  }

  // Malformed or atom node: opaque pass-through rather than aborting the
  // whole document.
  vec![node.clone()]
}

/// Splits a leaf around every lexicon match, left to right.
fn substitute_leaf(text: &str, marks: &[Mark], lexicon: &Lexicon) -> Vec<DocumentNode> {
  // No match at all: the leaf survives unchanged, even if empty.
  if lexicon.find_first(text).is_none() {
    return vec![DocumentNode::text_leaf(text, marks.to_vec())];
  }

  let mut out = Vec::new();
  let mut rest = text;

  loop {
    match lexicon.find_first(rest) {
      None => {
        if !rest.is_empty() {
          out.push(DocumentNode::text_leaf(rest, marks.to_vec()));
        }
        break;
      }
      Some(m) => {
        if m.start > 0 {
          out.push(DocumentNode::text_leaf(&rest[..m.start], marks.to_vec()));
        }

        let mut replaced_marks = marks.to_vec();
        replaced_marks.push(Mark::replaced_text());
        out.push(DocumentNode::text_leaf(m.target, replaced_marks));

        // Only the trailing remainder is rescanned; the replacement text is
        // final.
        rest = &rest[m.end..];
      }
    }
  }

  out
}
