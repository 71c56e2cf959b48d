//! Lexicon Compiler
//!
//! Validates raw Mandarin→Cantonese vocabulary entries and compiles them into
//! an immutable lookup structure with a single combined longest-match
//! automaton. Compilation is all-or-nothing: the first malformed or duplicate
//! entry aborts the build and no partial lexicon is produced.
//!
//! The matcher is an [aho-corasick] automaton built with
//! `MatchKind::LeftmostLongest`, so when several source forms could match at
//! the same text position the longest one wins — including the case where one
//! source form is a strict prefix of another.
//!
//! [aho-corasick]: https://crates.io/crates/aho-corasick

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use aho_corasick::{AhoCorasick, MatchKind};
use serde_json::Value;
use tracing::debug;

use crate::errors::LexiconError;

/// Built-in default lexicon, shipped with the crate.
const BUILTIN_LEXICON_JSON: &str = include_str!("../../data/lexicon.json");

/// A single source-form → target-form vocabulary mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
  /// Mandarin-register form to look for
  pub source_form: String,
  /// Cantonese-register replacement
  pub target_form: String,
  /// Whether the mapping may be applied in reverse.
  ///
  /// Defaults to true. Currently unused by the substitution engine; kept as
  /// part of the entry's public contract for future bidirectional mapping.
  pub reversible: bool,
}

/// One match found by the combined matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconMatch<'a> {
  /// Byte offset where the matched source form starts
  pub start: usize,
  /// Byte offset just past the matched source form
  pub end: usize,
  /// Replacement text for the matched source form
  pub target: &'a str,
}

/// A validated, compiled lexicon.
///
/// Built once from raw entries and immutable thereafter; `Send + Sync`, so a
/// single instance can serve any number of concurrent substitution calls.
#[derive(Debug, Clone)]
pub struct Lexicon {
  /// Accepted entries, in input order
  entries: Vec<LexiconEntry>,
  /// source form → target form
  map: HashMap<String, String>,
  /// Source forms ordered by descending character length (ties: input order),
  /// aligned with `targets` and with the automaton's pattern ids
  patterns: Vec<String>,
  /// Replacement for `patterns[i]`
  targets: Vec<String>,
  /// Combined leftmost-longest matcher over all source forms
  automaton: AhoCorasick,
}

impl Lexicon {
  /// Compiles a lexicon from raw, untyped JSON records.
  ///
  /// Each record must carry a non-empty string `sourceForm` (the legacy key
  /// `mandarin` is also accepted) unique across the whole input, a non-empty
  /// string `targetForm` (legacy key `cantonese`), and an optional
  /// `reversible` flag coerced to a boolean, defaulting to true.
  ///
  /// # Errors
  /// The first invalid or duplicate entry aborts compilation.
  pub fn compile(raw: &[Value]) -> Result<Self, LexiconError> {
    let mut entries = Vec::with_capacity(raw.len());

    for (index, item) in raw.iter().enumerate() {
      let source_form = string_field(item, "sourceForm", "mandarin")
        .ok_or(LexiconError::InvalidSourceForm { index })?;

      let target_form = string_field(item, "targetForm", "cantonese")
        .ok_or(LexiconError::InvalidTargetForm { index })?;

      let reversible = item
        .get("reversible")
        .map_or(true, coerce_bool);

      entries.push(LexiconEntry {
        source_form,
        target_form,
        reversible,
      });
    }

    Self::from_entries(entries)
  }

  /// Compiles a lexicon from already-typed entries.
  ///
  /// # Errors
  /// Fails on empty forms, duplicate source forms, or automaton build failure.
  pub fn from_entries(entries: Vec<LexiconEntry>) -> Result<Self, LexiconError> {
    let mut map = HashMap::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
      if entry.source_form.is_empty() {
        return Err(LexiconError::InvalidSourceForm { index });
      }
      if entry.target_form.is_empty() {
        return Err(LexiconError::InvalidTargetForm { index });
      }
      if map.contains_key(&entry.source_form) {
        return Err(LexiconError::DuplicateSourceForm {
          form: entry.source_form.clone(),
        });
      }
      map.insert(entry.source_form.clone(), entry.target_form.clone());
    }

    // Longest source forms first, ties keeping input order. The leftmost-
    // longest automaton already prefers length on its own; the ordering also
    // fixes which entry wins an exact-length tie (there are none after the
    // duplicate check, but pattern ids stay deterministic).
    let mut order: Vec<usize> = (0..entries.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(entries[i].source_form.chars().count()));

    let patterns: Vec<String> = order.iter().map(|&i| entries[i].source_form.clone()).collect();
    let targets: Vec<String> = order.iter().map(|&i| entries[i].target_form.clone()).collect();

    let automaton = AhoCorasick::builder()
      .match_kind(MatchKind::LeftmostLongest)
      .build(&patterns)
      .map_err(|e| LexiconError::Automaton(e.to_string()))?;

    debug!(entries = entries.len(), "詞典編譯完成");

    Ok(Self {
      entries,
      map,
      patterns,
      targets,
      automaton,
    })
  }

  /// Parses and compiles a lexicon from a JSON string.
  ///
  /// # Errors
  /// Fails on malformed JSON, a non-array root, or any invalid entry.
  pub fn from_json_str(json: &str) -> Result<Self, LexiconError> {
    let value: Value =
      serde_json::from_str(json).map_err(|e| LexiconError::Parse(Arc::new(e)))?;
    let raw = value.as_array().ok_or(LexiconError::NotAnArray)?;
    Self::compile(raw)
  }

  /// Loads and compiles a lexicon from a JSON file.
  ///
  /// # Errors
  /// Fails on I/O errors or any compilation failure.
  pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| LexiconError::Io {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    Self::from_json_str(&json)
  }

  /// Compiles the built-in default Mandarin→Cantonese lexicon.
  ///
  /// # Errors
  /// Only fails if the embedded data is broken, which would be a packaging bug.
  pub fn builtin() -> Result<Self, LexiconError> {
    Self::from_json_str(BUILTIN_LEXICON_JSON)
  }

  /// The accepted entries, in input order.
  #[must_use]
  pub fn entries(&self) -> &[LexiconEntry] {
    &self.entries
  }

  /// Looks up the replacement for an exact source form.
  #[must_use]
  pub fn target_for(&self, source_form: &str) -> Option<&str> {
    self.map.get(source_form).map(String::as_str)
  }

  /// Finds the earliest, longest source form occurring in `text`.
  ///
  /// Offsets are byte offsets into `text` and always fall on character
  /// boundaries (UTF-8 is self-synchronizing, so a pattern match cannot start
  /// inside a multi-byte character).
  #[must_use]
  pub fn find_first<'a>(&'a self, text: &str) -> Option<LexiconMatch<'a>> {
    let m = self.automaton.find(text)?;
    Some(LexiconMatch {
      start: m.start(),
      end: m.end(),
      target: &self.targets[m.pattern().as_usize()],
    })
  }

  /// Number of entries in the lexicon.
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// True if the lexicon holds no entries.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Source forms in matcher order (longest first).
  #[must_use]
  pub fn source_forms(&self) -> &[String] {
    &self.patterns
  }
}

/// Extracts a non-empty string field, accepting a legacy alias key.
fn string_field(item: &Value, key: &str, alias: &str) -> Option<String> {
  item
    .get(key)
    .or_else(|| item.get(alias))
    .and_then(Value::as_str)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
}

/// Coerces an arbitrary JSON value to a boolean, JS-truthiness style.
///
/// `null` counts as true (absent flag), matching the default.
fn coerce_bool(value: &Value) -> bool {
  match value {
    Value::Bool(b) => *b,
    Value::Null => true,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(_) | Value::Object(_) => true,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn compile(raw: Value) -> Result<Lexicon, LexiconError> {
    Lexicon::compile(raw.as_array().unwrap())
  }

  // ─── Validation ─────────────────────────────────────────────────────────

  #[test]
  fn compile_accepts_valid_entries() {
    let lexicon = compile(json!([
      { "sourceForm": "你", "targetForm": "你哋" },
      { "sourceForm": "是", "targetForm": "係", "reversible": false }
    ]))
    .unwrap();

    assert_eq!(lexicon.len(), 2);
    assert_eq!(lexicon.target_for("你"), Some("你哋"));
    assert_eq!(lexicon.target_for("是"), Some("係"));
    assert!(lexicon.entries()[0].reversible);
    assert!(!lexicon.entries()[1].reversible);
  }

  #[test]
  fn compile_accepts_legacy_field_names() {
    let lexicon = compile(json!([
      { "mandarin": "我們", "cantonese": "我哋" }
    ]))
    .unwrap();
    assert_eq!(lexicon.target_for("我們"), Some("我哋"));
  }

  #[test]
  fn compile_rejects_missing_source_form() {
    let err = compile(json!([{ "targetForm": "係" }])).unwrap_err();
    assert!(matches!(err, LexiconError::InvalidSourceForm { index: 0 }));
  }

  #[test]
  fn compile_rejects_empty_source_form() {
    let err = compile(json!([{ "sourceForm": "", "targetForm": "係" }])).unwrap_err();
    assert!(matches!(err, LexiconError::InvalidSourceForm { index: 0 }));
  }

  #[test]
  fn compile_rejects_non_string_source_form() {
    let err = compile(json!([{ "sourceForm": 42, "targetForm": "係" }])).unwrap_err();
    assert!(matches!(err, LexiconError::InvalidSourceForm { index: 0 }));
  }

  #[test]
  fn compile_rejects_missing_target_form() {
    let err = compile(json!([{ "sourceForm": "是" }])).unwrap_err();
    assert!(matches!(err, LexiconError::InvalidTargetForm { index: 0 }));
  }

  #[test]
  fn compile_rejects_duplicate_source_form() {
    let err = compile(json!([
      { "sourceForm": "是", "targetForm": "係" },
      { "sourceForm": "是", "targetForm": "喺" }
    ]))
    .unwrap_err();
    match err {
      LexiconError::DuplicateSourceForm { form } => assert_eq!(form, "是"),
      other => panic!("expected DuplicateSourceForm, got {other:?}"),
    }
  }

  #[test]
  fn compile_reports_index_of_later_invalid_entry() {
    let err = compile(json!([
      { "sourceForm": "是", "targetForm": "係" },
      { "sourceForm": "的", "targetForm": "" }
    ]))
    .unwrap_err();
    assert!(matches!(err, LexiconError::InvalidTargetForm { index: 1 }));
  }

  #[test]
  fn reversible_defaults_to_true_and_coerces() {
    let lexicon = compile(json!([
      { "sourceForm": "一", "targetForm": "壹" },
      { "sourceForm": "二", "targetForm": "貳", "reversible": 0 },
      { "sourceForm": "三", "targetForm": "叁", "reversible": "yes" }
    ]))
    .unwrap();
    assert!(lexicon.entries()[0].reversible);
    assert!(!lexicon.entries()[1].reversible);
    assert!(lexicon.entries()[2].reversible);
  }

  #[test]
  fn from_json_str_rejects_non_array_root() {
    let err = Lexicon::from_json_str(r#"{"sourceForm":"是"}"#).unwrap_err();
    assert!(matches!(err, LexiconError::NotAnArray));
  }

  #[test]
  fn from_json_str_rejects_malformed_json() {
    let err = Lexicon::from_json_str("not json").unwrap_err();
    assert!(matches!(err, LexiconError::Parse(_)));
  }

  #[test]
  fn from_path_reports_missing_file() {
    let err = Lexicon::from_path("/nonexistent/lexicon.json").unwrap_err();
    assert!(matches!(err, LexiconError::Io { .. }));
  }

  #[test]
  fn from_path_loads_a_real_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.json");
    std::fs::write(&path, r#"[{ "sourceForm": "看", "targetForm": "睇" }]"#).unwrap();

    let lexicon = Lexicon::from_path(&path).unwrap();
    assert_eq!(lexicon.target_for("看"), Some("睇"));
  }

  #[test]
  fn builtin_lexicon_compiles_and_is_nonempty() {
    let lexicon = Lexicon::builtin().unwrap();
    assert!(!lexicon.is_empty());
    assert_eq!(lexicon.target_for("我們"), Some("我哋"));
  }

  // ─── Matching ───────────────────────────────────────────────────────────

  #[test]
  fn find_first_returns_earliest_match() {
    let lexicon = compile(json!([
      { "sourceForm": "是", "targetForm": "係" },
      { "sourceForm": "的", "targetForm": "嘅" }
    ]))
    .unwrap();

    let m = lexicon.find_first("我的書是新的").unwrap();
    assert_eq!(&"我的書是新的"[m.start..m.end], "的");
    assert_eq!(m.target, "嘅");
    assert_eq!(m.start, "我".len());
  }

  #[test]
  fn longer_form_wins_at_same_position() {
    let lexicon = compile(json!([
      { "sourceForm": "什麼", "targetForm": "乜嘢" },
      { "sourceForm": "為什麼", "targetForm": "點解" }
    ]))
    .unwrap();

    let text = "為什麼唔去";
    let m = lexicon.find_first(text).unwrap();
    assert_eq!(&text[m.start..m.end], "為什麼");
    assert_eq!(m.target, "點解");
  }

  #[test]
  fn prefix_entry_wins_over_longer_one_starting_later() {
    // 你們 starts at 0; 們你 would start at byte 3. Leftmost wins.
    let lexicon = compile(json!([
      { "sourceForm": "你", "targetForm": "你哋" },
      { "sourceForm": "你們", "targetForm": "你哋" }
    ]))
    .unwrap();

    let m = lexicon.find_first("你們好").unwrap();
    assert_eq!(m.start, 0);
    assert_eq!(m.end, "你們".len());
  }

  #[test]
  fn find_first_returns_none_without_match() {
    let lexicon = compile(json!([{ "sourceForm": "貓", "targetForm": "貓" }])).unwrap();
    assert!(lexicon.find_first("天氣好").is_none());
  }

  #[test]
  fn source_forms_are_ordered_longest_first() {
    let lexicon = compile(json!([
      { "sourceForm": "這", "targetForm": "呢" },
      { "sourceForm": "這裡", "targetForm": "呢度" }
    ]))
    .unwrap();
    assert_eq!(lexicon.source_forms(), &["這裡".to_string(), "這".to_string()]);
  }
}
