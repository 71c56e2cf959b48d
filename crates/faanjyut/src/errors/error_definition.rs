//! 錯誤定義

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// 詞典（lexicon）載入與編譯相關嘅錯誤。
///
/// Any of these is terminal for the whole lexicon: validation aborts at the
/// first bad entry and no partial lexicon is ever produced.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum LexiconError {
  /// 詞典根節點唔係陣列
  #[error("詞典根節點必須是陣列")]
  NotAnArray,

  /// sourceForm 缺失、為空或者唔係字串
  #[error("第 {index} 項：sourceForm 必須是非空字串")]
  InvalidSourceForm {
    /// 出錯項目嘅索引（0 起）
    index: usize,
  },

  /// targetForm 缺失、為空或者唔係字串
  #[error("第 {index} 項：targetForm 必須是非空字串")]
  InvalidTargetForm {
    /// 出錯項目嘅索引（0 起）
    index: usize,
  },

  /// sourceForm 喺成個詞典入面重複出現
  #[error("sourceForm 重複：{form}")]
  DuplicateSourceForm {
    /// 重複嘅 sourceForm
    form: String,
  },

  /// 組合匹配自動機構建失敗
  #[error("無法建立詞典匹配自動機：{0}")]
  Automaton(String),

  /// 讀取詞典檔案失敗
  #[error("讀取詞典檔案失敗：{path}: {source}")]
  Io {
    /// 出錯嘅檔案路徑
    path: PathBuf,
    /// 底層 I/O 錯誤
    #[source]
    source: Arc<io::Error>,
  },

  /// 詞典 JSON 解析失敗
  #[error("詞典 JSON 解析失敗：{0}")]
  Parse(#[source] Arc<serde_json::Error>),
}

/// 統一錯誤型
/// 本 crate 對外公開嘅錯誤 API 一律返回呢個型
/// 以 `FaanjyutResult<T>` = `Result<T, FaanjyutError>` 使用
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum FaanjyutError {
  /// 詞典相關錯誤
  #[error(transparent)]
  Lexicon(#[from] LexiconError),
}

/// faanjyut crate 嘅標準 Result 型別名
pub type FaanjyutResult<T> = Result<T, FaanjyutError>;
