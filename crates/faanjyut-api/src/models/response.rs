//! 回應模型定義

use serde::Serialize;

use faanjyut::DocumentNode;

/// 斷行回應
#[derive(Debug, Serialize)]
pub struct ProcessTextResponse {
  /// 斷行後嘅文本，各行以 `\n` 連接
  pub result: String,
}

/// 文稿轉換回應
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
  /// 轉換後嘅文稿樹
  pub content: DocumentNode,
  /// 處理耗時（毫秒）
  pub elapsed_ms: u64,
}
