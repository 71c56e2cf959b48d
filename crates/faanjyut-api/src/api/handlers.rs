//! HTTP 處理器定義

use axum::{Json, extract::State};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{ConvertParams, ConvertResponse, ProcessTextParams, ProcessTextResponse};

use super::state::AppState;

/// POST /process-text 端點
///
/// 將中文文本斷成字幕行。
///
/// # Request Body
/// ```json
/// { "text": "待斷行嘅文本", "customDictionary": {"原文": "替換"}, "maxLineLength": 16 }
/// ```
///
/// # Response
/// - 200 OK: `{"result": "斷行後文本"}`
/// - 400 Bad Request: `{"error": "無效的文本輸入"}`（text 缺失／唔係字串／過長）
/// - 500 Internal Server Error: `{"error": "..."}`
pub async fn post_process_text(
  State(state): State<AppState>,
  Json(body): Json<Value>,
) -> Result<Json<ProcessTextResponse>, ApiError> {
  // 手動解析，令格式錯誤都返回統一嘅 {"error": ...} 形狀
  let params = ProcessTextParams::from_value(&body)?;

  debug!(text_len = params.text.len(), "收到斷行請求");

  // CPU 密集處理用 spawn_blocking 執行，唔好阻塞異步 runtime
  let service = state.service.clone();

  let response = tokio::task::spawn_blocking(move || service.process_text(params))
    .await
    .map_err(|e| {
      error!(error = %e, "spawn_blocking 錯誤");
      ApiError::internal("處理執行失敗")
    })??;

  info!(lines = response.result.lines().count(), "斷行請求完成");

  Ok(Json(response))
}

/// POST /convert 端點
///
/// 對編輯器文稿樹執行普通話→粵語轉換。
///
/// # Request Body
/// ```json
/// { "content": { "type": "doc", "content": [] }, "mode": "cantonese" }
/// ```
///
/// # Response
/// - 200 OK: `{"content": {...}, "elapsed_ms": 3}`
/// - 400 Bad Request: `{"error": "..."}`（content 無效、mode 未知）
/// - 500 Internal Server Error: `{"error": "..."}`
pub async fn post_convert(
  State(state): State<AppState>,
  Json(body): Json<Value>,
) -> Result<Json<ConvertResponse>, ApiError> {
  let params = ConvertParams::from_value(&body)?;

  debug!(mode = %params.mode, "收到文稿轉換請求");

  let service = state.service.clone();

  let response = tokio::task::spawn_blocking(move || service.convert_document(params))
    .await
    .map_err(|e| {
      error!(error = %e, "spawn_blocking 錯誤");
      ApiError::internal("處理執行失敗")
    })??;

  Ok(Json(response))
}

/// 健康檢查端點
///
/// 確認伺服器係咪運作緊。
pub async fn health_check() -> &'static str {
  "OK"
}
