//! API 錯誤定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use faanjyut::{FaanjyutError, LexiconError};

/// 錯誤種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 輸入無效
  InvalidInput,
  /// 文本過長
  TextTooLong,
  /// 內部錯誤
  Internal,
  /// 設定錯誤
  Config,
}

impl ApiErrorKind {
  /// 攞錯誤代碼
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// 攞 HTTP 狀態碼
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API 錯誤
#[derive(Debug, Error)]
pub enum ApiError {
  /// 輸入無效
  #[error("無效的文本輸入")]
  InvalidInput(String),

  /// 文本過長
  #[error("文本過長：{0} 位元組（上限：{1} 位元組）")]
  TextTooLong(usize, usize),

  /// 內部錯誤
  #[error("處理文本時出錯：{0}")]
  Internal(String),

  /// 設定錯誤
  #[error("設定錯誤：{0}")]
  Config(String),
}

impl ApiError {
  /// 攞錯誤種類
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// 攞錯誤代碼
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// 攞 HTTP 狀態碼
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 建立輸入無效錯誤
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// 建立文本過長錯誤
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// 建立內部錯誤
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 建立設定錯誤
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }

  /// 畀客戶端睇嘅錯誤訊息
  ///
  /// InvalidInput 有具體細節就用細節，冇就用統一訊息。
  #[must_use]
  pub fn client_message(&self) -> String {
    match self {
      Self::InvalidInput(detail) if !detail.is_empty() => detail.clone(),
      _ => self.to_string(),
    }
  }
}

impl IntoResponse for ApiError {
  /// 回應形狀固定為 `{"error": "<訊息>"}`，客戶端錯誤 400、伺服器錯誤 500。
  fn into_response(self) -> Response {
    let status = self.status();
    let body = json!({ "error": self.client_message() });
    (status, Json(body)).into_response()
  }
}

/// 將領域層錯誤映射到 API 層錯誤。
impl From<FaanjyutError> for ApiError {
  fn from(err: FaanjyutError) -> Self {
    match err {
      FaanjyutError::Lexicon(LexiconError::Io { .. } | LexiconError::Parse(_)) => {
        ApiError::config(err.to_string())
      }
      FaanjyutError::Lexicon(_) => ApiError::config(format!("詞典錯誤：{err}")),
      // #[non_exhaustive] enum：對應將來新增嘅變體
      _ => ApiError::internal(format!("未知錯誤：{err}")),
    }
  }
}

/// Result 型別名
pub type Result<T> = std::result::Result<T, ApiError>;
