//! 路由定義

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, post_convert, post_process_text};
use super::state::AppState;
use crate::errors::ApiError;

/// 建立 API 路由
///
/// # Arguments
/// * `state` - 應用狀態
///
/// # Returns
/// 設定好嘅 Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/process-text", post(post_process_text))
    .route("/convert", post(post_convert))
    .route("/health", get(health_check))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// 啟動伺服器
///
/// # Arguments
/// * `state` - 應用狀態
///
/// # Errors
/// 伺服器啟動失敗時返回錯誤
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("綁定失敗: {e}")))?;

  tracing::info!("伺服器啟動: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("伺服器錯誤: {e}")))?;

  Ok(())
}
