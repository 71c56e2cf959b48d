//! faanjyut-api 伺服器入口

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faanjyut_api::ApiError;
use faanjyut_api::api::AppState;
use faanjyut_api::api::run_server;
use faanjyut_api::config::Config;
use faanjyut_api::service::ConvertServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 初始化 logging：RUST_LOG 可以覆蓋預設級別
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  // 讀取設定
  let config = Config::from_env();
  tracing::info!(bind_addr = %config.bind_addr, "設定已載入");

  // 初始化服務（編譯詞典、載入分詞器）
  let service = Arc::new(ConvertServiceFull::new(&config)?);
  tracing::info!("轉換服務已初始化");

  // 建立應用狀態
  let state = AppState::new(config, service);

  // 啟動伺服器
  run_server(state).await
}
