//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::ConvertService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Conversion service
  ///
  /// - Production: `Arc::new(ConvertServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubConvertService)`
  pub service: Arc<dyn ConvertService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn ConvertService>) -> Self {
    Self { config, service }
  }
}
