//! faanjyut-api crate
//!
//! Web server exposing the conversion pipeline and subtitle line-breaking as
//! an HTTP API.
//!
//! ## Endpoints
//! - `POST /process-text` - punctuation normalization + dictionary substitution + line breaking
//! - `POST /convert` - Mandarin→Cantonese document conversion
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5630/process-text \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "大家好，歡迎收看今日嘅節目", "maxLineLength": 12}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{ConvertParams, ConvertResponse, ProcessTextParams, ProcessTextResponse};
pub use service::ConvertServiceFull;
