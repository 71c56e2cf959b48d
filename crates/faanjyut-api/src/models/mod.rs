//! 請求／回應模型

pub mod request;
pub mod response;

pub use request::{ConvertParams, ProcessTextParams};
pub use response::{ConvertResponse, ProcessTextResponse};
