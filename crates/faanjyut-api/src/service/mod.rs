//! 轉換服務

pub mod convert_service;

pub use convert_service::{ConvertService, ConvertServiceFull};
