//! API 設定常數

/// 輸入文本嘅最大長度（byte 單位）
///
/// 容許最多 10MB 文本。
/// 防止超大文本處理導致資源耗盡嘅限制。
pub const MAX_TEXT_LENGTH: usize = 10_000_000;

/// 預設 bind 位址
///
/// 開發環境用嘅 localhost 標準埠。
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5630";

/// 預設每行字幕嘅加權寬度上限
///
/// 約等於 16 個全形漢字；半形英文字母每個計 0.5。
pub const DEFAULT_MAX_LINE_WEIGHT: f32 = 16.0;
