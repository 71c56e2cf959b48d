//! 文本轉換服務

use std::time::Instant;

use tracing::info;

use faanjyut::lexicon::Lexicon;
use faanjyut::phonetic::PhoneticClassifier;
use faanjyut::{Converter, LineBreakOptions, LineBreaker};

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{ConvertParams, ConvertResponse, ProcessTextParams, ProcessTextResponse};

/// 轉換服務嘅統一介面
///
/// 測試可以用 stub／mock 代替正式實作（`ConvertServiceFull`）。
pub trait ConvertService: Send + Sync {
  /// 斷行
  ///
  /// # Errors
  /// - 輸入錯誤（文本過長等）
  /// - 內部錯誤
  fn process_text(&self, params: ProcessTextParams) -> Result<ProcessTextResponse>;

  /// 文稿樹轉換
  ///
  /// # Errors
  /// - 輸入錯誤
  /// - 內部錯誤
  fn convert_document(&self, params: ConvertParams) -> Result<ConvertResponse>;
}

/// 文本轉換服務
///
/// 啟動時編譯一次詞典同分詞器，之後每個請求共用。
pub struct ConvertServiceFull {
  /// 普通話→粵語轉換管線
  converter: Converter,
  /// 斷行器（jieba 分詞）
  breaker: LineBreaker,
}

impl ConvertServiceFull {
  /// 初始化服務
  ///
  /// 有 `lexicon_path` 就由檔案載入詞典，冇就用內建詞典。
  ///
  /// # Errors
  /// 詞典載入或者編譯失敗時返回錯誤
  pub fn new(config: &Config) -> Result<Self> {
    let lexicon = match &config.lexicon_path {
      Some(path) => {
        info!(path = %path.display(), "載入外部詞典");
        Lexicon::from_path(path)
          .map_err(|e| ApiError::config(format!("載入詞典失敗: {e}")))?
      }
      None => Lexicon::builtin().map_err(|e| ApiError::config(format!("內建詞典無效: {e}")))?,
    };

    info!(entries = lexicon.len(), "詞典編譯完成");

    let converter = Converter::new(lexicon, PhoneticClassifier::new());
    let breaker = LineBreaker::new();

    Ok(Self { converter, breaker })
  }

  /// 字幕斷行
  ///
  /// # Errors
  /// 文本超過上限時返回錯誤。空文本唔係錯誤，結果係空字串。
  pub fn process_text(&self, params: ProcessTextParams) -> Result<ProcessTextResponse> {
    let text_bytes = params.text.len();
    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    let start = Instant::now();

    let options = LineBreakOptions {
      dictionary: params.custom_dictionary,
      max_weight: params.max_line_weight,
    };
    let result = self.breaker.wrap(&params.text, &options);

    info!(
      input_bytes = text_bytes,
      lines = result.lines().count(),
      elapsed_ms = start.elapsed().as_millis() as u64,
      "斷行完成"
    );

    Ok(ProcessTextResponse { result })
  }

  /// 文稿樹轉換
  pub fn convert_document(&self, params: ConvertParams) -> Result<ConvertResponse> {
    let start = Instant::now();

    let content = self.converter.process(&params.content, params.mode);
    let elapsed_ms = start.elapsed().as_millis() as u64;

    info!(mode = %params.mode, elapsed_ms, "文稿轉換完成");

    Ok(ConvertResponse { content, elapsed_ms })
  }
}

impl ConvertService for ConvertServiceFull {
  fn process_text(&self, params: ProcessTextParams) -> Result<ProcessTextResponse> {
    // 直接寫 self.process_text(...) 會遞迴調用 trait 方法，要明確調用固有方法
    ConvertServiceFull::process_text(self, params)
  }

  fn convert_document(&self, params: ConvertParams) -> Result<ConvertResponse> {
    ConvertServiceFull::convert_document(self, params)
  }
}
