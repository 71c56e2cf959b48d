//! 請求模型定義
//!
//! 請求唔用 axum 嘅自動反序列化：手動由 [`serde_json::Value`] 解析，
//! 咁格式錯誤先會得到統一嘅 `{"error": ...}` 回應（而唔係 422）。

use serde_json::Value;
use std::str::FromStr;

use faanjyut::{DocumentNode, Mode};

use crate::config::DEFAULT_MAX_LINE_WEIGHT;
use crate::errors::ApiError;

/// 斷行請求（POST /process-text）
#[derive(Debug, Clone)]
pub struct ProcessTextParams {
  /// 待斷行嘅文本
  pub text: String,
  /// 自訂替換詞典，按插入順序逐對套用
  pub custom_dictionary: Vec<(String, String)>,
  /// 每行最大寬度（中文字計 1，拉丁字母計 0.5）
  pub max_line_weight: f32,
}

impl ProcessTextParams {
  /// 由請求 JSON 解析參數
  ///
  /// # Errors
  ///
  /// `text` 缺失或唔係字串、`customDictionary` 唔係字串對字串嘅物件、
  /// `maxLineLength` 唔係正數，一律返回 [`ApiError::InvalidInput`]。
  pub fn from_value(value: &Value) -> Result<Self, ApiError> {
    let text = value
      .get("text")
      .and_then(Value::as_str)
      .ok_or_else(|| ApiError::invalid_input("無效的文本輸入"))?
      .to_string();

    // customDictionary 嘅鍵順序就係套用順序（serde_json preserve_order）
    let custom_dictionary = match value.get("customDictionary") {
      None | Some(Value::Null) => Vec::new(),
      Some(Value::Object(map)) => {
        let mut pairs = Vec::with_capacity(map.len());
        for (pattern, replacement) in map {
          let Some(replacement) = replacement.as_str() else {
            return Err(ApiError::invalid_input(format!(
              "customDictionary 嘅值必須是字串：{pattern}"
            )));
          };
          pairs.push((pattern.clone(), replacement.to_string()));
        }
        pairs
      }
      Some(_) => {
        return Err(ApiError::invalid_input("customDictionary 必須是物件"));
      }
    };

    let max_line_weight = match value.get("maxLineLength") {
      None | Some(Value::Null) => DEFAULT_MAX_LINE_WEIGHT,
      Some(v) => {
        let weight = v
          .as_f64()
          .filter(|w| w.is_finite() && *w > 0.0)
          .ok_or_else(|| ApiError::invalid_input("maxLineLength 必須是正數"))?;
        weight as f32
      }
    };

    Ok(Self {
      text,
      custom_dictionary,
      max_line_weight,
    })
  }
}

/// 文稿轉換請求（POST /convert）
#[derive(Debug, Clone)]
pub struct ConvertParams {
  /// 編輯器文稿樹
  pub content: DocumentNode,
  /// 轉換模式
  pub mode: Mode,
}

impl ConvertParams {
  /// 由請求 JSON 解析參數
  ///
  /// # Errors
  ///
  /// `content` 缺失或者唔係合法文稿樹、`mode` 唔係已知標籤，
  /// 返回 [`ApiError::InvalidInput`]。
  pub fn from_value(value: &Value) -> Result<Self, ApiError> {
    let content = value
      .get("content")
      .cloned()
      .ok_or_else(|| ApiError::invalid_input("content 必須提供"))?;
    let content: DocumentNode = serde_json::from_value(content)
      .map_err(|err| ApiError::invalid_input(format!("content 格式無效：{err}")))?;

    let mode = match value.get("mode") {
      None | Some(Value::Null) => Mode::Cantonese,
      Some(Value::String(tag)) => {
        Mode::from_str(tag).map_err(ApiError::invalid_input)?
      }
      Some(_) => return Err(ApiError::invalid_input("mode 必須是字串")),
    };

    Ok(Self { content, mode })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  // ─── ProcessTextParams ───

  #[test]
  fn parse_minimal_process_text_request() {
    let value = json!({"text": "你好，世界！"});
    let params = ProcessTextParams::from_value(&value).unwrap();
    assert_eq!(params.text, "你好，世界！");
    assert!(params.custom_dictionary.is_empty());
    assert!((params.max_line_weight - DEFAULT_MAX_LINE_WEIGHT).abs() < f32::EPSILON);
  }

  #[test]
  fn parse_empty_text_is_valid() {
    let value = json!({"text": ""});
    let params = ProcessTextParams::from_value(&value).unwrap();
    assert_eq!(params.text, "");
  }

  #[test]
  fn missing_text_is_invalid_input() {
    let value = json!({"maxLineLength": 10});
    let err = ProcessTextParams::from_value(&value).unwrap_err();
    assert_eq!(err.to_string(), "無效的文本輸入");
  }

  #[test]
  fn non_string_text_is_invalid_input() {
    let value = json!({"text": 42});
    assert!(ProcessTextParams::from_value(&value).is_err());
  }

  #[test]
  fn custom_dictionary_preserves_insertion_order() {
    let value = json!({
      "text": "x",
      "customDictionary": {"乙": "甲", "甲": "丙"}
    });
    let params = ProcessTextParams::from_value(&value).unwrap();
    assert_eq!(
      params.custom_dictionary,
      vec![
        ("乙".to_string(), "甲".to_string()),
        ("甲".to_string(), "丙".to_string()),
      ]
    );
  }

  #[test]
  fn custom_dictionary_with_non_string_value_is_rejected() {
    let value = json!({"text": "x", "customDictionary": {"甲": 1}});
    assert!(ProcessTextParams::from_value(&value).is_err());
  }

  #[test]
  fn max_line_length_must_be_positive() {
    let value = json!({"text": "x", "maxLineLength": 0});
    assert!(ProcessTextParams::from_value(&value).is_err());

    let value = json!({"text": "x", "maxLineLength": -3});
    assert!(ProcessTextParams::from_value(&value).is_err());

    let value = json!({"text": "x", "maxLineLength": "wide"});
    assert!(ProcessTextParams::from_value(&value).is_err());
  }

  #[test]
  fn max_line_length_accepts_fractional_values() {
    let value = json!({"text": "x", "maxLineLength": 7.5});
    let params = ProcessTextParams::from_value(&value).unwrap();
    assert!((params.max_line_weight - 7.5).abs() < f32::EPSILON);
  }

  // ─── ConvertParams ───

  #[test]
  fn parse_convert_request_with_mode() {
    let value = json!({
      "content": {"type": "doc", "content": [{"type": "text", "text": "我們"}]},
      "mode": "cantonese"
    });
    let params = ConvertParams::from_value(&value).unwrap();
    assert_eq!(params.mode, Mode::Cantonese);
    assert_eq!(params.content.kind, "doc");
  }

  #[test]
  fn mode_defaults_to_cantonese() {
    let value = json!({"content": {"type": "doc"}});
    let params = ConvertParams::from_value(&value).unwrap();
    assert_eq!(params.mode, Mode::Cantonese);
  }

  #[test]
  fn unknown_mode_is_invalid_input() {
    let value = json!({"content": {"type": "doc"}, "mode": "klingon"});
    let err = ConvertParams::from_value(&value).unwrap_err();
    assert!(err.to_string().contains("klingon"));
  }

  #[test]
  fn missing_content_is_invalid_input() {
    let value = json!({"mode": "cantonese"});
    assert!(ConvertParams::from_value(&value).is_err());
  }
}
