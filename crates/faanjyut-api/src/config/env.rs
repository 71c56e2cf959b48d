//! Config loading from environment variables

use std::path::PathBuf;

use super::constants::DEFAULT_BIND_ADDR;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5630")
  pub bind_addr: String,
  /// Path to an external lexicon JSON file.
  ///
  /// When unset the built-in lexicon ships with the library is used.
  pub lexicon_path: Option<PathBuf>,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// - `FAANJYUT_API_BIND_ADDR` - bind address (default: `127.0.0.1:5630`)
  /// - `FAANJYUT_LEXICON_PATH` - external lexicon file (default: built-in)
  #[must_use]
  pub fn from_env() -> Self {
    let bind_addr =
      std::env::var("FAANJYUT_API_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let lexicon_path = std::env::var("FAANJYUT_LEXICON_PATH").ok().map(PathBuf::from);

    Self {
      bind_addr,
      lexicon_path,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn config_from_env_has_a_bind_addr() {
    // Verify default values when environment variables are not set.
    // Note: remove_var became unsafe in Rust 2024, so not used here.
    let config = Config::from_env();
    assert!(!config.bind_addr.is_empty());
  }
}
