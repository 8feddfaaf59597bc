//! Log reading configuration.

use chrono::NaiveDate;
use encoding_rs::Encoding;
use serde::Deserialize;

use super::defaults::default_fallback_encoding;
use super::types::ConfigError;

/// Log reading configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Date the log was written on. Overridden by `--date`; when neither is
    /// set the date is taken from the log file name.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Encoding label used for lines that are not valid UTF-8
    /// (WHATWG labels such as "windows-1252", "iso-8859-15", "utf-8").
    #[serde(default = "default_fallback_encoding")]
    pub fallback_encoding: String,
}

impl ParserConfig {
    /// Resolve the fallback encoding label.
    pub fn fallback_encoding(&self) -> Result<&'static Encoding, ConfigError> {
        Encoding::for_label(self.fallback_encoding.trim().as_bytes())
            .ok_or_else(|| ConfigError::UnknownEncoding(self.fallback_encoding.clone()))
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date: None,
            fallback_encoding: default_fallback_encoding(),
        }
    }
}
