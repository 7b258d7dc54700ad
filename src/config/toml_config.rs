use crate::core::gaps::DEFAULT_GAP_THRESHOLD;
use crate::utils::error::{NormalizeError, Result};
use crate::utils::validation::{validate_file_name, validate_positive_number, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_OUTPUT_FILENAME: &str = "processed_dictionary.json";
pub const DEFAULT_INDENT: usize = 4;
pub const MAX_INDENT: usize = 16;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub output: OutputConfig,
    pub gaps: GapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub filename: String,
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapConfig {
    pub threshold: u64,
    pub max_scan_span: Option<u64>,
}

impl Default for GapConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_GAP_THRESHOLD,
            max_scan_span: None,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| NormalizeError::InvalidConfig {
            field: "config".to_string(),
            value: path.display().to_string(),
            reason: format!("cannot read config file: {}", e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| NormalizeError::InvalidConfig {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_file_name("output.filename", &self.output.filename)?;
        validate_range("output.indent", self.output.indent, 0, MAX_INDENT)?;

        if let Some(span) = self.gaps.max_scan_span {
            validate_positive_number("gaps.max_scan_span", span, 1)?;
        }

        Ok(())
    }
}
