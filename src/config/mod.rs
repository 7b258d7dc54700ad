#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_positive_number, validate_range, Validate,
};
use std::path::{Path, PathBuf};
use toml_config::{TomlConfig, MAX_INDENT};

pub const DEFAULT_INPUT_PATH: &str = "public/dicts/dictionary.json";

/// 單次執行所需的完整設定（CLI 參數與 TOML 合併後的結果）
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_filename: String,
    pub gap_threshold: u64,
    pub indent: usize,
    pub max_scan_span: Option<u64>,
    pub dry_run: bool,
}

impl RunConfig {
    pub fn for_input(input_path: impl Into<PathBuf>) -> Self {
        Self::from_toml(input_path, &TomlConfig::default())
    }

    pub fn from_toml(input_path: impl Into<PathBuf>, toml: &TomlConfig) -> Self {
        Self {
            input_path: input_path.into(),
            output_filename: toml.output.filename.clone(),
            gap_threshold: toml.gaps.threshold,
            indent: toml.output.indent,
            max_scan_span: toml.gaps.max_scan_span,
            dry_run: false,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::for_input(DEFAULT_INPUT_PATH)
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_file_name("output.filename", &self.output_filename)?;
        validate_range("output.indent", self.indent, 0, MAX_INDENT)?;

        if let Some(span) = self.max_scan_span {
            validate_positive_number("gaps.max_scan_span", span, 1)?;
        }

        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_filename(&self) -> &str {
        &self.output_filename
    }

    fn gap_threshold(&self) -> u64 {
        self.gap_threshold
    }

    fn indent(&self) -> usize {
        self.indent
    }

    fn max_scan_span(&self) -> Option<u64> {
        self.max_scan_span
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let config = RunConfig::default();
        assert_eq!(config.input_path, PathBuf::from(DEFAULT_INPUT_PATH));
        assert_eq!(config.output_filename, "processed_dictionary.json");
        assert_eq!(config.gap_threshold, 10);
        assert_eq!(config.indent, 4);
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_run_config_validation() {
        let mut config = RunConfig::for_input("dict.json");
        config.output_filename = String::new();
        assert!(config.validate().is_err());

        let mut config = RunConfig::for_input("dict.json");
        config.indent = MAX_INDENT + 1;
        assert!(config.validate().is_err());

        let mut config = RunConfig::for_input("dict.json");
        config.max_scan_span = Some(0);
        assert!(config.validate().is_err());

        let mut config = RunConfig::for_input("dict.json");
        config.output_filename = "clean.json".to_string();
        config.indent = 0;
        config.max_scan_span = Some(1);
        assert!(config.validate().is_ok());
    }
}
