use crate::config::toml_config::TomlConfig;
use crate::config::{RunConfig, DEFAULT_INPUT_PATH};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "dict-normalizer")]
#[command(about = "Deduplicate, sort and check page gaps in a JSON word dictionary")]
pub struct CliConfig {
    /// Dictionary JSON file to process
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the minimum gap length (exclusive) that gets reported
    #[arg(long)]
    pub gap_threshold: Option<u64>,

    /// Analyze only, do not write the processed file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併 TOML 與命令列參數；命令列優先
    pub fn resolve(&self) -> Result<RunConfig> {
        let toml = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let mut run = RunConfig::from_toml(self.input.clone(), &toml);
        if let Some(threshold) = self.gap_threshold {
            run.gap_threshold = threshold;
        }
        run.dry_run = self.dry_run;

        run.validate()?;
        Ok(run)
    }
}
