use anyhow::Context;
use clap::Parser;
use dict_normalizer::utils::error::ErrorSeverity;
use dict_normalizer::utils::logger;
use dict_normalizer::{CliConfig, DictionaryPipeline, LocalStorage, NormalizeEngine};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting dict-normalizer");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let resolved_input = if cli.input.is_absolute() {
        cli.input.clone()
    } else {
        std::env::current_dir()
            .context("failed to read the current working directory")?
            .join(&cli.input)
    };
    println!("Processing file: {}", resolved_input.display());

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            println!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let threshold = config.gap_threshold;
    let pipeline = DictionaryPipeline::new(LocalStorage::new(), config);
    let engine = NormalizeEngine::new(pipeline);

    match engine.run() {
        Ok(report) => {
            if let Some(path) = &report.output_path {
                println!("📁 Processed file saved to: {}", path.display());
            }
            println!("Total dictionary entries: {}", report.total_entries);
            if report.duplicates_removed > 0 {
                println!("Duplicate entries removed: {}", report.duplicates_removed);
            }

            if report.missing_ranges.is_empty() {
                println!("No missing ranges longer than {} pages found", threshold);
            } else {
                println!("Page ranges with more than {} pages missing:", threshold);
                for range in &report.missing_ranges {
                    println!("  from page {} to {}", range.start, range.end);
                }
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Processing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            println!("❌ Error while processing: {}", e);

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
