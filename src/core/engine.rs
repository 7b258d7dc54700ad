use crate::core::{NormalizeReport, Pipeline};
use crate::utils::error::{NormalizeError, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};

pub struct NormalizeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> NormalizeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// 執行整條管線。任何失敗（包含 panic）都以 `Err` 回傳，不會往外拋。
    pub fn run(&self) -> Result<NormalizeReport> {
        match catch_unwind(AssertUnwindSafe(|| self.run_stages())) {
            Ok(result) => result,
            Err(payload) => {
                let message = if let Some(msg) = payload.downcast_ref::<&str>() {
                    (*msg).to_string()
                } else if let Some(msg) = payload.downcast_ref::<String>() {
                    msg.clone()
                } else {
                    "pipeline panicked".to_string()
                };
                tracing::error!("Pipeline aborted unexpectedly: {}", message);
                Err(NormalizeError::unexpected(message))
            }
        }
    }

    fn run_stages(&self) -> Result<NormalizeReport> {
        tracing::info!("Loading dictionary...");
        let entries = self.pipeline.extract()?;
        tracing::info!("Loaded {} entries", entries.len());

        tracing::info!("Deduplicating, sorting and scanning for gaps...");
        let dictionary = self.pipeline.transform(entries)?;
        tracing::info!(
            "Kept {} entries, found {} missing ranges",
            dictionary.total_entries(),
            dictionary.missing_ranges.len()
        );

        let output_path = if self.pipeline.persists() {
            let path = self.pipeline.load(&dictionary)?;
            tracing::info!("Processed dictionary saved to: {}", path.display());
            Some(path)
        } else {
            tracing::info!("Dry run, skipping write");
            None
        };

        Ok(NormalizeReport {
            total_entries: dictionary.total_entries(),
            duplicates_removed: dictionary.duplicates_removed,
            missing_ranges: dictionary.missing_ranges,
            output_path,
        })
    }
}
