use crate::core::gaps::GapScanner;
use crate::core::normalize::{dedupe_by_name, sort_by_ukphone};
use crate::core::{ConfigProvider, Entry, NormalizedDictionary, Pipeline, Storage};
use crate::utils::error::{NormalizeError, Result};
use serde::Serialize;
use serde_json::error::Category;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

pub struct DictionaryPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DictionaryPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 輸出檔與輸入檔放在同一個目錄
    pub fn output_path(&self) -> PathBuf {
        let input = self.config.input_path();
        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        dir.join(self.config.output_filename())
    }

    fn render(&self, entries: &[Entry]) -> Result<Vec<u8>> {
        let indent = vec![b' '; self.config.indent()];
        let mut buffer = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
        entries.serialize(&mut serializer).map_err(|e| {
            NormalizeError::unexpected(format!("failed to serialize entries: {}", e))
        })?;
        Ok(buffer)
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for DictionaryPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Entry>> {
        let path = self.config.input_path();

        if !self.storage.exists(path) {
            return Err(NormalizeError::NotFoundError {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!("Reading dictionary from: {}", path.display());
        let bytes = self.storage.read_file(path).map_err(|e| {
            NormalizeError::unexpected(format!("failed to read {}: {}", path.display(), e))
        })?;

        let text = std::str::from_utf8(&bytes).map_err(|e| {
            NormalizeError::unexpected(format!("{} is not valid UTF-8: {}", path.display(), e))
        })?;

        // 語法錯誤算 ParseError；JSON 合法但結構不對則屬於非預期錯誤
        let entries: Vec<Entry> = serde_json::from_str(text).map_err(|e| match e.classify() {
            Category::Syntax | Category::Eof => NormalizeError::ParseError {
                path: path.to_path_buf(),
                source: e,
            },
            Category::Data | Category::Io => NormalizeError::unexpected(format!(
                "{} is not an array of entries with a string `name`: {}",
                path.display(),
                e
            )),
        })?;

        tracing::debug!("Loaded {} raw entries", entries.len());
        Ok(entries)
    }

    fn transform(&self, entries: Vec<Entry>) -> Result<NormalizedDictionary> {
        let (unique, duplicates_removed) = dedupe_by_name(entries);
        if duplicates_removed > 0 {
            tracing::warn!("Removed {} duplicate entries", duplicates_removed);
        }

        let keyed = sort_by_ukphone(unique)?;
        let ukphones: Vec<i64> = keyed.iter().map(|(key, _)| *key).collect();
        let entries: Vec<Entry> = keyed.into_iter().map(|(_, entry)| entry).collect();

        let scanner = GapScanner::new(self.config.gap_threshold())
            .with_max_span(self.config.max_scan_span());
        let missing_ranges = scanner.scan(ukphones)?;

        tracing::debug!(
            "{} entries after dedupe, {} missing ranges",
            entries.len(),
            missing_ranges.len()
        );

        Ok(NormalizedDictionary {
            entries,
            duplicates_removed,
            missing_ranges,
        })
    }

    fn load(&self, dictionary: &NormalizedDictionary) -> Result<PathBuf> {
        let output_path = self.output_path();
        let data = self.render(&dictionary.entries)?;

        tracing::debug!(
            "Writing {} bytes to {}",
            data.len(),
            output_path.display()
        );
        self.storage
            .write_file(&output_path, &data)
            .map_err(|source| NormalizeError::WriteError {
                path: output_path.clone(),
                source,
            })?;

        Ok(output_path)
    }

    fn persists(&self) -> bool {
        !self.config.dry_run()
    }
}
