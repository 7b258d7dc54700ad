pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::{storage::LocalStorage, RunConfig};

pub use crate::core::{engine::NormalizeEngine, pipeline::DictionaryPipeline};
pub use domain::model::{Entry, GapRange, NormalizeReport};
pub use utils::error::{NormalizeError, Result};

use std::path::Path;

/// 以預設設定處理單一詞典檔，輸出寫到同目錄的 `processed_dictionary.json`
pub fn process_dictionary(path: impl AsRef<Path>) -> Result<NormalizeReport> {
    let config = RunConfig::for_input(path.as_ref());
    let pipeline = DictionaryPipeline::new(LocalStorage::new(), config);
    NormalizeEngine::new(pipeline).run()
}
