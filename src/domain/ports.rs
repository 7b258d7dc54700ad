use crate::domain::model::{Entry, NormalizedDictionary};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    fn exists(&self, path: &Path) -> bool;
    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>>;
    fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_filename(&self) -> &str;
    fn gap_threshold(&self) -> u64;
    fn indent(&self) -> usize;
    fn max_scan_span(&self) -> Option<u64>;
    fn dry_run(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<Entry>>;
    fn transform(&self, entries: Vec<Entry>) -> Result<NormalizedDictionary>;
    fn load(&self, dictionary: &NormalizedDictionary) -> Result<PathBuf>;

    /// 處理結果是否需要寫回磁碟
    fn persists(&self) -> bool {
        true
    }
}
