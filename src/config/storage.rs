use crate::core::Storage;
use std::fs;
use std::path::Path;

/// 直接讀寫本機檔案系統
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        fs::read(path)
    }

    // 直接覆寫，不先備份既有檔案
    fn write_file(&self, path: &Path, data: &[u8]) -> std::io::Result<()> {
        fs::write(path, data)
    }
}
