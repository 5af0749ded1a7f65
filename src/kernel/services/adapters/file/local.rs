//! 本地文件系统 Provider
//!
//! 实现 FileProvider trait，操作本地文件系统

use crate::kernel::services::ports::file::{FileError, FileProvider, Result};
use std::fs;
use std::io;
use std::path::Path;

pub struct LocalFileProvider;

impl LocalFileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileProvider for LocalFileProvider {
    fn read_file(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            _ => io_error(path, e),
        })?;
        String::from_utf8(bytes).map_err(|_| FileError::InvalidUtf8(path.to_path_buf()))
    }

    // 不创建缺失的父目录：目录不存在属于保存失败
    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|e| io_error(path, e))
    }
}

/// 出错后再根据路径归类
fn io_error(path: &Path, e: io::Error) -> FileError {
    if path.is_dir() {
        return FileError::NotAFile(path.to_path_buf());
    }
    FileError::Io(e)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/file/local.rs"]
mod tests;
