//! 文件访问端口
//!
//! 编辑器只做整文件读写，每次操作要么完全成功，要么不改变任何内存状态。

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    NotFound(PathBuf),
    NotAFile(PathBuf),
    InvalidUtf8(PathBuf),
    Io(io::Error),
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound(path) => write!(f, "No such file: {}", path.display()),
            FileError::NotAFile(path) => write!(f, "Not a regular file: {}", path.display()),
            FileError::InvalidUtf8(path) => {
                write!(f, "File is not valid UTF-8 text: {}", path.display())
            }
            FileError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

pub trait FileProvider {
    /// 读取整个文件为 UTF-8 文本
    fn read_file(&self, path: &Path) -> Result<String>;

    /// 以 UTF-8 写入整个文件，内容原样写出（不追加换行）
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/file.rs"]
mod tests;
