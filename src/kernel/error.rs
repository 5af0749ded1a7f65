use std::fmt;
use std::path::PathBuf;

/// 可恢复的文件错误：通过模态对话框报告，不改变内存状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    OpenFailed { path: PathBuf, message: String },
    SaveFailed { path: PathBuf, message: String },
}

impl ShellError {
    pub fn title(&self) -> &'static str {
        match self {
            ShellError::OpenFailed { .. } => "Open failed",
            ShellError::SaveFailed { .. } => "Save failed",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ShellError::OpenFailed { message, .. } | ShellError::SaveFailed { message, .. } => {
                message
            }
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for ShellError {}
