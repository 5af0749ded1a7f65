//! 模态对话框端口
//!
//! 所有方法都是阻塞的：对话框关闭之前不会返回。

use std::path::PathBuf;

/// "Unsaved changes" 提示的三个答案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardAnswer {
    Save,
    Discard,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    pub name: &'static str,
    /// 不带点的扩展名；"*" 表示任意文件
    pub extensions: &'static [&'static str],
}

pub const TEXT_FILES: FileFilter = FileFilter {
    name: "Text files",
    extensions: &["txt"],
};

pub const ALL_FILES: FileFilter = FileFilter {
    name: "All files",
    extensions: &["*"],
};

pub const DEFAULT_EXTENSION: &str = "txt";

pub fn default_filters() -> Vec<FileFilter> {
    vec![TEXT_FILES, ALL_FILES]
}

/// 选中的文件名没有扩展名（包括以 "." 结尾）时补上默认扩展名
pub fn with_default_extension(path: PathBuf, extension: &str) -> PathBuf {
    let has_extension = path.extension().is_some_and(|ext| !ext.is_empty());
    if has_extension || path.file_name().is_none() {
        return path;
    }
    path.with_extension(extension)
}

pub trait DialogProvider {
    fn confirm_discard(&mut self, title: &str, message: &str) -> DiscardAnswer;

    /// `None` 表示用户取消
    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;

    /// `None` 表示用户取消；返回的路径已补全默认扩展名
    fn pick_save_path(
        &mut self,
        filters: &[FileFilter],
        default_extension: &str,
        suggested_name: Option<&str>,
    ) -> Option<PathBuf>;

    fn show_error(&mut self, title: &str, message: &str);
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/dialog.rs"]
mod tests;
