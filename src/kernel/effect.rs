use std::path::PathBuf;

use crate::kernel::error::ShellError;

/// 交给文本控件原生处理的剪贴板操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPassthrough {
    Cut,
    Copy,
    Paste,
}

#[derive(Debug, Clone)]
pub enum Effect {
    PromptDiscard {
        title: &'static str,
        message: String,
    },
    PickOpenPath,
    PickSavePath {
        suggested_name: Option<String>,
    },
    LoadFile(PathBuf),
    WriteFile {
        path: PathBuf,
        content: String,
        revision: u64,
    },
    ShowError(ShellError),
    SetTitle(String),
    Passthrough(EditPassthrough),
    Quit,
}
