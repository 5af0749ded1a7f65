use std::path::{Path, PathBuf};

use crate::kernel::services::ports::EditorConfig;
use crate::models::EditHistory;

pub const APP_NAME: &str = "Simple Python Text Editor";
pub const UNTITLED: &str = "Untitled";

pub const DISCARD_TITLE: &str = "Unsaved changes";
pub const DISCARD_MESSAGE: &str = "You have unsaved changes. Save before continuing?";

/// 窗口标题：`<文件名或 Untitled> - Simple Python Text Editor`
pub fn window_title(path: Option<&Path>) -> String {
    let name = path
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNTITLED.to_string());
    format!("{} - {}", name, APP_NAME)
}

#[derive(Debug, Clone, Default)]
pub struct DocumentState {
    pub text: String,
    pub path: Option<PathBuf>,
    pub modified: bool,
    /// 每次整体替换文本时递增
    pub revision: u64,
}

impl DocumentState {
    pub fn title(&self) -> String {
        window_title(self.path.as_deref())
    }
}

/// 确认丢弃之后要继续执行的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewFile,
    OpenFile,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// 用户在提示框中选择了 Cancel
    Cancelled,
    /// 选择了 Save，但保存没有完成（另存为被取消或写入失败）
    SaveIncomplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardOutcome {
    /// 没有未保存的修改，无需提示
    Clean,
    Saved,
    Discarded,
    Aborted(AbortReason),
}

impl DiscardOutcome {
    pub fn proceeds(&self) -> bool {
        !matches!(self, DiscardOutcome::Aborted(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogState {
    pub visible: bool,
    pub message: String,
    pub on_confirm: Option<PendingAction>,
}

/// 进行中的保存；`resume` 为保存完成后要继续的操作
#[derive(Debug, Clone, Default)]
pub struct SaveFlow {
    pub resume: Option<PendingAction>,
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub title: String,
    pub confirm_dialog: ConfirmDialogState,
    pub save_flow: Option<SaveFlow>,
    pub last_discard: Option<DiscardOutcome>,
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            title: window_title(None),
            confirm_dialog: ConfirmDialogState::default(),
            save_flow: None,
            last_discard: None,
            should_quit: false,
        }
    }
}

impl UiState {
    /// 有模态流程进行中时忽略新的文件命令
    pub fn is_busy(&self) -> bool {
        self.confirm_dialog.visible || self.save_flow.is_some()
    }
}

#[derive(Debug)]
pub struct AppState {
    pub document: DocumentState,
    pub history: EditHistory,
    pub ui: UiState,
    pub config: EditorConfig,
}

impl AppState {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            document: DocumentState::default(),
            history: EditHistory::new(config.history_config()),
            ui: UiState::default(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
