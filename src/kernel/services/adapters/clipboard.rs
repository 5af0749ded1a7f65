//! 剪贴板服务
//!
//! 菜单里的 Paste 需要主动读取系统剪贴板；Cut/Copy 由文本控件写出。

use arboard::Clipboard;

const PASTE_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB

pub struct ClipboardService {
    clipboard: Option<Clipboard>,
}

#[derive(Debug)]
pub enum ClipboardError {
    NotAvailable,
    GetFailed(String),
    TooLarge(usize),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::NotAvailable => write!(f, "clipboard not available"),
            ClipboardError::GetFailed(e) => write!(f, "failed to read clipboard: {}", e),
            ClipboardError::TooLarge(size) => {
                write!(f, "clipboard text too large ({} MB, limit 10 MB)", size / 1024 / 1024)
            }
        }
    }
}

impl std::error::Error for ClipboardError {}

impl ClipboardService {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                tracing::warn!(error = %e, "system clipboard unavailable");
                None
            }
        };
        Self { clipboard }
    }

    pub fn is_available(&self) -> bool {
        self.clipboard.is_some()
    }

    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or(ClipboardError::NotAvailable)?;

        let text = clipboard
            .get_text()
            .map_err(|e| ClipboardError::GetFailed(e.to_string()))?;

        if text.len() > PASTE_MAX_SIZE {
            return Err(ClipboardError::TooLarge(text.len()));
        }

        Ok(text)
    }
}

impl Default for ClipboardService {
    fn default() -> Self {
        Self::new()
    }
}
