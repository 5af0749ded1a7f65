//! 命令系统：语义命令定义
//!
//! 菜单项与快捷键都只产生 Command，具体行为由 kernel 决定。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 文件操作 ====================
    NewFile,
    OpenFile,
    Save,
    SaveAs,
    Quit,

    // ==================== 编辑操作 ====================
    Undo,
    Redo,
    Cut,
    Copy,
    Paste,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Command::NewFile,
        Command::OpenFile,
        Command::Save,
        Command::SaveAs,
        Command::Quit,
        Command::Undo,
        Command::Redo,
        Command::Cut,
        Command::Copy,
        Command::Paste,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::NewFile => "newFile",
            Command::OpenFile => "openFile",
            Command::Save => "save",
            Command::SaveAs => "saveAs",
            Command::Quit => "quit",
            Command::Undo => "undo",
            Command::Redo => "redo",
            Command::Cut => "cut",
            Command::Copy => "copy",
            Command::Paste => "paste",
        }
    }

    /// Accepts the canonical name plus a few aliases used in settings files.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if let Some(cmd) = Self::ALL.iter().find(|c| c.name() == name) {
            return Some(*cmd);
        }
        match name.to_ascii_lowercase().as_str() {
            "new" | "newfile" => Some(Command::NewFile),
            "open" | "openfile" => Some(Command::OpenFile),
            "saveas" | "save_as" => Some(Command::SaveAs),
            "exit" | "quit" => Some(Command::Quit),
            _ => None,
        }
    }

    /// Cut/Copy/Paste 直接交给文本控件的原生事件处理
    pub fn is_clipboard_command(&self) -> bool {
        matches!(self, Command::Cut | Command::Copy | Command::Paste)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
