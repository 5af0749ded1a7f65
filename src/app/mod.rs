//! 应用层：把 kernel 的 Effect 落到文件系统、对话框和窗口上

pub mod shell;

#[cfg(feature = "gui")]
pub mod gui;

pub use shell::{EditorShell, ShellOutput};
