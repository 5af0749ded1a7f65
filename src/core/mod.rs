//! 核心抽象
//!
//! - Command: 语义命令（菜单与快捷键共用）
//! - Event: 与 GUI 工具包无关的按键表示

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{Key, KeyCode, KeyModifiers};
