//! zpad - 单文件桌面文本编辑器库
//!
//! 模块结构：
//! - core: 命令与按键（Command, Key）
//! - models: 数据模型（EditHistory）
//! - kernel: 无界面的状态机（State, Action, Effect, Store）与服务端口/适配器
//! - app: 应用层（EditorShell 调度循环，gui 特性下的 eframe 窗口）

pub mod app;
pub mod core;
pub mod kernel;
pub mod models;
