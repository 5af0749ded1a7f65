//! Service ports: traits + data contracts.

pub mod config;
pub mod dialog;
pub mod file;
pub mod settings;

pub use config::EditorConfig;
pub use dialog::{DialogProvider, DiscardAnswer, FileFilter};
pub use file::{FileError, FileProvider, Result as FileResult};
pub use settings::{EditorSettings, KeybindingRule, Settings};
