//! Service adapters: OS specific implementations.

pub mod file;
pub mod keybinding;
pub mod paths;
pub mod settings;

#[cfg(feature = "gui")]
pub mod clipboard;
#[cfg(feature = "gui")]
pub mod dialog;

pub use file::LocalFileProvider;
pub use keybinding::KeybindingService;
pub use paths::{ensure_log_dir, get_config_dir, get_log_dir, get_settings_path};
pub use settings::{load_settings, load_settings_from, parse_keybinding};

#[cfg(feature = "gui")]
pub use clipboard::{ClipboardError, ClipboardService};
#[cfg(feature = "gui")]
pub use dialog::NativeDialogs;
