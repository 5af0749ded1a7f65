//! 原生模态对话框（rfd）

use crate::kernel::services::ports::dialog::with_default_extension;
use crate::kernel::services::ports::{DialogProvider, DiscardAnswer, FileFilter};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::path::{Path, PathBuf};

#[derive(Default)]
pub struct NativeDialogs {
    last_dir: Option<PathBuf>,
}

impl NativeDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    fn file_dialog(&self, filters: &[FileFilter]) -> FileDialog {
        let mut dialog = FileDialog::new();
        for filter in filters {
            dialog = dialog.add_filter(filter.name, filter.extensions);
        }
        if let Some(dir) = &self.last_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog
    }

    fn remember_dir(&mut self, path: &Path) {
        self.last_dir = path.parent().map(Path::to_path_buf);
    }
}

impl DialogProvider for NativeDialogs {
    fn confirm_discard(&mut self, title: &str, message: &str) -> DiscardAnswer {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNoCancel)
            .show();
        match result {
            MessageDialogResult::Yes => DiscardAnswer::Save,
            MessageDialogResult::No => DiscardAnswer::Discard,
            _ => DiscardAnswer::Cancel,
        }
    }

    fn pick_open_path(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        let path = self.file_dialog(filters).pick_file()?;
        self.remember_dir(&path);
        Some(path)
    }

    fn pick_save_path(
        &mut self,
        filters: &[FileFilter],
        default_extension: &str,
        suggested_name: Option<&str>,
    ) -> Option<PathBuf> {
        let mut dialog = self.file_dialog(filters);
        if let Some(name) = suggested_name {
            dialog = dialog.set_file_name(name);
        }
        let path = with_default_extension(dialog.save_file()?, default_extension);
        self.remember_dir(&path);
        Some(path)
    }

    fn show_error(&mut self, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
