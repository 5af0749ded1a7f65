//! EditorShell：同步执行 Effect 的调度循环
//!
//! 对话框是模态的、文件读写是同步的，所以一次 dispatch 会一直运行到
//! 没有后续 Action 为止；只有窗口相关的 Effect（标题、退出、剪贴板透传）
//! 交还给调用者。

use std::collections::VecDeque;
use std::time::Instant;

use crate::core::Command;
use crate::kernel::services::ports::dialog::{default_filters, DEFAULT_EXTENSION};
use crate::kernel::services::ports::{DialogProvider, FileProvider};
use crate::kernel::{Action, AppState, EditPassthrough, Effect, Store};

/// 需要由窗口层处理的结果
#[derive(Debug, Default)]
pub struct ShellOutput {
    pub state_changed: bool,
    pub title: Option<String>,
    pub passthrough: Vec<EditPassthrough>,
    pub quit: bool,
}

pub struct EditorShell<F, D> {
    store: Store,
    files: F,
    dialogs: D,
}

impl<F: FileProvider, D: DialogProvider> EditorShell<F, D> {
    pub fn new(state: AppState, files: F, dialogs: D) -> Self {
        Self {
            store: Store::new(state),
            files,
            dialogs,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn run_command(&mut self, command: Command) -> ShellOutput {
        self.dispatch(Action::RunCommand(command))
    }

    pub fn text_edited(&mut self, text: String) -> ShellOutput {
        self.dispatch(Action::TextEdited {
            text,
            now: Instant::now(),
        })
    }

    pub fn dispatch(&mut self, action: Action) -> ShellOutput {
        let mut output = ShellOutput::default();
        let mut queue = VecDeque::from([action]);

        while let Some(action) = queue.pop_front() {
            let result = self.store.dispatch(action);
            output.state_changed |= result.state_changed;
            for effect in result.effects {
                if let Some(next) = self.execute(effect, &mut output) {
                    queue.push_back(next);
                }
            }
        }

        output
    }

    fn execute(&mut self, effect: Effect, output: &mut ShellOutput) -> Option<Action> {
        match effect {
            Effect::PromptDiscard { title, message } => Some(Action::DiscardAnswered(
                self.dialogs.confirm_discard(title, &message),
            )),
            Effect::PickOpenPath => Some(Action::OpenPathPicked(
                self.dialogs.pick_open_path(&default_filters()),
            )),
            Effect::PickSavePath { suggested_name } => {
                Some(Action::SavePathPicked(self.dialogs.pick_save_path(
                    &default_filters(),
                    DEFAULT_EXTENSION,
                    suggested_name.as_deref(),
                )))
            }
            Effect::LoadFile(path) => match self.files.read_file(&path) {
                Ok(content) => Some(Action::FileLoaded { path, content }),
                Err(e) => Some(Action::FileLoadFailed {
                    path,
                    error: e.to_string(),
                }),
            },
            Effect::WriteFile {
                path,
                content,
                revision,
            } => match self.files.write_file(&path, &content) {
                Ok(()) => Some(Action::FileWritten { path, revision }),
                Err(e) => Some(Action::FileWriteFailed {
                    path,
                    error: e.to_string(),
                }),
            },
            Effect::ShowError(error) => {
                self.dialogs.show_error(error.title(), error.message());
                None
            }
            Effect::SetTitle(title) => {
                output.title = Some(title);
                None
            }
            Effect::Passthrough(op) => {
                output.passthrough.push(op);
                None
            }
            Effect::Quit => {
                output.quit = true;
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/shell.rs"]
mod tests;
