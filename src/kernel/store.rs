use std::path::PathBuf;
use std::time::Instant;

use crate::core::Command;
use crate::kernel::services::ports::DiscardAnswer;
use crate::kernel::state::{DISCARD_MESSAGE, DISCARD_TITLE};

use super::{
    AbortReason, Action, AppState, ConfirmDialogState, DiscardOutcome, EditPassthrough, Effect,
    PendingAction, SaveFlow, ShellError,
};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: true,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::TextEdited { text, now } => self.text_edited(text, now),
            Action::DiscardAnswered(answer) => self.discard_answered(answer),
            Action::OpenPathPicked(None) => DispatchResult::unchanged(),
            Action::OpenPathPicked(Some(path)) => DispatchResult {
                effects: vec![Effect::LoadFile(path)],
                state_changed: false,
            },
            Action::SavePathPicked(path) => self.save_path_picked(path),
            Action::FileLoaded { path, content } => self.file_loaded(path, content),
            Action::FileLoadFailed { path, error } => {
                tracing::warn!(path = %path.display(), error = %error, "open failed");
                DispatchResult {
                    effects: vec![Effect::ShowError(ShellError::OpenFailed {
                        path,
                        message: error,
                    })],
                    state_changed: false,
                }
            }
            Action::FileWritten { path, revision } => self.file_written(path, revision),
            Action::FileWriteFailed { path, error } => self.file_write_failed(path, error),
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        tracing::debug!(command = cmd.name(), "run command");
        match cmd {
            Command::NewFile => self.guard(PendingAction::NewFile),
            Command::OpenFile => self.guard(PendingAction::OpenFile),
            Command::Quit => self.guard(PendingAction::Exit),
            Command::Save => {
                if self.state.ui.is_busy() {
                    return DispatchResult::unchanged();
                }
                self.begin_save(None)
            }
            Command::SaveAs => {
                if self.state.ui.is_busy() {
                    return DispatchResult::unchanged();
                }
                self.begin_save_as(None)
            }
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Cut => DispatchResult {
                effects: vec![Effect::Passthrough(EditPassthrough::Cut)],
                state_changed: false,
            },
            Command::Copy => DispatchResult {
                effects: vec![Effect::Passthrough(EditPassthrough::Copy)],
                state_changed: false,
            },
            Command::Paste => DispatchResult {
                effects: vec![Effect::Passthrough(EditPassthrough::Paste)],
                state_changed: false,
            },
        }
    }

    // ==================== 丢弃确认 ====================

    fn guard(&mut self, pending: PendingAction) -> DispatchResult {
        if self.state.ui.is_busy() {
            tracing::debug!(?pending, "ignored while a dialog is pending");
            return DispatchResult::unchanged();
        }

        if !self.state.document.modified {
            self.state.ui.last_discard = Some(DiscardOutcome::Clean);
            return self.run_pending(pending);
        }

        self.state.ui.confirm_dialog = ConfirmDialogState {
            visible: true,
            message: DISCARD_MESSAGE.to_string(),
            on_confirm: Some(pending),
        };
        DispatchResult::changed(vec![Effect::PromptDiscard {
            title: DISCARD_TITLE,
            message: DISCARD_MESSAGE.to_string(),
        }])
    }

    fn discard_answered(&mut self, answer: DiscardAnswer) -> DispatchResult {
        if !self.state.ui.confirm_dialog.visible {
            return DispatchResult::unchanged();
        }
        let dialog = std::mem::take(&mut self.state.ui.confirm_dialog);
        let Some(pending) = dialog.on_confirm else {
            return DispatchResult::changed(Vec::new());
        };

        match answer {
            DiscardAnswer::Cancel => {
                self.state.ui.last_discard = Some(DiscardOutcome::Aborted(AbortReason::Cancelled));
                tracing::info!(?pending, "discard cancelled");
                DispatchResult::changed(Vec::new())
            }
            DiscardAnswer::Discard => {
                self.state.ui.last_discard = Some(DiscardOutcome::Discarded);
                tracing::info!(?pending, "unsaved changes discarded");
                let mut result = self.run_pending(pending);
                result.state_changed = true;
                result
            }
            DiscardAnswer::Save => self.begin_save(Some(pending)),
        }
    }

    fn run_pending(&mut self, pending: PendingAction) -> DispatchResult {
        match pending {
            PendingAction::NewFile => self.reset_document(),
            PendingAction::OpenFile => DispatchResult {
                effects: vec![Effect::PickOpenPath],
                state_changed: false,
            },
            PendingAction::Exit => {
                self.state.ui.should_quit = true;
                tracing::info!("quit");
                DispatchResult::changed(vec![Effect::Quit])
            }
        }
    }

    // ==================== 文档 ====================

    fn refresh_title(&mut self) -> Effect {
        let title = self.state.document.title();
        self.state.ui.title = title.clone();
        Effect::SetTitle(title)
    }

    fn reset_document(&mut self) -> DispatchResult {
        let doc = &mut self.state.document;
        doc.text.clear();
        doc.path = None;
        doc.modified = false;
        doc.revision += 1;
        self.state.history.clear();
        tracing::info!("new document");
        DispatchResult::changed(vec![self.refresh_title()])
    }

    fn file_loaded(&mut self, path: PathBuf, content: String) -> DispatchResult {
        tracing::info!(path = %path.display(), bytes = content.len(), "file opened");
        let doc = &mut self.state.document;
        doc.text = content;
        doc.path = Some(path);
        doc.modified = false;
        doc.revision += 1;
        self.state.history.clear();
        DispatchResult::changed(vec![self.refresh_title()])
    }

    fn text_edited(&mut self, text: String, now: Instant) -> DispatchResult {
        let doc = &mut self.state.document;
        if doc.text == text {
            return DispatchResult::unchanged();
        }
        self.state.history.record(&doc.text, now);
        doc.text = text;
        doc.modified = true;
        doc.revision += 1;
        DispatchResult::changed(Vec::new())
    }

    fn undo(&mut self) -> DispatchResult {
        let doc = &mut self.state.document;
        let Some(prev) = self.state.history.undo(&doc.text) else {
            return DispatchResult::unchanged();
        };
        doc.text = prev;
        doc.modified = true;
        doc.revision += 1;
        DispatchResult::changed(Vec::new())
    }

    fn redo(&mut self) -> DispatchResult {
        let doc = &mut self.state.document;
        let Some(next) = self.state.history.redo(&doc.text) else {
            return DispatchResult::unchanged();
        };
        doc.text = next;
        doc.modified = true;
        doc.revision += 1;
        DispatchResult::changed(Vec::new())
    }

    // ==================== 保存 ====================

    fn write_effect(&self, path: PathBuf) -> Effect {
        Effect::WriteFile {
            path,
            content: self.state.document.text.clone(),
            revision: self.state.document.revision,
        }
    }

    fn begin_save(&mut self, resume: Option<PendingAction>) -> DispatchResult {
        match self.state.document.path.clone() {
            Some(path) => {
                self.state.ui.save_flow = Some(SaveFlow { resume });
                DispatchResult::changed(vec![self.write_effect(path)])
            }
            None => self.begin_save_as(resume),
        }
    }

    fn begin_save_as(&mut self, resume: Option<PendingAction>) -> DispatchResult {
        self.state.ui.save_flow = Some(SaveFlow { resume });
        let suggested_name = self
            .state
            .document
            .path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned());
        DispatchResult::changed(vec![Effect::PickSavePath { suggested_name }])
    }

    fn save_path_picked(&mut self, path: Option<PathBuf>) -> DispatchResult {
        if self.state.ui.save_flow.is_none() {
            return DispatchResult::unchanged();
        }
        match path {
            None => self.finish_save(),
            Some(path) => {
                self.state.document.path = Some(path.clone());
                let title = self.refresh_title();
                DispatchResult::changed(vec![title, self.write_effect(path)])
            }
        }
    }

    fn file_written(&mut self, path: PathBuf, revision: u64) -> DispatchResult {
        let doc = &mut self.state.document;
        // 只有写出的正是当前内容时才算保存完成
        if doc.revision == revision && doc.path.as_deref() == Some(path.as_path()) {
            doc.modified = false;
        }
        tracing::info!(path = %path.display(), "file saved");

        let mut effects = vec![self.refresh_title()];
        effects.extend(self.finish_save().effects);
        DispatchResult::changed(effects)
    }

    fn file_write_failed(&mut self, path: PathBuf, error: String) -> DispatchResult {
        tracing::warn!(path = %path.display(), error = %error, "save failed");
        let mut effects = vec![Effect::ShowError(ShellError::SaveFailed {
            path,
            message: error,
        })];
        effects.extend(self.finish_save().effects);
        DispatchResult::changed(effects)
    }

    fn finish_save(&mut self) -> DispatchResult {
        let Some(flow) = self.state.ui.save_flow.take() else {
            return DispatchResult::unchanged();
        };
        let Some(resume) = flow.resume else {
            return DispatchResult::changed(Vec::new());
        };

        if self.state.document.modified {
            self.state.ui.last_discard =
                Some(DiscardOutcome::Aborted(AbortReason::SaveIncomplete));
            tracing::info!(pending = ?resume, "save incomplete, action aborted");
            return DispatchResult::changed(Vec::new());
        }

        self.state.ui.last_discard = Some(DiscardOutcome::Saved);
        let mut result = self.run_pending(resume);
        result.state_changed = true;
        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
