use super::*;
use crate::kernel::state::APP_NAME;
use std::path::Path;
use std::time::Duration;

fn new_store() -> Store {
    Store::new(AppState::default())
}

fn type_text(store: &mut Store, text: &str) {
    let result = store.dispatch(Action::TextEdited {
        text: text.to_string(),
        now: Instant::now(),
    });
    assert!(result.state_changed);
}

fn open_document(store: &mut Store, path: &str, content: &str) {
    let _ = store.dispatch(Action::FileLoaded {
        path: PathBuf::from(path),
        content: content.to_string(),
    });
}

fn written_revision(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::WriteFile { revision, .. } => Some(*revision),
            _ => None,
        })
        .expect("write effect")
}

#[test]
fn new_file_when_clean_resets_without_prompt() {
    let mut store = new_store();
    open_document(&mut store, "/tmp/a.txt", "hello");

    let result = store.dispatch(Action::RunCommand(Command::NewFile));

    assert!(matches!(result.effects.as_slice(), [Effect::SetTitle(t)] if t == "Untitled - Simple Python Text Editor"));
    let doc = &store.state().document;
    assert!(doc.text.is_empty());
    assert!(doc.path.is_none());
    assert!(!doc.modified);
    assert_eq!(store.state().ui.last_discard, Some(DiscardOutcome::Clean));
}

#[test]
fn new_file_when_modified_prompts() {
    let mut store = new_store();
    type_text(&mut store, "draft");

    let result = store.dispatch(Action::RunCommand(Command::NewFile));

    assert!(matches!(
        result.effects.as_slice(),
        [Effect::PromptDiscard { title: "Unsaved changes", .. }]
    ));
    assert!(store.state().ui.confirm_dialog.visible);
    assert_eq!(
        store.state().ui.confirm_dialog.on_confirm,
        Some(PendingAction::NewFile)
    );
    assert_eq!(store.state().document.text, "draft");
}

#[test]
fn cancel_leaves_everything_unchanged() {
    let mut store = new_store();
    open_document(&mut store, "/tmp/a.txt", "hello");
    type_text(&mut store, "hello world");

    let _ = store.dispatch(Action::RunCommand(Command::NewFile));
    let result = store.dispatch(Action::DiscardAnswered(DiscardAnswer::Cancel));

    assert!(result.effects.is_empty());
    let doc = &store.state().document;
    assert_eq!(doc.text, "hello world");
    assert_eq!(doc.path.as_deref(), Some(Path::new("/tmp/a.txt")));
    assert!(doc.modified);
    assert!(!store.state().ui.confirm_dialog.visible);
    assert_eq!(
        store.state().ui.last_discard,
        Some(DiscardOutcome::Aborted(AbortReason::Cancelled))
    );
}

#[test]
fn discard_runs_pending_new_file() {
    let mut store = new_store();
    type_text(&mut store, "draft");

    let _ = store.dispatch(Action::RunCommand(Command::NewFile));
    let result = store.dispatch(Action::DiscardAnswered(DiscardAnswer::Discard));

    assert!(matches!(result.effects.as_slice(), [Effect::SetTitle(_)]));
    assert!(store.state().document.text.is_empty());
    assert!(!store.state().document.modified);
    assert_eq!(store.state().ui.last_discard, Some(DiscardOutcome::Discarded));
}

#[test]
fn exit_when_clean_quits() {
    let mut store = new_store();

    let result = store.dispatch(Action::RunCommand(Command::Quit));

    assert!(matches!(result.effects.as_slice(), [Effect::Quit]));
    assert!(store.state().ui.should_quit);
}

#[test]
fn exit_cancelled_keeps_app_open() {
    let mut store = new_store();
    type_text(&mut store, "draft");

    let _ = store.dispatch(Action::RunCommand(Command::Quit));
    let result = store.dispatch(Action::DiscardAnswered(DiscardAnswer::Cancel));

    assert!(!result.effects.iter().any(|e| matches!(e, Effect::Quit)));
    assert!(!store.state().ui.should_quit);
}

#[test]
fn open_when_clean_asks_for_path() {
    let mut store = new_store();

    let result = store.dispatch(Action::RunCommand(Command::OpenFile));
    assert!(matches!(result.effects.as_slice(), [Effect::PickOpenPath]));

    let result = store.dispatch(Action::OpenPathPicked(Some(PathBuf::from("/tmp/x.txt"))));
    assert!(matches!(result.effects.as_slice(), [Effect::LoadFile(p)] if p == Path::new("/tmp/x.txt")));
}

#[test]
fn open_cancelled_picker_is_noop() {
    let mut store = new_store();
    let _ = store.dispatch(Action::RunCommand(Command::OpenFile));

    let result = store.dispatch(Action::OpenPathPicked(None));

    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn file_loaded_replaces_buffer() {
    let mut store = new_store();
    type_text(&mut store, "old");
    let before = store.state().document.revision;

    let result = store.dispatch(Action::FileLoaded {
        path: PathBuf::from("/tmp/dir/hello.txt"),
        content: "hello".to_string(),
    });

    assert!(matches!(result.effects.as_slice(), [Effect::SetTitle(t)] if t == &format!("hello.txt - {}", APP_NAME)));
    let doc = &store.state().document;
    assert_eq!(doc.text, "hello");
    assert!(!doc.modified);
    assert!(doc.revision > before);
    assert!(!store.state().history.can_undo());
}

#[test]
fn file_load_failure_reports_and_keeps_state() {
    let mut store = new_store();
    type_text(&mut store, "keep me");

    let result = store.dispatch(Action::FileLoadFailed {
        path: PathBuf::from("/tmp/missing.txt"),
        error: "No such file".to_string(),
    });

    match result.effects.as_slice() {
        [Effect::ShowError(err)] => {
            assert_eq!(err.title(), "Open failed");
            assert_eq!(err.message(), "No such file");
        }
        other => panic!("unexpected effects: {:?}", other),
    }
    assert_eq!(store.state().document.text, "keep me");
    assert!(store.state().document.modified);
}

#[test]
fn save_without_path_delegates_to_save_as() {
    let mut store = new_store();
    type_text(&mut store, "draft");

    let result = store.dispatch(Action::RunCommand(Command::Save));

    assert!(matches!(
        result.effects.as_slice(),
        [Effect::PickSavePath { suggested_name: None }]
    ));
    assert!(store.state().ui.save_flow.is_some());
}

#[test]
fn save_with_path_writes_buffer() {
    let mut store = new_store();
    open_document(&mut store, "/tmp/a.txt", "hello");
    type_text(&mut store, "hello!");

    let result = store.dispatch(Action::RunCommand(Command::Save));

    match result.effects.as_slice() {
        [Effect::WriteFile { path, content, .. }] => {
            assert_eq!(path, Path::new("/tmp/a.txt"));
            assert_eq!(content, "hello!");
        }
        other => panic!("unexpected effects: {:?}", other),
    }

    let revision = written_revision(&result.effects);
    let result = store.dispatch(Action::FileWritten {
        path: PathBuf::from("/tmp/a.txt"),
        revision,
    });
    assert!(matches!(result.effects.as_slice(), [Effect::SetTitle(_)]));
    assert!(!store.state().document.modified);
    assert!(store.state().ui.save_flow.is_none());
}

#[test]
fn save_as_sets_path_then_writes() {
    let mut store = new_store();
    type_text(&mut store, "draft");

    let _ = store.dispatch(Action::RunCommand(Command::SaveAs));
    let result = store.dispatch(Action::SavePathPicked(Some(PathBuf::from("/tmp/new.txt"))));

    match result.effects.as_slice() {
        [Effect::SetTitle(title), Effect::WriteFile { path, .. }] => {
            assert_eq!(title, "new.txt - Simple Python Text Editor");
            assert_eq!(path, Path::new("/tmp/new.txt"));
        }
        other => panic!("unexpected effects: {:?}", other),
    }
    assert_eq!(
        store.state().document.path.as_deref(),
        Some(Path::new("/tmp/new.txt"))
    );
}

#[test]
fn save_as_suggests_current_name() {
    let mut store = new_store();
    open_document(&mut store, "/tmp/dir/notes.txt", "x");

    let result = store.dispatch(Action::RunCommand(Command::SaveAs));

    assert!(matches!(
        result.effects.as_slice(),
        [Effect::PickSavePath { suggested_name: Some(name) }] if name == "notes.txt"
    ));
}

#[test]
fn save_as_cancelled_is_noop() {
    let mut store = new_store();
    type_text(&mut store, "draft");

    let _ = store.dispatch(Action::RunCommand(Command::SaveAs));
    let result = store.dispatch(Action::SavePathPicked(None));

    assert!(result.effects.is_empty());
    assert!(store.state().document.path.is_none());
    assert!(store.state().document.modified);
    assert!(store.state().ui.save_flow.is_none());
}

#[test]
fn save_failure_keeps_modified() {
    let mut store = new_store();
    open_document(&mut store, "/tmp/ro.txt", "a");
    type_text(&mut store, "ab");

    let _ = store.dispatch(Action::RunCommand(Command::Save));
    let result = store.dispatch(Action::FileWriteFailed {
        path: PathBuf::from("/tmp/ro.txt"),
        error: "Permission denied".to_string(),
    });

    assert!(matches!(
        result.effects.as_slice(),
        [Effect::ShowError(ShellError::SaveFailed { .. })]
    ));
    assert!(store.state().document.modified);
    assert!(store.state().ui.save_flow.is_none());
}

#[test]
fn stale_write_does_not_clear_modified() {
    let mut store = new_store();
    open_document(&mut store, "/tmp/a.txt", "a");
    type_text(&mut store, "ab");

    let result = store.dispatch(Action::RunCommand(Command::Save));
    let revision = written_revision(&result.effects);
    type_text(&mut store, "abc");

    let _ = store.dispatch(Action::FileWritten {
        path: PathBuf::from("/tmp/a.txt"),
        revision,
    });

    assert!(store.state().document.modified);
}

#[test]
fn protocol_save_then_resumes_pending() {
    let mut store = new_store();
    open_document(&mut store, "/tmp/a.txt", "a");
    type_text(&mut store, "ab");

    let _ = store.dispatch(Action::RunCommand(Command::NewFile));
    let result = store.dispatch(Action::DiscardAnswered(DiscardAnswer::Save));
    let revision = written_revision(&result.effects);

    let result = store.dispatch(Action::FileWritten {
        path: PathBuf::from("/tmp/a.txt"),
        revision,
    });

    assert!(matches!(
        result.effects.as_slice(),
        [Effect::SetTitle(_), Effect::SetTitle(t)] if t == "Untitled - Simple Python Text Editor"
    ));
    assert!(store.state().document.text.is_empty());
    assert_eq!(store.state().ui.last_discard, Some(DiscardOutcome::Saved));
}

#[test]
fn protocol_save_as_cancelled_aborts_pending() {
    let mut store = new_store();
    type_text(&mut store, "draft");

    let _ = store.dispatch(Action::RunCommand(Command::Quit));
    let result = store.dispatch(Action::DiscardAnswered(DiscardAnswer::Save));
    assert!(matches!(
        result.effects.as_slice(),
        [Effect::PickSavePath { .. }]
    ));

    let result = store.dispatch(Action::SavePathPicked(None));

    assert!(result.effects.is_empty());
    assert!(!store.state().ui.should_quit);
    assert!(store.state().document.modified);
    assert_eq!(
        store.state().ui.last_discard,
        Some(DiscardOutcome::Aborted(AbortReason::SaveIncomplete))
    );
}

#[test]
fn protocol_save_failure_aborts_pending() {
    let mut store = new_store();
    open_document(&mut store, "/tmp/ro.txt", "a");
    type_text(&mut store, "ab");

    let _ = store.dispatch(Action::RunCommand(Command::OpenFile));
    let _ = store.dispatch(Action::DiscardAnswered(DiscardAnswer::Save));
    let result = store.dispatch(Action::FileWriteFailed {
        path: PathBuf::from("/tmp/ro.txt"),
        error: "Permission denied".to_string(),
    });

    assert!(!result
        .effects
        .iter()
        .any(|e| matches!(e, Effect::PickOpenPath)));
    assert_eq!(
        store.state().ui.last_discard,
        Some(DiscardOutcome::Aborted(AbortReason::SaveIncomplete))
    );
}

#[test]
fn guarded_commands_ignored_while_prompt_visible() {
    let mut store = new_store();
    type_text(&mut store, "draft");

    let _ = store.dispatch(Action::RunCommand(Command::NewFile));
    let result = store.dispatch(Action::RunCommand(Command::Quit));

    assert!(result.effects.is_empty());
    assert_eq!(
        store.state().ui.confirm_dialog.on_confirm,
        Some(PendingAction::NewFile)
    );
}

#[test]
fn stray_answers_are_ignored() {
    let mut store = new_store();

    let result = store.dispatch(Action::DiscardAnswered(DiscardAnswer::Discard));
    assert!(!result.state_changed);

    let result = store.dispatch(Action::SavePathPicked(Some(PathBuf::from("/tmp/x.txt"))));
    assert!(!result.state_changed);
    assert!(store.state().document.path.is_none());
}

#[test]
fn typing_sets_modified_and_identical_text_does_not() {
    let mut store = new_store();
    type_text(&mut store, "a");
    assert!(store.state().document.modified);

    let result = store.dispatch(Action::TextEdited {
        text: "a".to_string(),
        now: Instant::now(),
    });
    assert!(!result.state_changed);
}

#[test]
fn undo_redo_restore_snapshots() {
    let mut store = new_store();
    let t0 = Instant::now();
    let _ = store.dispatch(Action::TextEdited {
        text: "one".to_string(),
        now: t0,
    });
    let _ = store.dispatch(Action::TextEdited {
        text: "one two".to_string(),
        now: t0 + Duration::from_secs(5),
    });

    let _ = store.dispatch(Action::RunCommand(Command::Undo));
    assert_eq!(store.state().document.text, "one");
    let _ = store.dispatch(Action::RunCommand(Command::Undo));
    assert_eq!(store.state().document.text, "");
    let result = store.dispatch(Action::RunCommand(Command::Undo));
    assert!(!result.state_changed);

    let _ = store.dispatch(Action::RunCommand(Command::Redo));
    assert_eq!(store.state().document.text, "one");
    assert!(store.state().document.modified);
}

#[test]
fn clipboard_commands_pass_through() {
    let mut store = new_store();
    for (cmd, expected) in [
        (Command::Cut, EditPassthrough::Cut),
        (Command::Copy, EditPassthrough::Copy),
        (Command::Paste, EditPassthrough::Paste),
    ] {
        let result = store.dispatch(Action::RunCommand(cmd));
        assert!(matches!(result.effects.as_slice(), [Effect::Passthrough(p)] if *p == expected));
        assert!(!result.state_changed);
    }
}
