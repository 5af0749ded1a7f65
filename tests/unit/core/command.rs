use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::NewFile.name(), "newFile");
    assert_eq!(Command::SaveAs.name(), "saveAs");
    assert_eq!(Command::Quit.name(), "quit");
}

#[test]
fn test_from_name_roundtrips_every_command() {
    for cmd in Command::ALL {
        assert_eq!(Command::from_name(cmd.name()), Some(cmd));
    }
}

#[test]
fn test_from_name_aliases() {
    assert_eq!(Command::from_name("exit"), Some(Command::Quit));
    assert_eq!(Command::from_name(" save_as "), Some(Command::SaveAs));
    assert_eq!(Command::from_name("New"), Some(Command::NewFile));
    assert_eq!(Command::from_name("format"), None);
}

#[test]
fn test_is_clipboard_command() {
    assert!(Command::Cut.is_clipboard_command());
    assert!(Command::Paste.is_clipboard_command());
    assert!(!Command::Undo.is_clipboard_command());
    assert!(!Command::Save.is_clipboard_command());
}
