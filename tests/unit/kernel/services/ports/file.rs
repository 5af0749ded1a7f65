use super::*;

#[test]
fn test_file_error_display() {
    let err = FileError::NotFound(PathBuf::from("/test"));
    assert!(err.to_string().contains("/test"));

    let err = FileError::InvalidUtf8(PathBuf::from("/data.bin"));
    assert!(err.to_string().contains("UTF-8"));
}

#[test]
fn test_io_error_keeps_source() {
    let err: FileError = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied").into();
    assert_eq!(err.to_string(), "Permission denied");
    assert!(std::error::Error::source(&err).is_some());
}
