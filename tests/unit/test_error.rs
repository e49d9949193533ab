use wfpatch::core::error::AppError;
use wfpatch::core::types::{ErrorCategory, ErrorSeverity};

#[test]
fn new_error_carries_category_and_message() {
    let error = AppError::new(ErrorCategory::ValidationError, "node has no parameters");
    assert_eq!(error.category, ErrorCategory::ValidationError);
    assert_eq!(error.message, "node has no parameters");
    assert_eq!(error.severity(), ErrorSeverity::Error);
}

#[test]
fn generated_codes_are_unique_and_overridable() {
    let first = AppError::new(ErrorCategory::IoError, "read failed");
    let second = AppError::new(ErrorCategory::IoError, "read failed");
    assert!(first.code.starts_with("ERR-"));
    assert_ne!(first.code, second.code);

    let coded = first.with_code("WF-READ");
    assert_eq!(coded.code, "WF-READ");
}

#[test]
fn context_appears_in_display_output() {
    let error = AppError::new(ErrorCategory::SerializationError, "parse failed")
        .with_context("wf02_full.json");
    let rendered = error.to_string();
    assert!(rendered.contains("SerializationError"));
    assert!(rendered.contains("parse failed"));
    assert!(rendered.contains("wf02_full.json"));
}

#[test]
fn io_errors_convert_with_io_category() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let error = AppError::from(io);
    assert_eq!(error.category, ErrorCategory::IoError);
    assert!(error.message.contains("no such file"));
}

#[test]
fn unknown_category_is_informational() {
    let error = AppError::new(ErrorCategory::Unknown, "odd state");
    assert_eq!(error.severity(), ErrorSeverity::Info);
}

#[test]
fn anyhow_conversion_recovers_the_original_app_error() {
    let original = AppError::new(ErrorCategory::ValidationError, "bad node shape");
    let through: anyhow::Error = original.into();
    let recovered = AppError::from(through);
    assert_eq!(recovered.category, ErrorCategory::ValidationError);
    assert_eq!(recovered.message, "bad node shape");
}

#[test]
fn foreign_anyhow_errors_become_internal() {
    let foreign = anyhow::anyhow!("something else broke");
    let error = AppError::from(foreign);
    assert_eq!(error.category, ErrorCategory::InternalError);
    assert_eq!(error.code, "ANYHOW_ERROR");
}
