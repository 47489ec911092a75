// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use tgcached::error::InlineError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        InlineError::MissingRequiredField { field: "id" },
        InlineError::InvalidResultId { len: 70 },
        InlineError::InvalidParseMode("bbcode".to_string()),
        InlineError::Config("bad file".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_missing_field_names_the_field() {
    let error = InlineError::MissingRequiredField { field: "gif_file_id" };
    assert!(format!("{}", error).contains("gif_file_id"));
    assert_eq!(error.field(), Some("gif_file_id"));
}

#[test]
fn test_invalid_result_id_reports_length() {
    let error = InlineError::InvalidResultId { len: 70 };
    assert!(format!("{}", error).contains("70"));
    assert_eq!(error.field(), Some("id"));
}

#[test]
fn test_json_error_conversion() {
    let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
    let error: InlineError = parse.unwrap_err().into();
    assert!(matches!(error, InlineError::Json(_)));
    assert_eq!(error.field(), None);
}
