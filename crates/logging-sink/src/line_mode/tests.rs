use super::LineMode;

#[test]
fn only_with_newline_appends() {
    assert!(LineMode::WithNewline.append_newline());
    assert!(!LineMode::WithoutNewline.append_newline());
}

#[test]
fn default_appends_newline() {
    assert_eq!(LineMode::default(), LineMode::WithNewline);
}

#[cfg(feature = "serde")]
#[test]
fn line_mode_serializes_as_snake_case() {
    let json = serde_json::to_string(&LineMode::WithoutNewline).unwrap();
    assert_eq!(json, "\"without_newline\"");
    let decoded: LineMode = serde_json::from_str("\"with_newline\"").unwrap();
    assert_eq!(decoded, LineMode::WithNewline);
}
