//! Integration tests for single-field validators and canned messages.

use kensho::{
    patterns, validate_max_length, validate_min_length, validate_pattern, validate_required,
    validation_message, ValidationResultExt,
};
use serde_json::json;

#[test]
fn test_required_distinguishes_empty_from_falsy() {
    // 0 and false are present values; only null and "" are empty.
    assert!(validate_required(&json!(0), "数値").is_success());
    assert!(validate_required(&json!(false), "真偽値").is_success());

    assert!(validate_required(&json!(null), "数値").is_failure());
    assert!(validate_required(&json!(""), "数値").is_failure());
}

#[test]
fn test_required_message_uses_label() {
    let result = validate_required(&json!(null), "居室番号");
    assert_eq!(result.error_message(), Some("居室番号は必須です"));
}

#[test]
fn test_min_length_accepts_any_sufficient_string() {
    for s in ["あい", "abc", "田中太郎", "    "] {
        for min in 0..=s.chars().count() {
            assert!(
                validate_min_length(s, min, "入力").is_success(),
                "expected {s:?} to satisfy min length {min}"
            );
        }
    }
}

#[test]
fn test_min_length_failure_message() {
    let result = validate_min_length("abc", 5, "パスワード");
    assert_eq!(
        result.error_message(),
        Some("パスワードは5文字以上で入力してください")
    );
}

#[test]
fn test_max_length_boundary_and_message() {
    assert!(validate_max_length("12345", 5, "備考").is_success());

    let result = validate_max_length("123456", 5, "備考");
    assert_eq!(result.error_message(), Some("備考は5文字以内で入力してください"));
}

#[test]
fn test_pattern_with_library_patterns() {
    assert!(validate_pattern("abc123", &patterns::ALPHANUMERIC, "ID", None).is_success());
    assert!(validate_pattern("tanaka@example.com", &patterns::EMAIL, "メール", None).is_success());
    assert!(validate_pattern("090-1234-5678", &patterns::PHONE, "電話番号", None).is_success());

    let result = validate_pattern("invalid-email", &patterns::EMAIL, "メール", None);
    assert_eq!(result.error_message(), Some("メールの形式が正しくありません"));
}

#[test]
fn test_pattern_custom_message_wins() {
    let result = validate_pattern(
        "090 1234 5678",
        &patterns::PHONE,
        "電話番号",
        Some("ハイフン区切りで入力してください"),
    );
    assert_eq!(result.error_message(), Some("ハイフン区切りで入力してください"));
}

#[test]
fn test_validators_never_panic_on_edge_inputs() {
    assert!(validate_min_length("", 0, "空").is_success());
    assert!(validate_max_length("", 0, "空").is_success());
    assert!(validate_pattern("", &patterns::ALPHANUMERIC, "空", None).is_failure());
    assert!(validate_required(&json!({}), "オブジェクト").is_success());
}

#[test]
fn test_message_vocabulary_is_closed() {
    assert_eq!(
        validation_message("氏名", "required", None),
        Some("氏名は必須です".to_string())
    );
    assert_eq!(
        validation_message("氏名", "minLength", Some(2)),
        Some("氏名は2文字以上で入力してください".to_string())
    );
    assert_eq!(
        validation_message("氏名", "maxLength", Some(50)),
        Some("氏名は50文字以内で入力してください".to_string())
    );
    assert!(validation_message("氏名", "pattern", None).is_some());
    assert!(validation_message("氏名", "email", None).is_some());

    // Unknown rules yield None, not an empty string and not a panic.
    assert_eq!(validation_message("氏名", "unknown", None), None);
    assert_eq!(validation_message("氏名", "min_length", None), None);
}

#[test]
fn test_validator_messages_match_templater() {
    assert_eq!(
        validate_required(&json!(null), "氏名").into_error(),
        validation_message("氏名", "required", None)
    );
    assert_eq!(
        validate_min_length("a", 2, "氏名").into_error(),
        validation_message("氏名", "minLength", Some(2))
    );
    assert_eq!(
        validate_max_length("abc", 2, "氏名").into_error(),
        validation_message("氏名", "maxLength", Some(2))
    );
    assert_eq!(
        validate_pattern("@", &patterns::ALPHANUMERIC, "氏名", None).into_error(),
        validation_message("氏名", "pattern", None)
    );
}
