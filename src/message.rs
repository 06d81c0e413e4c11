//! Localized validation messages.
//!
//! This module owns the fixed rule vocabulary and renders a field label
//! (plus an optional rule parameter) into a Japanese error message. It has
//! no state and no side effects; the same inputs always produce the same
//! string.

/// Fixed summary used for every schema-level failure.
///
/// Deliberately rule-independent: the per-field map carries the specifics,
/// this string is the headline.
pub const VALIDATION_FAILED_MESSAGE: &str = "バリデーションエラーが発生しました";

/// Renders a canned error message for a recognized rule.
///
/// The rule vocabulary is closed: `required`, `minLength`, `maxLength`,
/// `pattern` and `email`. Any other rule returns `None`, never an empty
/// string and never a panic; callers must treat `None` as "no canned
/// message available" and supply their own. The two length rules
/// interpolate `param` and also return `None` when it is missing.
///
/// # Example
///
/// ```rust
/// use kensho::validation_message;
///
/// assert_eq!(
///     validation_message("氏名", "required", None),
///     Some("氏名は必須です".to_string())
/// );
/// assert_eq!(
///     validation_message("氏名", "minLength", Some(2)),
///     Some("氏名は2文字以上で入力してください".to_string())
/// );
/// assert_eq!(validation_message("氏名", "unknown", None), None);
/// ```
pub fn validation_message(label: &str, rule: &str, param: Option<usize>) -> Option<String> {
    match rule {
        "required" => Some(required(label)),
        "minLength" => param.map(|min| min_length(label, min)),
        "maxLength" => param.map(|max| max_length(label, max)),
        "pattern" => Some(pattern(label)),
        "email" => Some(email(label)),
        _ => None,
    }
}

pub(crate) fn required(label: &str) -> String {
    format!("{label}は必須です")
}

pub(crate) fn min_length(label: &str, min: usize) -> String {
    format!("{label}は{min}文字以上で入力してください")
}

pub(crate) fn max_length(label: &str, max: usize) -> String {
    format!("{label}は{max}文字以内で入力してください")
}

pub(crate) fn pattern(label: &str) -> String {
    format!("{label}の形式が正しくありません")
}

pub(crate) fn email(label: &str) -> String {
    format!("{label}は正しいメールアドレスの形式で入力してください")
}
