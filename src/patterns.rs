//! Named patterns shared across forms.
//!
//! A fixed table of compiled regular expressions consumed by
//! [`validate_pattern`](crate::validate_pattern), by
//! [`StringSchema`](crate::StringSchema), and by form authors directly.
//! Each pattern is compiled once on first use.

use once_cell::sync::Lazy;
use regex::Regex;

/// Letters and digits only, no symbols or whitespace.
///
/// Accepts `abc123`; rejects `abc-123` and the empty string.
pub static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+$").expect("ALPHANUMERIC pattern must compile")
});

/// Standard `local@domain` email shape.
///
/// Accepts `tanaka@example.com`; rejects a bare string with no `@` or
/// domain, such as `invalid-email`.
pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL pattern must compile")
});

/// Native-script names, or ASCII-letter names with spaces.
///
/// Accepts `田中太郎`, `たなかたろう`, `タナカタロウ` and `John Smith`;
/// rejects embedded symbols such as `田中@太郎`.
pub static JAPANESE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ぁ-んァ-ヶー一-龥々a-zA-Z\s]+$").expect("JAPANESE_NAME pattern must compile")
});

/// Japanese-style local phone numbers, hyphenated or not.
///
/// Accepts `03-1234-5678`, `0312345678`, `090-1234-5678` and
/// `09012345678`; rejects a trailing stray symbol such as
/// `03-1234-5678@`.
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0\d{1,4}-?\d{1,4}-?\d{3,4}$").expect("PHONE pattern must compile")
});
