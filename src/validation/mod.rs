//! Field-level validation predicates
//!
//! Pure string checks shared by the per-form validators. All constant
//! tables and their compiled regexes are process-wide immutables
//! initialized once.

pub mod policy;

pub use policy::{CharDenylist, InjectionPolicy, PolicyKind, SqlPatterns, FORBIDDEN_TOKENS};

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

/// Maximum accepted upload size for case files.
pub const MAX_UPLOAD_BYTES: u64 = 8 * 1024 * 1024;

/// Extensions accepted for case-file uploads.
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "txt", "pdf", "png", "jpg", "jpeg", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "zip", "rar",
];

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date regex is valid")
});

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-1]?[0-9]|2[0-3]):[0-5][0-9]$").expect("time regex is valid")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// `YYYY-MM-DD`, zero-padded, and a real calendar date.
pub fn is_valid_date(value: &str) -> bool {
    DATE_RE.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// `H:MM` or `HH:MM`, 24-hour clock.
pub fn is_valid_time(value: &str) -> bool {
    TIME_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Between 1 and `max` characters inclusive. Counts characters, not bytes.
pub fn is_valid_range(value: &str, max: usize) -> bool {
    let length = value.chars().count();
    length >= 1 && length <= max
}

/// Non-empty ASCII digits only.
pub fn is_number(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// The file name carries an extension from the upload allow-list.
pub fn is_allowed_file(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, extension)) => {
            let extension = extension.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&extension.as_str())
        }
        None => false,
    }
}

pub fn is_file_size_allowed(size: u64, max: u64) -> bool {
    size <= max
}

/// Random password drawn from graphic ASCII minus the forbidden tokens.
pub fn generate_random_password(length: usize) -> String {
    static ALLOWED_CHARS: Lazy<Vec<char>> = Lazy::new(|| {
        (b'!'..=b'~')
            .map(char::from)
            .filter(|c| !FORBIDDEN_TOKENS.contains(&c.to_string().as_str()))
            .collect()
    });

    let mut rng = rand::rng();
    (0..length).map(|_| ALLOWED_CHARS[rng.random_range(0..ALLOWED_CHARS.len())]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("2024-01-15", true; "padded date")]
    #[test_case("2024-1-15", false; "unpadded month")]
    #[test_case("2024-02-30", false; "impossible date")]
    #[test_case("2024-13-01", false; "impossible month")]
    #[test_case("15-01-2024", false; "wrong field order")]
    #[test_case("", false; "empty date")]
    fn date_validation(input: &str, expected: bool) {
        assert_eq!(is_valid_date(input), expected);
    }

    #[test_case("23:59", true; "last minute of day")]
    #[test_case("00:00", true; "midnight")]
    #[test_case("9:05", true; "single digit hour")]
    #[test_case("24:00", false; "hour out of range")]
    #[test_case("9:5", false; "single digit minute")]
    #[test_case("12:60", false; "minute out of range")]
    #[test_case("12-30", false; "wrong separator")]
    fn time_validation(input: &str, expected: bool) {
        assert_eq!(is_valid_time(input), expected);
    }

    #[test_case("a@b.co", true; "short address")]
    #[test_case("clerk@example.court.gov", true; "subdomain address")]
    #[test_case("a@b", false; "missing tld")]
    #[test_case("a b@c.co", false; "whitespace in local part")]
    #[test_case("@b.co", false; "missing local part")]
    fn email_validation(input: &str, expected: bool) {
        assert_eq!(is_valid_email(input), expected);
    }

    #[test]
    fn range_counts_characters_inclusive() {
        assert!(!is_valid_range("", 100));
        assert!(is_valid_range("a", 100));
        assert!(is_valid_range(&"a".repeat(100), 100));
        assert!(!is_valid_range(&"a".repeat(101), 100));
        // characters, not bytes
        assert!(is_valid_range(&"é".repeat(100), 100));
    }

    #[test]
    fn number_check_requires_digits_only() {
        assert!(is_number("42"));
        assert!(!is_number(""));
        assert!(!is_number("4a"));
        assert!(!is_number("-1"));
    }

    #[test]
    fn allowed_file_checks_last_extension() {
        assert!(is_allowed_file("filing.pdf"));
        assert!(is_allowed_file("archive.tar.ZIP"));
        assert!(!is_allowed_file("script.exe"));
        assert!(!is_allowed_file("no_extension"));
        assert!(!is_allowed_file("trailing_dot."));
    }

    #[test]
    fn file_size_limit_is_inclusive() {
        assert!(is_file_size_allowed(MAX_UPLOAD_BYTES, MAX_UPLOAD_BYTES));
        assert!(!is_file_size_allowed(MAX_UPLOAD_BYTES + 1, MAX_UPLOAD_BYTES));
    }

    #[test]
    fn generated_password_avoids_forbidden_tokens() {
        let password = generate_random_password(64);
        assert_eq!(password.chars().count(), 64);
        for c in password.chars() {
            assert!(!FORBIDDEN_TOKENS.contains(&c.to_string().as_str()), "{:?} in password", c);
        }
    }
}
