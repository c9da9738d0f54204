//! Injection-detection policies for free-text form input
//!
//! Two historical strategies exist for the same check: a literal token
//! denylist and a set of SQL-injection signature patterns. Both are kept
//! behind one trait so the form validators can be configured with either.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tokens treated as unsafe in free-text input. `--` is a two-character
/// token; a lone `-` is allowed.
pub const FORBIDDEN_TOKENS: &[&str] = &[
    ";", "--", "'", "\"", "=", "<", ">", "|", "&", "$", "@", "%", "^", "*", "(", ")", "[", "]",
    "{", "}", "`", "~",
];

const SQL_PATTERN_SOURCES: &[&str] = &[
    // comment markers and statement separators
    r"(--|/\*|\*/|;)",
    // assignment into a quoted value
    r#"=\s*['"]"#,
    // quoted OR / UNION clauses
    r#"(?i)['"]\s*(or|and)\b"#,
    r#"(?i)['"]\s*union\b"#,
    // bare SQL keywords
    r"(?i)\b(select|insert|update|delete|drop|union|exec|truncate|alter)\b",
];

static SQL_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SQL_PATTERN_SOURCES
        .iter()
        .filter_map(|source| Regex::new(source).ok().map(|re| (re, *source)))
        .collect()
});

/// Strategy for detecting unsafe content in a single input string.
pub trait InjectionPolicy: Send + Sync {
    /// Returns the matched token or pattern when the input is unsafe.
    fn scan(&self, input: &str) -> Option<&'static str>;

    /// User-facing message shown when `scan` finds a match.
    fn rejection_message(&self) -> &'static str;
}

/// Literal token denylist, substring match.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharDenylist;

impl InjectionPolicy for CharDenylist {
    fn scan(&self, input: &str) -> Option<&'static str> {
        FORBIDDEN_TOKENS.iter().find(|token| input.contains(*token)).copied()
    }

    fn rejection_message(&self) -> &'static str {
        "Input contains forbidden characters."
    }
}

/// SQL-injection signature patterns, case-insensitive.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlPatterns;

impl InjectionPolicy for SqlPatterns {
    fn scan(&self, input: &str) -> Option<&'static str> {
        SQL_PATTERNS.iter().find(|(re, _)| re.is_match(input)).map(|(_, source)| *source)
    }

    fn rejection_message(&self) -> &'static str {
        "Input contains potentially harmful characters."
    }
}

/// Which detection strategy the form validators should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    #[default]
    Denylist,
    SqlPatterns,
}

impl PolicyKind {
    pub fn policy(self) -> &'static dyn InjectionPolicy {
        static DENYLIST: CharDenylist = CharDenylist;
        static PATTERNS: SqlPatterns = SqlPatterns;
        match self {
            PolicyKind::Denylist => &DENYLIST,
            PolicyKind::SqlPatterns => &PATTERNS,
        }
    }
}
