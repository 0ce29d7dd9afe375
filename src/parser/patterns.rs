/// Regex patterns for Quartz source scanning
///
/// All patterns are compiled once at first use via `LazyLock`.
use std::sync::LazyLock;

use regex::Regex;

/// Quartz identifier: a letter or underscore followed by letters, digits, or
/// underscores
pub static IDENTIFIER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z_][A-Za-z0-9_]*\b").unwrap());

/// PascalCase: leading capital, no underscores
pub static PASCAL_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap());

/// snake_case: lowercase letters, digits, and underscores only
pub static SNAKE_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").unwrap());
