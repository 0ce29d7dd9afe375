//! Static keyword and built-in tables for the Quartz language.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Reserved words
pub const KEYWORDS: &[&str] = &[
    "if", "else", "while", "repeat", "for", "in", "break", "continue", "return", "use", "from",
    "this", "true", "false", "null",
];

/// Built-in value types
pub const BUILT_IN_TYPES: &[&str] = &[
    "Number",
    "String",
    "Boolean",
    "Any",
    "Character",
    "Sequence",
];

/// Built-in functions
pub const BUILT_IN_FUNCTIONS: &[&str] = &["write", "read", "range"];

static KEYWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

static TYPE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BUILT_IN_TYPES.iter().copied().collect());

static FUNCTION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BUILT_IN_FUNCTIONS.iter().copied().collect());

/// Check if a name is a reserved word
#[must_use]
pub fn is_keyword(name: &str) -> bool {
    KEYWORD_SET.contains(name)
}

/// Check if a name is a built-in type
#[must_use]
pub fn is_built_in_type(name: &str) -> bool {
    TYPE_SET.contains(name)
}

/// Check if a name is a built-in function
#[must_use]
pub fn is_built_in_function(name: &str) -> bool {
    FUNCTION_SET.contains(name)
}
