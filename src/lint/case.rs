//! Identifier case predicates and conversions.

use crate::parser::patterns::{PASCAL_CASE_RE, SNAKE_CASE_RE};

/// Check if a name is PascalCase (leading capital, no underscores)
#[must_use]
pub fn is_pascal_case(name: &str) -> bool {
    PASCAL_CASE_RE.is_match(name)
}

/// Check if a name is snake_case (lowercase letters, digits, underscores)
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    SNAKE_CASE_RE.is_match(name)
}

/// Convert a name to PascalCase, treating underscores and whitespace as word
/// separators.
#[must_use]
pub fn to_pascal_case(name: &str) -> String {
    name.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a name to snake_case, inserting underscores before capitals and
/// collapsing separator runs.
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let mut expanded = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            expanded.push('_');
            expanded.push(c.to_ascii_lowercase());
        } else {
            expanded.push(c);
        }
    }

    let mut out = String::with_capacity(expanded.len());
    for c in expanded.chars() {
        if c == '_' || c.is_whitespace() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.push(c);
        }
    }
    out
}
