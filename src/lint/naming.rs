//! Identifier naming diagnostics.
//!
//! Quartz convention: identifiers with a leading capital name types and must
//! be PascalCase; everything else must be snake_case. Keywords are exempt.
//! Strings and comments are masked before scanning so their contents are
//! never flagged.

use std::fmt;

use crate::lang::keywords::is_keyword;
use crate::lint::case::{is_pascal_case, is_snake_case, to_pascal_case, to_snake_case};
use crate::parser::patterns::IDENTIFIER_RE;
use crate::parser::scanner::mask_non_code;
use crate::process::{DocumentSpan, Position};

/// Diagnostic severity, mirroring editor conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{name}")
    }
}

/// A single naming finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: DocumentSpan,
    pub severity: Severity,
    pub message: String,
    pub source: &'static str,
}

const DIAGNOSTIC_SOURCE: &str = "quartz-naming";

/// Check every identifier in the document against the naming convention.
#[must_use]
pub fn check_naming(text: &str) -> Vec<Diagnostic> {
    let masked = mask_non_code(text);
    let index = LineIndex::new(text);
    let mut diagnostics = Vec::new();

    for m in IDENTIFIER_RE.find_iter(&masked) {
        let identifier = m.as_str();
        if is_keyword(identifier) {
            continue;
        }

        let starts_uppercase = identifier
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase());
        let message = if starts_uppercase {
            if is_pascal_case(identifier) {
                continue;
            }
            format!(
                "type \"{identifier}\" should be PascalCase (e.g. {})",
                to_pascal_case(identifier)
            )
        } else {
            if is_snake_case(identifier) {
                continue;
            }
            format!(
                "variable \"{identifier}\" should be snake_case (e.g. {})",
                to_snake_case(identifier)
            )
        };

        diagnostics.push(Diagnostic {
            span: DocumentSpan {
                start: index.position(m.start()),
                end: index.position(m.end()),
            },
            severity: Severity::Warning,
            message,
            source: DIAGNOSTIC_SOURCE,
        });
    }

    diagnostics
}

/// Byte-offset to line/character mapping over the original text
struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(text: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(text.match_indices('\n').map(|(i, _)| i + 1));
        Self { text, line_starts }
    }

    fn position(&self, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let character = self.text[self.line_starts[line]..offset].chars().count();
        Position { line, character }
    }
}
