//! Two-pass formatting pipeline
//!
//! Pass 1 derives tab indentation from brace nesting; pass 2 normalizes
//! token spacing on each code line. Comment lines keep their content
//! byte-for-byte and only receive the indent prefix.
//!
//! [`format_source`] is a pure function of the input text: it holds no state
//! across invocations and is safe to call concurrently on independent
//! documents. It cannot fail - malformed input produces best-effort output.

use std::io::{BufRead, Read, Write};

use crate::error::Result;
use crate::format::{classify, format_line, BraceIndenter, LineKind};

/// A line/character position inside a document.
///
/// `character` counts characters, not bytes; callers own any conversion to
/// host-specific units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

/// Span of text between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSpan {
    pub start: Position,
    pub end: Position,
}

/// Result of formatting a whole document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Output equals the input character-for-character; no edit is required
    Unchanged,
    /// Replace `span` (the whole document) with `text`
    Reformatted { text: String, span: DocumentSpan },
}

/// Reformat Quartz source text into canonical layout.
///
/// Line terminators are normalized to `\n`; a trailing newline round-trips.
#[must_use]
pub fn format_source(text: &str) -> String {
    let mut indenter = BraceIndenter::new();
    let mut formatted: Vec<String> = Vec::new();

    for raw in text.split('\n') {
        let content = raw.trim();
        if content.is_empty() {
            // Preserve blank lines without emitting indent characters
            formatted.push(String::new());
            continue;
        }

        let indent = indenter.process_line(content);
        let body = match classify(content) {
            LineKind::Comment => content.to_string(),
            _ => format_line(content),
        };

        let mut line = "\t".repeat(indent);
        line.push_str(&body);
        formatted.push(line);
    }

    formatted.join("\n")
}

/// The span covering an entire document: `[0,0]` to the end of the last line.
#[must_use]
pub fn full_document_span(text: &str) -> DocumentSpan {
    let mut last_line = 0;
    let mut last_len = 0;
    for (idx, line) in text.split('\n').enumerate() {
        last_line = idx;
        last_len = line.chars().count();
    }
    DocumentSpan {
        start: Position {
            line: 0,
            character: 0,
        },
        end: Position {
            line: last_line,
            character: last_len,
        },
    }
}

/// Format a document for an editor client.
///
/// Returns [`FormatOutcome::Unchanged`] when the canonical form equals the
/// input - the caller must emit no edit in that case. Otherwise the result
/// carries the new text together with the whole-document span to replace;
/// this core never computes incremental diffs.
#[must_use]
pub fn format_document(text: &str) -> FormatOutcome {
    let formatted = format_source(text);
    if formatted == text {
        FormatOutcome::Unchanged
    } else {
        let span = full_document_span(text);
        FormatOutcome::Reformatted {
            text: formatted,
            span,
        }
    }
}

/// Format everything from `input` and write the result to `output`.
pub fn format_file<R: BufRead, W: Write>(mut input: R, output: &mut W) -> Result<()> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    output.write_all(format_source(&text).as_bytes())?;
    Ok(())
}
