//! Document formatting pipeline.
//!
//! This module orchestrates the two-pass reformatting process:
//!
//! **Pass 1 - Indentation:**
//! - Trim every line and classify it (blank, comment, code)
//! - Fold the brace nesting depth over the lines, clamping at zero
//! - Prefix each non-blank line with one tab per nesting level
//!
//! **Pass 2 - Token spacing:**
//! - Rewrite each code line with canonical operator and comma spacing
//! - Copy string literals, comment lines, and comment suffixes verbatim
//!
//! [`format_source`] is the pure text-to-text core; [`format_document`] adds
//! the unchanged-vs-replace-span contract used by editor clients, and
//! [`format_file`] is the buffered-reader entry point used by the CLI.

pub mod pipeline;

pub use pipeline::{
    format_document, format_file, format_source, full_document_span, DocumentSpan, FormatOutcome,
    Position,
};
