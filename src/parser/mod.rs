//! Quartz source scanning utilities.
//!
//! This module provides the lexical infrastructure shared by the formatter
//! and the lint passes:
//! - [`CodeFilter`]: Iterator adapter that identifies strings, comments, and code regions
//! - [`patterns`]: Precompiled regex patterns for identifiers and naming conventions
//!
//! The scanner handles both quote styles, backslash escapes (by parity, so
//! `\\"` closes a string while `\"` does not), line comments, and block
//! comments that span lines.

pub mod patterns;
pub mod scanner;

pub use scanner::{is_escaped, mask_non_code, CodeFilter, ScanState};
