//! quartzfmt - Source formatter and editor tooling for the Quartz language
//!
//! The core is a line-oriented reformatter that rewrites Quartz source into a
//! canonical layout (tab indentation, spaced binary operators and commas)
//! without building a syntax tree. Around it sit the static language tables
//! used by editor clients (completion, hover) and an identifier-naming lint.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod lang;
pub mod lint;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use cli::{build_cli, parse_args, parse_args_from, CliArgs};
pub use config::Config;
pub use error::Result;
pub use lint::{check_naming, Diagnostic, Severity};
pub use process::{format_document, format_source, FormatOutcome};
