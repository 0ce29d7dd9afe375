//! Identifier naming lint.
//!
//! A single-pass check over a document: identifiers are located with one
//! regex sweep (strings and comments masked out first) and compared against
//! the Quartz naming convention. No syntax tree and no symbol resolution -
//! every identifier is judged by its spelling alone.

pub mod case;
pub mod naming;

pub use case::{is_pascal_case, is_snake_case, to_pascal_case, to_snake_case};
pub use naming::{check_naming, Diagnostic, Severity};
