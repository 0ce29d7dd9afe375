//! Error types and result aliases for quartzfmt.
//!
//! This module defines the error handling infrastructure:
//! - [`Result<T>`]: Type alias for `anyhow::Result<T>` used throughout the crate
//!
//! The formatter core itself cannot fail: every input, however malformed,
//! produces some output text. [`Result<T>`] covers I/O, configuration
//! parsing, and CLI-level failures only.

use anyhow::Result as AnyhowResult;

pub type Result<T> = AnyhowResult<T>;
