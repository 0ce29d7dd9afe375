//! Static Quartz language data.
//!
//! Everything in this module is an immutable table: the reserved words and
//! built-ins ([`keywords`]), the completion lists ([`completion`]), and the
//! hover documentation ([`hover`]). Editor front-ends call these with a word
//! or nothing at all and get data back; no document state is involved.

pub mod completion;
pub mod hover;
pub mod keywords;

pub use completion::{all_completions, CompletionItem, CompletionKind};
pub use hover::hover_content;
pub use keywords::{is_built_in_function, is_built_in_type, is_keyword};
