//! Static completion items offered to editor clients.
//!
//! Completion for Quartz is pure data lookup: editor front-ends fetch these
//! tables and hand them to their host unmodified.

use std::fmt;
use std::sync::LazyLock;

/// Kind of a completion item, mirroring editor conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionKind {
    Keyword,
    Type,
    Value,
    Function,
}

impl fmt::Display for CompletionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompletionKind::Keyword => "keyword",
            CompletionKind::Type => "type",
            CompletionKind::Value => "value",
            CompletionKind::Function => "function",
        };
        write!(f, "{name}")
    }
}

/// A single completion entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionItem {
    pub label: &'static str,
    pub kind: CompletionKind,
    pub detail: &'static str,
    /// Snippet inserted instead of the label, when present
    pub insert_text: Option<&'static str>,
}

impl CompletionItem {
    const fn new(label: &'static str, kind: CompletionKind, detail: &'static str) -> Self {
        Self {
            label,
            kind,
            detail,
            insert_text: None,
        }
    }
}

pub const KEYWORD_COMPLETIONS: &[CompletionItem] = &[
    CompletionItem::new("if", CompletionKind::Keyword, "If statement"),
    CompletionItem::new("else", CompletionKind::Keyword, "Else branch"),
    CompletionItem::new("while", CompletionKind::Keyword, "While loop"),
    CompletionItem::new("break", CompletionKind::Keyword, "Break statement"),
    CompletionItem::new("continue", CompletionKind::Keyword, "Continue statement"),
];

pub const TYPE_COMPLETIONS: &[CompletionItem] = &[
    CompletionItem::new("Number", CompletionKind::Type, "Number type"),
    CompletionItem::new("String", CompletionKind::Type, "String type"),
    CompletionItem::new("Boolean", CompletionKind::Type, "Boolean type"),
    CompletionItem::new("Any", CompletionKind::Type, "Any type (polymorphic)"),
];

pub const CONSTANT_COMPLETIONS: &[CompletionItem] = &[
    CompletionItem::new("true", CompletionKind::Value, "Boolean true"),
    CompletionItem::new("false", CompletionKind::Value, "Boolean false"),
    CompletionItem::new("null", CompletionKind::Value, "Null value"),
];

pub const FUNCTION_COMPLETIONS: &[CompletionItem] = &[CompletionItem {
    label: "write",
    kind: CompletionKind::Function,
    detail: "Write output to console",
    insert_text: Some("write(${1:value});"),
}];

static ALL_COMPLETIONS: LazyLock<Vec<CompletionItem>> = LazyLock::new(|| {
    [
        KEYWORD_COMPLETIONS,
        TYPE_COMPLETIONS,
        CONSTANT_COMPLETIONS,
        FUNCTION_COMPLETIONS,
    ]
    .concat()
});

/// Every completion item, in presentation order
#[must_use]
pub fn all_completions() -> &'static [CompletionItem] {
    &ALL_COMPLETIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_completions_covers_every_table() {
        let total = KEYWORD_COMPLETIONS.len()
            + TYPE_COMPLETIONS.len()
            + CONSTANT_COMPLETIONS.len()
            + FUNCTION_COMPLETIONS.len();
        assert_eq!(all_completions().len(), total);
    }

    #[test]
    fn test_labels_unique() {
        let mut labels: Vec<&str> = all_completions().iter().map(|c| c.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), all_completions().len());
    }

    #[test]
    fn test_write_has_snippet() {
        let write = all_completions()
            .iter()
            .find(|c| c.label == "write")
            .unwrap();
        assert_eq!(write.kind, CompletionKind::Function);
        assert!(write.insert_text.is_some());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(CompletionKind::Keyword.to_string(), "keyword");
        assert_eq!(CompletionKind::Function.to_string(), "function");
    }
}
