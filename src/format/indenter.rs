/// `BraceIndenter` - Brace-nesting indentation tracker
///
/// Tracks `{`/`}` nesting across the lines of a document and assigns each
/// line a tab depth. The depth is a single accumulator threaded through the
/// scan; it is clamped at zero and never goes negative, however unbalanced
/// the input.

/// Classification of a trimmed source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Classify a line by its trimmed content.
///
/// Comment lines are those starting with `//`, `/*`, or `*` (the continuation
/// style of multi-line block comments).
#[must_use]
pub fn classify(content: &str) -> LineKind {
    if content.is_empty() {
        LineKind::Blank
    } else if content.starts_with("//") || content.starts_with("/*") || content.starts_with('*') {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}

/// Tracks the current brace nesting depth across a document scan
#[derive(Debug, Default)]
pub struct BraceIndenter {
    depth: usize,
}

impl BraceIndenter {
    /// Create a new `BraceIndenter` at depth zero
    #[must_use]
    pub fn new() -> Self {
        Self { depth: 0 }
    }

    /// Get the current nesting depth
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Process one trimmed, non-blank line and return its indent level.
    ///
    /// A leading `}` dedents the line itself; a trailing or unmatched `{`
    /// indents only subsequent lines. A line containing both kinds of brace
    /// drops the depth by the excess of closers over openers, so `} else {`
    /// nets to zero. Comment lines never open a scope but still receive the
    /// current indent.
    pub fn process_line(&mut self, content: &str) -> usize {
        let is_comment = classify(content) == LineKind::Comment;

        if content.starts_with('}') {
            self.depth = self.depth.saturating_sub(1);
        }
        let line_indent = self.depth;

        if !is_comment {
            if content.ends_with('{') {
                self.depth += 1;
            } else if content.contains('{') && !content.contains('}') {
                // Unclosed brace mid-line, e.g. a trailing condition before
                // the block body
                self.depth += 1;
            }
        }

        if content.contains('{') && content.contains('}') {
            let opens = content.matches('{').count();
            let closes = content.matches('}').count();
            if closes > opens {
                self.depth = self.depth.saturating_sub(closes - opens);
            }
        }

        line_indent
    }
}
