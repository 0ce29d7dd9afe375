/// `CodeFilter` - Iterator that filters out strings and comments
///
/// Wraps a string and maintains state about whether the cursor is inside a
/// string literal, a line comment, or a block comment. It is used wherever a
/// pass must only look at actual Quartz code, not string contents or comment
/// text.
use std::iter::Peekable;
use std::str::CharIndices;

/// Scanner state while walking Quartz source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    /// Inside a string literal, holding the quote character that opened it
    InString(char),
    /// Inside a `//` comment, which runs to the end of the line
    InLineComment,
    /// Inside a `/* ... */` comment, which may span lines
    InBlockComment,
}

/// Iterator adapter that yields `(byte_position, character)` pairs for the
/// code regions of the input, skipping string contents and comments as
/// configured.
///
/// String literals end at their closing quote or, when unterminated, at the
/// end of the line. A quote preceded by an odd run of backslashes is escaped
/// and does not close the string.
pub struct CodeFilter<'a> {
    chars: Peekable<CharIndices<'a>>,
    state: ScanState,
    escaped: bool,
    prev_star: bool,
    filter_comments: bool,
    filter_strings: bool,
}

impl<'a> CodeFilter<'a> {
    /// Create a new `CodeFilter`
    ///
    /// # Arguments
    /// * `content` - The string to iterate over
    /// * `filter_comments` - Whether to skip comment text (`//` and `/* */`)
    /// * `filter_strings` - Whether to skip string literal contents
    #[must_use]
    pub fn new(content: &'a str, filter_comments: bool, filter_strings: bool) -> Self {
        Self {
            chars: content.char_indices().peekable(),
            state: ScanState::default(),
            escaped: false,
            prev_star: false,
            filter_comments,
            filter_strings,
        }
    }

    /// Check if the scanner is currently inside a string
    #[must_use]
    pub fn in_string(&self) -> bool {
        matches!(self.state, ScanState::InString(_))
    }

    /// Get the current scanner state
    #[must_use]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Get the filtered content as a string
    pub fn filter_all(&mut self) -> String {
        let size_hint = self.chars.size_hint().0;
        let mut result = String::with_capacity(size_hint);
        for (_, c) in self.by_ref() {
            result.push(c);
        }
        result
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }
}

impl Iterator for CodeFilter<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (pos, c) = self.chars.next()?;

            match self.state {
                ScanState::Normal => match c {
                    '"' | '\'' => {
                        self.state = ScanState::InString(c);
                        self.escaped = false;
                        if self.filter_strings {
                            continue;
                        }
                        return Some((pos, c));
                    }
                    '/' if self.peek_char() == Some('/') => {
                        self.state = ScanState::InLineComment;
                        if self.filter_comments {
                            continue;
                        }
                        return Some((pos, c));
                    }
                    '/' if self.peek_char() == Some('*') => {
                        self.state = ScanState::InBlockComment;
                        self.prev_star = false;
                        if self.filter_comments {
                            continue;
                        }
                        return Some((pos, c));
                    }
                    _ => return Some((pos, c)),
                },
                ScanState::InString(quote) => {
                    if c == '\n' {
                        // Unterminated string: the literal ends with the line
                        self.state = ScanState::Normal;
                        return Some((pos, c));
                    }
                    let was_escaped = self.escaped;
                    self.escaped = !was_escaped && c == '\\';
                    if !was_escaped && c == quote {
                        self.state = ScanState::Normal;
                    }
                    if self.filter_strings {
                        continue;
                    }
                    return Some((pos, c));
                }
                ScanState::InLineComment => {
                    if c == '\n' {
                        self.state = ScanState::Normal;
                        return Some((pos, c));
                    }
                    if self.filter_comments {
                        continue;
                    }
                    return Some((pos, c));
                }
                ScanState::InBlockComment => {
                    // Note: "/*/" does not close; prev_star starts out false
                    if c == '/' && self.prev_star {
                        self.state = ScanState::Normal;
                    }
                    self.prev_star = c == '*';
                    if self.filter_comments {
                        continue;
                    }
                    return Some((pos, c));
                }
            }
        }
    }
}

/// Whether the character at `idx` is escaped by an odd run of backslashes.
#[must_use]
pub fn is_escaped(chars: &[char], idx: usize) -> bool {
    let mut backslashes = 0;
    while backslashes < idx && chars[idx - 1 - backslashes] == '\\' {
        backslashes += 1;
    }
    backslashes % 2 == 1
}

/// Replace string and comment contents with spaces, preserving byte offsets.
///
/// The result has exactly the same length as the input, so byte positions of
/// regex matches on the masked text map directly onto the original.
#[must_use]
pub fn mask_non_code(text: &str) -> String {
    let mut masked = String::with_capacity(text.len());
    let mut code = CodeFilter::new(text, true, true).peekable();

    for (pos, c) in text.char_indices() {
        if code.peek().map(|&(p, _)| p) == Some(pos) {
            code.next();
            masked.push(c);
        } else {
            for _ in 0..c.len_utf8() {
                masked.push(' ');
            }
        }
    }

    masked
}
