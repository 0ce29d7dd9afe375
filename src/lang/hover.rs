//! Hover documentation for keywords, types, and built-ins.
//!
//! A plain immutable word-to-markdown mapping; editor front-ends look up the
//! word under the cursor and display the result as-is.

use std::collections::HashMap;
use std::sync::LazyLock;

static HOVER_CONTENT: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        (
            "if",
            "`if` - Conditional statement\n\nSyntax: `if (condition) { ... }`",
        ),
        (
            "else",
            "`else` - Alternative branch\n\nSyntax: `if (condition) { ... } else { ... }`",
        ),
        (
            "while",
            "`while` - Loop statement\n\nSyntax: `while (condition) { ... }`",
        ),
        ("break", "`break` - Exit from loop"),
        ("continue", "`continue` - Skip to next iteration"),
        (
            "Number",
            "`Number` - Numeric type\n\nExample: `value Number(42);`",
        ),
        (
            "String",
            "`String` - String type\n\nExample: `text String(\"hello\");`",
        ),
        (
            "Boolean",
            "`Boolean` - Boolean type\n\nExample: `flag Boolean(true);`",
        ),
        ("Any", "`Any` - Polymorphic type\n\nCan hold any value type."),
        ("true", "`true` - Boolean true value"),
        ("false", "`false` - Boolean false value"),
        ("null", "`null` - Null value"),
        (
            "write",
            "`write(value)` - Output function\n\nWrites value to console.",
        ),
    ])
});

/// Documentation for a word, if any is known
#[must_use]
pub fn hover_content(word: &str) -> Option<&'static str> {
    HOVER_CONTENT.get(word).copied()
}
