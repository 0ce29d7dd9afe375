//! Formatting scenario tests
//!
//! These tests verify the canonical output of the reformatter against
//! expected text, plus the properties the formatter guarantees: idempotence,
//! no-op on canonical input, string and comment safety, and indent clamping.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use quartzfmt::process::{format_document, format_source, FormatOutcome};

/// Run the formatter on input and compare with expected output line by line
/// for better failure messages.
fn assert_formats_to(input: &str, expected: &str) {
    let result = format_source(input);

    let result_lines: Vec<&str> = result.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    for (i, (result_line, expected_line)) in
        result_lines.iter().zip(expected_lines.iter()).enumerate()
    {
        assert_eq!(
            result_line,
            expected_line,
            "line {} differs for input {:?}",
            i + 1,
            input
        );
    }
    assert_eq!(
        result_lines.len(),
        expected_lines.len(),
        "line count differs for input {input:?}"
    );
}

// ============================================================================
// Canonical output scenarios
// ============================================================================

#[test]
fn test_condition_block() {
    assert_formats_to("if(x>0){\nwrite(x);\n}", "if (x > 0) {\n\twrite(x);\n}");
}

#[test]
fn test_empty_if_else_blocks() {
    // Indent returns to zero inside empty blocks; no trailing indent drift
    assert_formats_to("if(a){\n}else{\n}", "if (a) {\n} else {\n}");
}

#[test]
fn test_assignment_with_unary_minus() {
    assert_formats_to("x=-5;", "x = -5;");
}

#[test]
fn test_generic_brackets_unchanged() {
    assert_formats_to("List<Number> xs;", "List<Number> xs;");
}

#[test]
fn test_comma_list() {
    assert_formats_to("a,b,c", "a, b, c");
}

#[test]
fn test_while_loop() {
    assert_formats_to(
        "while(count<10){\ncount=count+1;\n}",
        "while (count < 10) {\n\tcount = count + 1;\n}",
    );
}

#[test]
fn test_for_in_loop() {
    assert_formats_to(
        "for(i in range(10)){\nwrite(i);\n}",
        "for (i in range(10)) {\n\twrite(i);\n}",
    );
}

#[test]
fn test_nested_blocks() {
    let input = "if(a){\nif(b){\nx=1;\n}\n}";
    let expected = "if (a) {\n\tif (b) {\n\t\tx = 1;\n\t}\n}";
    assert_formats_to(input, expected);
}

#[test]
fn test_compound_comparison_operators() {
    assert_formats_to("if(a<=b&&c!=d){\n}", "if (a <= b && c != d) {\n}");
}

#[test]
fn test_blank_lines_preserved_without_indent() {
    assert_formats_to(
        "if(a){\n\nx=1;\n}",
        "if (a) {\n\n\tx = 1;\n}",
    );
}

#[test]
fn test_declaration_call_style() {
    assert_formats_to("value Number(42);", "value Number(42);");
}

// ============================================================================
// String and comment safety
// ============================================================================

#[test]
fn test_operator_inside_string_untouched() {
    assert_formats_to("write(\"a+b\");", "write(\"a+b\");");
}

#[test]
fn test_comment_line_content_byte_identical() {
    // Full-line comment is reproduced with only indentation changed
    assert_formats_to(
        "if(a){\n//  a+b   stays\n}",
        "if (a) {\n\t//  a+b   stays\n}",
    );
}

#[test]
fn test_block_comment_lines_pass_through() {
    let input = "/* heading\n* a+b\n*/\nx=1;";
    let expected = "/* heading\n* a+b\n*/\nx = 1;";
    assert_formats_to(input, expected);
}

#[test]
fn test_inline_comment_suffix_verbatim() {
    assert_formats_to("x=1;// total+sum", "x = 1; // total+sum");
}

#[test]
fn test_comment_marker_inside_string() {
    assert_formats_to(
        "url = \"http://example\";",
        "url = \"http://example\";",
    );
}

// ============================================================================
// Malformed input: best effort, never panic
// ============================================================================

#[test]
fn test_unterminated_string_best_effort() {
    assert_formats_to("x = \"a+b", "x = \"a+b");
}

#[test]
fn test_unbalanced_closers_clamp_at_zero() {
    assert_formats_to("}\n}\nx=1;", "}\n}\nx = 1;");
}

#[test]
fn test_excess_opens_accumulate() {
    assert_formats_to("a{\nb{\nc{\nx=1;", "a {\n\tb {\n\t\tc {\n\t\t\tx = 1;");
}

#[test]
fn test_empty_input() {
    assert_eq!(format_source(""), "");
}

#[test]
fn test_whitespace_only_lines() {
    assert_eq!(format_source("   \n\t\n"), "\n\n");
}

// ============================================================================
// Known limitations, preserved deliberately
// ============================================================================

#[test]
fn test_generic_heuristic_misreads_capitalized_compare() {
    // A comparison between capitalized constants looks like a generic
    // bracket and stays unspaced
    assert_formats_to("if(MAX_X<MAX_Y){\n}", "if (MAX_X<MAX_Y) {\n}");
}

#[test]
fn test_brace_inside_string_moves_depth() {
    // Pass 1 counts braces literally, including inside string literals
    assert_formats_to("write(\"{\");\nx=1;", "write(\"{\");\n\tx = 1;");
}

// ============================================================================
// Properties
// ============================================================================

const SAMPLES: &[&str] = &[
    "if(x>0){\nwrite(x);\n}",
    "if(a){\n}else{\n}",
    "x=-5;",
    "List<Number> xs;",
    "a,b,c",
    "while(count<10){\ncount=count+1;\n}",
    "value Number(42);\ntext String(\"hi, there\");\n",
    "for(i in range(3)){\n// body\nwrite(i);\n}",
    "s=\"a+b\";// c+d\n",
    "if(a&&b||!c){\nx=y<=z;\n}",
    "}\n}\nbroken{\n",
    "x = \"unterminated",
];

#[test]
fn test_idempotence() {
    for sample in SAMPLES {
        let once = format_source(sample);
        let twice = format_source(&once);
        assert_eq!(twice, once, "format not idempotent for {sample:?}");
    }
}

#[test]
fn test_no_op_on_canonical_input() {
    for sample in SAMPLES {
        let canonical = format_source(sample);
        assert_eq!(
            format_document(&canonical),
            FormatOutcome::Unchanged,
            "canonical form of {sample:?} still produced an edit"
        );
    }
}

#[test]
fn test_indent_bounded_by_unmatched_opens() {
    let input = "a{\nb{\n}\n}\n}\nc{\nx;";
    let result = format_source(input);
    let mut unmatched: usize = 0;
    for line in result.lines() {
        let tabs = line.chars().take_while(|&c| c == '\t').count();
        assert!(
            tabs <= unmatched,
            "indent {tabs} exceeds unmatched opens {unmatched} on {line:?}"
        );
        let content = line.trim();
        let opens = content.matches('{').count();
        let closes = content.matches('}').count();
        unmatched = unmatched.saturating_add(opens).saturating_sub(closes);
    }
}

#[test]
fn test_unchanged_signal_spans_whole_document() {
    let input = "if(a){\nwrite(a);\n}";
    match format_document(input) {
        FormatOutcome::Reformatted { span, .. } => {
            assert_eq!(span.start.line, 0);
            assert_eq!(span.start.character, 0);
            assert_eq!(span.end.line, 2);
            assert_eq!(span.end.character, 1);
        }
        FormatOutcome::Unchanged => panic!("expected a reformat"),
    }
}
