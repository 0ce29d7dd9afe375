//! Integration tests for quartzfmt
//!
//! These tests verify that the components work together correctly

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{BufReader, Cursor};

use quartzfmt::format::BraceIndenter;
use quartzfmt::lang::{all_completions, hover_content, is_keyword, CompletionKind};
use quartzfmt::process::{format_file, format_source};
use quartzfmt::{check_naming, format_document, FormatOutcome, Severity};

#[test]
fn test_complete_quartz_program() {
    let input = "\
use io from core;

// entry point
main Number(){
total=0;
for(i in range(10)){
if(i>0&&i<=5){
total=total+i;
}else{
write(\"skipped: \"+i);
}
}
return total;
}
";
    let expected = "\
use io from core;

// entry point
main Number() {
\ttotal = 0;
\tfor (i in range(10)) {
\t\tif (i > 0 && i <= 5) {
\t\t\ttotal = total + i;
\t\t} else {
\t\t\twrite(\"skipped: \"+ i);
\t\t}
\t}
\treturn total;
}
";
    assert_eq!(format_source(input), expected);
}

#[test]
fn test_formatted_program_is_stable() {
    let input = "main Number(){\nx=1;\nif(x){\nwrite(x);\n}\n}\n";
    let once = format_source(input);
    assert_eq!(format_source(&once), once);
    assert_eq!(format_document(&once), FormatOutcome::Unchanged);
}

#[test]
fn test_format_file_pipeline() {
    let input = "if(ready){\nwrite(\"go\");\n}\n";
    let reader = BufReader::new(Cursor::new(input.as_bytes()));
    let mut output = Vec::new();

    format_file(reader, &mut output).unwrap();

    let result = String::from_utf8(output).unwrap();
    assert_eq!(result, "if (ready) {\n\twrite(\"go\");\n}\n");
}

#[test]
fn test_indenter_tracks_document_depth() {
    let mut indenter = BraceIndenter::new();

    assert_eq!(indenter.process_line("main Number() {"), 0);
    assert_eq!(indenter.process_line("while (running) {"), 1);
    assert_eq!(indenter.process_line("step();"), 2);
    assert_eq!(indenter.process_line("}"), 1);
    assert_eq!(indenter.process_line("}"), 0);
    assert_eq!(indenter.depth(), 0);
}

#[test]
fn test_lint_on_formatted_source() {
    let source = format_source("Bad_name=1;\nGoodType x;\nsnake_ok=2;");
    let diagnostics = check_naming(&source);

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert!(diagnostics[0].message.contains("Bad_name"));
}

#[test]
fn test_lint_spans_survive_reformatting() {
    // After formatting, spans still point at the identifiers
    let source = format_source("if(a){\nmyBad=1;\n}");
    let diagnostics = check_naming(&source);

    assert_eq!(diagnostics.len(), 1);
    let span = diagnostics[0].span;
    assert_eq!(span.start.line, 1);
    // One tab of indentation before the identifier
    assert_eq!(span.start.character, 1);
}

#[test]
fn test_language_tables_agree() {
    // Every keyword completion is a keyword, and documented words resolve
    for item in all_completions() {
        if item.kind == CompletionKind::Keyword {
            assert!(is_keyword(item.label), "{} not a keyword", item.label);
        }
    }
    assert!(hover_content("while").is_some());
    assert!(hover_content("Number").is_some());
}

#[test]
fn test_hover_examples_format_cleanly() {
    // The usage examples shown in hover docs are already canonical
    for example in ["value Number(42);", "flag Boolean(true);"] {
        assert_eq!(format_source(example), example);
    }
}
