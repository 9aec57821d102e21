// Lexer + partitioner + annotator properties over whole source texts.

use pretty_assertions::assert_eq;

use noqa_imports::{fix_source, partition, Lexer, Settings, SpanKind, NOQA_COMMENT};

const LONG_FROM_IMPORT: &str = "from some.very.long.module.path.that.is.quite.verbose \
                                import something_long, another_thing_long";

fn fix(src: &str) -> String {
    fix_source(src, &Settings::default())
}

fn span_kinds(src: &str) -> Vec<SpanKind> {
    Lexer::new(src).map(|span| span.kind).collect()
}

#[test]
fn long_single_line_import_gets_suppression_comment() {
    let src = format!("{LONG_FROM_IMPORT}\n");
    let expected = format!("{LONG_FROM_IMPORT}  {NOQA_COMMENT}\n");
    assert_eq!(fix(&src), expected);
}

#[test]
fn short_imports_are_untouched() {
    let src = "import os\nimport sys\n\nfrom pathlib import Path\n";
    assert_eq!(fix(src), src);
}

#[test]
fn import_with_existing_comment_is_untouched() {
    let src = format!("import {}  # already annotated\n", "long_".repeat(30));
    assert_eq!(fix(&src), src);
}

#[test]
fn transform_is_idempotent() {
    let src = format!(
        "\"\"\"module docstring\"\"\"\n\n{LONG_FROM_IMPORT}\nimport os\n\nprint(1)\n"
    );
    let once = fix(&src);
    let twice = fix(&once);
    assert_eq!(twice, once, "second run must change nothing");
    assert!(once.contains(NOQA_COMMENT));
}

#[test]
fn docstring_stays_pre_import_and_later_string_is_trailing() {
    let src = "\"\"\"docs\"\"\"\n\nimport os\n\nx = 1\n\"\"\"not a docstring\"\"\"\n";
    // The post-import triple-quoted string must land in trailing code, not
    // be mistaken for pre-import material; nothing here is over-long, so
    // the whole file round-trips.
    assert_eq!(fix(src), src);
}

#[test]
fn backslash_continuation_is_one_import_span() {
    let src = "from libcst import Module, Comment, \\\n    ImportFrom, Import\n";
    let spans: Vec<_> = Lexer::new(src).collect();
    assert_eq!(spans.len(), 1, "continuation must not split the statement");
    assert_eq!(spans[0].kind, SpanKind::Import);
    assert_eq!(spans[0].text, src);
}

#[test]
fn parenthesized_import_with_interior_comments_is_one_span() {
    let src = "from pkg import (\n    alpha,  # first\n    beta,\n)\n";
    let spans: Vec<_> = Lexer::new(src).collect();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].kind, SpanKind::Import);
}

#[test]
fn long_parenthesized_import_annotated_on_open_paren_line() {
    let first = format!(
        "from {} import (",
        "very.long.package.path.segment.".repeat(3)
    );
    let src = format!("{first}\n    name_one,\n    name_two,\n)\n");
    let fixed = fix(&src);
    assert!(
        fixed.starts_with(&format!("{first}  {NOQA_COMMENT}\n")),
        "marker must sit on the first physical line"
    );
    assert!(fixed.ends_with("    name_one,\n    name_two,\n)\n"));
}

#[test]
fn unbalanced_parenthesis_halts_lexing() {
    let src = "from pkg import (\n    alpha,\nimport os\n";
    let kinds = span_kinds(src);
    assert_eq!(kinds, vec![SpanKind::Error], "no recovery guessing");
    assert_eq!(fix(src), src, "unrecognized tail is preserved verbatim");
}

#[test]
fn noreorder_comment_protects_the_rest_of_the_file() {
    let src = format!("import first\nimport second  # noreorder\n{LONG_FROM_IMPORT}\n");
    let kinds = span_kinds(&src);
    assert_eq!(kinds, vec![SpanKind::Import, SpanKind::Error]);
    assert_eq!(fix(&src), src, "everything from the marker on is untouched");
}

#[test]
fn noreorder_inside_parenthesized_list_protects_too() {
    let src = "from pkg import (\n    alpha,  # noreorder\n)\n";
    assert_eq!(span_kinds(src), vec![SpanKind::Error]);
}

#[test]
fn unrecognized_code_before_imports_disables_the_transform() {
    let src = format!("x = compute()\n{LONG_FROM_IMPORT}\n");
    assert_eq!(fix(&src), src);
}

#[test]
fn comment_and_blank_lines_between_imports_keep_their_places() {
    let src = "import a\n\n# grouping comment\nimport b\n";
    assert_eq!(fix(src), src);
}

#[test]
fn crlf_convention_is_restored() {
    let src = format!("{LONG_FROM_IMPORT}\r\nimport os\r\n");
    let expected = format!("{LONG_FROM_IMPORT}  {NOQA_COMMENT}\r\nimport os\r\n");
    assert_eq!(fix(&src), expected);
}

#[test]
fn prefixed_and_escaped_string_literals_lex_as_strings() {
    let src = "r\"raw \\d literal\"\nb'bytes \\' quoted'\n";
    assert_eq!(
        span_kinds(src),
        vec![SpanKind::StringLiteral, SpanKind::StringLiteral]
    );
}

#[test]
fn string_with_trailing_code_is_not_a_string_span() {
    let src = "\"prefix\" + suffix\n";
    assert_eq!(span_kinds(src), vec![SpanKind::Error]);
}

#[test]
fn regions_concatenate_back_to_the_normalized_source() {
    let src = "\"\"\"docs\"\"\"\n\nimport a\n\nimport b\n\ndef f():\n    pass\n";
    let regions = partition(Lexer::new(src).collect());
    let rebuilt = format!(
        "{}{}{}",
        regions.pre,
        regions.imports.concat(),
        regions.trailing
    );
    assert_eq!(rebuilt, src);
}
