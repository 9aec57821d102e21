//! Appends line-length suppression comments to over-long import lines.

use crate::settings::Settings;

/// The suppression comment understood by flake8-style line-length checks.
pub const NOQA_COMMENT: &str = "# noqa: E501";

/// Separator between statement text and an appended comment.
const COMMENT_SEPARATOR: &str = "  ";

/// Annotate the entries of the import block.
///
/// Only the first physical line of each entry is inspected; everything after
/// it passes through untouched. Non-import entries (blank or comment lines
/// carried inside the block) never satisfy the keyword check and are
/// returned as-is.
pub fn annotate_imports(imports: &[String], settings: &Settings) -> Vec<String> {
    imports
        .iter()
        .map(|statement| annotate_statement(statement, settings))
        .collect()
}

fn annotate_statement(statement: &str, settings: &Settings) -> String {
    let first_line_end = statement.find('\n').unwrap_or(statement.len());
    let first_line = &statement[..first_line_end];

    if !is_eligible(first_line, settings) {
        return statement.to_string();
    }

    let mut annotated =
        String::with_capacity(statement.len() + COMMENT_SEPARATOR.len() + NOQA_COMMENT.len());
    annotated.push_str(first_line);
    annotated.push_str(COMMENT_SEPARATOR);
    annotated.push_str(NOQA_COMMENT);
    annotated.push_str(&statement[first_line_end..]);
    annotated
}

/// A first line gets the marker only when it is over the limit, carries no
/// comment of any kind yet, and actually starts an import statement (either
/// single-line or one opening a parenthesized name list).
fn is_eligible(first_line: &str, settings: &Settings) -> bool {
    first_line.chars().count() > settings.max_line_length
        && !first_line.contains('#')
        && (first_line.starts_with("import ") || first_line.starts_with("from "))
}
