//! Purpose-built lexer that tells import statements apart from everything
//! else: blank/comment lines, string-literal lines, and unrecognizable text.
//!
//! This is deliberately not a general tokenizer. It only needs enough
//! precision to find the import block of a file, so it tries a handful of
//! hand-built patterns in fixed priority order and gives up (emitting one
//! terminal error span) the moment the input stops looking like something it
//! understands.

mod patterns;
mod span;

pub use span::{SourceSpan, SpanKind};

use patterns::{match_blank_line, match_import, match_string_literal};

/// Case-sensitive comment substring that protects the rest of a file from
/// any automated rewriting.
pub const NOREORDER_MARKER: &str = "noreorder";

/// Lazy span stream over a normalized source text (`\n` endings, single
/// final newline).
pub struct Lexer<'a> {
    input: &'a str,
    offset: usize,
    halted: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            halted: false,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = SourceSpan;

    fn next(&mut self) -> Option<SourceSpan> {
        if self.halted || self.offset >= self.input.len() {
            return None;
        }
        let rest = &self.input[self.offset..];

        if let Some(found) = match_import(rest) {
            if found
                .comments
                .iter()
                .any(|comment| comment.contains(NOREORDER_MARKER))
            {
                // Protected region: stop touching the file from the start of
                // this import onward.
                self.halted = true;
                return Some(SourceSpan::new(SpanKind::Error, rest));
            }
            self.offset += found.len;
            return Some(SourceSpan::new(SpanKind::Import, &rest[..found.len]));
        }

        if let Some(len) = match_blank_line(rest) {
            self.offset += len;
            return Some(SourceSpan::new(SpanKind::NewlineOnly, &rest[..len]));
        }

        if let Some(len) = match_string_literal(rest) {
            self.offset += len;
            return Some(SourceSpan::new(SpanKind::StringLiteral, &rest[..len]));
        }

        // Nothing matched: one terminal error span covering the remainder.
        self.halted = true;
        Some(SourceSpan::new(SpanKind::Error, rest))
    }
}
