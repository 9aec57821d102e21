/// Classification assigned to each consumed slice of source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// An `import`/`from` statement, possibly spanning several lines.
    Import,
    /// A line holding only whitespace and/or a comment.
    NewlineOnly,
    /// A line (or lines, for triple quotes) holding only a string literal.
    StringLiteral,
    /// Terminal span: everything from the first unrecognized offset to EOF.
    Error,
}

/// One classified, contiguous slice of the source, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl SourceSpan {
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
