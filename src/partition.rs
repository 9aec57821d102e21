//! Single-pass partitioner: span stream in, three ordered regions out.

use crate::lexer::{SourceSpan, SpanKind};

/// Region label derived from a span's kind plus the "still before the first
/// import" flag carried through the pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionClass {
    /// Code that must stay above the import block (module docstrings,
    /// pre-import comment lines).
    PreImportCode,
    /// An import statement.
    Import,
    /// Pure-whitespace lines.
    NonCode,
    /// Anything else; never touched.
    Code,
}

/// The three ordered regions of one file.
///
/// `pre` and `trailing` are opaque text; `imports` holds each import
/// statement as one entry, interleaved with any blank/comment lines that sit
/// inside the import block (those entries never start with an import keyword,
/// so the annotator skips them). Concatenating `pre`, the `imports` entries,
/// and `trailing` in order reproduces the normalized source.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct FileRegions {
    pub pre: String,
    pub imports: Vec<String>,
    pub trailing: String,
}

/// Classify one span.
fn classify(span: &SourceSpan, still_pre_import: bool) -> RegionClass {
    match span.kind {
        SpanKind::Import => RegionClass::Import,
        SpanKind::NewlineOnly => {
            if !span.text.contains('#') {
                RegionClass::NonCode
            } else if still_pre_import {
                RegionClass::PreImportCode
            } else {
                RegionClass::Code
            }
        }
        SpanKind::StringLiteral => {
            if still_pre_import {
                RegionClass::PreImportCode
            } else {
                RegionClass::Code
            }
        }
        SpanKind::Error => RegionClass::Code,
    }
}

/// Bucket a span sequence into `FileRegions`.
///
/// The cutoff is the highest index classified `PreImportCode` or `Import`.
/// Everything after the cutoff is trailing code no matter what it looks
/// like: once the import block has ended, even a bare string literal or a
/// blank line must not be treated as pre-import material again.
pub fn partition(spans: Vec<SourceSpan>) -> FileRegions {
    let mut classes = Vec::with_capacity(spans.len());
    let mut still_pre_import = true;
    for span in &spans {
        let class = classify(span, still_pre_import);
        if class == RegionClass::Import {
            still_pre_import = false;
        }
        classes.push(class);
    }

    let cutoff = classes
        .iter()
        .rposition(|c| matches!(c, RegionClass::PreImportCode | RegionClass::Import));
    let first_import = classes.iter().position(|c| *c == RegionClass::Import);

    let mut regions = FileRegions::default();
    for (i, span) in spans.into_iter().enumerate() {
        let in_import_block = match (cutoff, first_import) {
            (Some(cut), Some(first)) => i >= first && i <= cut,
            _ => false,
        };
        match cutoff {
            Some(cut) if i <= cut => {
                if in_import_block {
                    regions.imports.push(span.text);
                } else {
                    regions.pre.push_str(&span.text);
                }
            }
            _ => regions.trailing.push_str(&span.text),
        }
    }
    regions
}
