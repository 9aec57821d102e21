//! Append `# noqa: E501` suppression comments to over-long import lines.
//!
//! The pipeline is: raw text -> [`lexer::Lexer`] -> [`partition::partition`]
//! -> [`annotate::annotate_imports`] -> reassembled file content with the
//! original newline convention restored. Everything outside the import
//! block's first lines is preserved byte for byte.

pub mod annotate;
pub mod lexer;
pub mod partition;
pub mod rewrite;
pub mod settings;

pub use annotate::{annotate_imports, NOQA_COMMENT};
pub use lexer::{Lexer, SourceSpan, SpanKind};
pub use partition::{partition, FileRegions, RegionClass};
pub use rewrite::{fix_file, fix_source, FixError};
pub use settings::Settings;
