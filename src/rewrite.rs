//! File-level driver: newline handling, the pure transform, and in-place
//! rewriting.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::annotate::annotate_imports;
use crate::lexer::Lexer;
use crate::partition::partition;
use crate::settings::Settings;

pub type Result<T> = std::result::Result<T, FixError>;

/// Errors from processing one file. Decode failures are recoverable at the
/// batch level; I/O failures are not.
#[derive(Error, Debug)]
pub enum FixError {
    /// The file's bytes are not valid UTF-8.
    #[error("{}: file is not valid UTF-8", path.display())]
    Decode { path: PathBuf },

    /// Filesystem error while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Returns the first line ending found in `code`, defaulting to `\n`.
pub fn detect_newline(code: &str) -> &'static str {
    let bytes = code.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        match b {
            b'\n' => return "\n",
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    return "\r\n";
                }
                return "\r";
            }
            _ => {}
        }
    }
    "\n"
}

/// Normalizes to `\n` endings, trims trailing whitespace at the end of the
/// file, and guarantees exactly one final newline.
fn normalize(code: &str) -> String {
    let unified = code.replace("\r\n", "\n").replace('\r', "\n");
    let mut normalized = unified.trim_end().to_string();
    normalized.push('\n');
    normalized
}

/// The pure transform: lex, partition, annotate, reassemble, and restore the
/// original newline convention. Empty input passes through untouched.
pub fn fix_source(code: &str, settings: &Settings) -> String {
    if code.is_empty() {
        return String::new();
    }

    let newline = detect_newline(code);
    let normalized = normalize(code);

    let spans: Vec<_> = Lexer::new(&normalized).collect();
    let regions = partition(spans);
    debug!(
        "partitioned into {} pre bytes, {} import-block entries, {} trailing bytes",
        regions.pre.len(),
        regions.imports.len(),
        regions.trailing.len()
    );
    let imports = annotate_imports(&regions.imports, settings);

    let mut fixed = String::with_capacity(normalized.len() + 16);
    fixed.push_str(&regions.pre);
    for statement in &imports {
        fixed.push_str(statement);
    }
    fixed.push_str(&regions.trailing);

    if newline == "\n" {
        fixed
    } else {
        fixed.replace('\n', newline)
    }
}

/// Fixes one file in place. Returns `true` when the file was rewritten.
///
/// The file is either fully rewritten or left byte-identical; there is no
/// partial-write state.
pub fn fix_file(path: &Path, settings: &Settings) -> Result<bool> {
    let raw = fs::read(path)?;
    let original = String::from_utf8(raw).map_err(|_| FixError::Decode {
        path: path.to_path_buf(),
    })?;

    let fixed = fix_source(&original, settings);
    if fixed == original {
        return Ok(false);
    }
    fs::write(path, &fixed)?;
    Ok(true)
}
