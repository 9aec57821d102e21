//! Per-invocation configuration.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Immutable settings for one run.
///
/// `application_directories` and `unclassifiable_application_modules` are
/// carried for the higher-level import classifier and are not consulted by
/// the rewriting pipeline itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Lines longer than this (in characters) are eligible for a
    /// suppression comment.
    pub max_line_length: usize,
    /// Roots used to decide whether a module is first-party.
    pub application_directories: Vec<PathBuf>,
    /// Module names exempt from first-party classification.
    pub unclassifiable_application_modules: BTreeSet<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_line_length: 79,
            application_directories: vec![PathBuf::from(".")],
            unclassifiable_application_modules: BTreeSet::new(),
        }
    }
}
