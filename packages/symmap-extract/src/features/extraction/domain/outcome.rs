//! Per-file extraction outcome

use serde::Serialize;

use crate::shared::models::{Diagnostic, Symbol};

/// Ordered symbols plus diagnostics for one file
///
/// This is the complete external result shape: extraction always returns a
/// value, possibly with an empty symbol list and a non-empty diagnostic list.
#[derive(Debug, Default, Serialize)]
pub struct FileOutcome {
    pub symbols: Vec<Symbol>,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.diagnostics.is_empty()
    }
}
