//! File extraction use cases
//!
//! `FileExtractor` drives one plugin over one file's text and is total over
//! all textual input: per-declaration failures become diagnostics, and only
//! whole-buffer unreadability yields the empty-result-plus-one-diagnostic
//! outcome. `SymbolExtractor` composes the registry, the file extractor, and
//! the generic fallback into the caller-facing surface.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::features::extraction::domain::{Classifier, FileOutcome};
use crate::features::extraction::plugins::{default_registry, GenericPlugin};
use crate::features::extraction::ports::{ExtractorRegistry, LanguagePlugin};
use crate::shared::models::{Diagnostic, Location, Result};

/// Drives one plugin over one file's text
pub struct FileExtractor {
    classifier: Classifier,
}

impl FileExtractor {
    pub fn new() -> Self {
        Self {
            classifier: Classifier::new(),
        }
    }

    /// Extract symbols from one source buffer
    ///
    /// Always returns an outcome; never panics or errors for malformed but
    /// textually bounded input. Symbol order equals declaration order in the
    /// source, top to bottom.
    pub fn extract(&self, source: &str, plugin: &dyn LanguagePlugin) -> FileOutcome {
        let mut outcome = FileOutcome::new();

        let set = match plugin.scan(source) {
            Ok(set) => set,
            Err(err) => {
                // Catastrophic input for this plugin: one diagnostic, no symbols
                warn!(language = plugin.language_id().name(), %err, "scan failed");
                outcome
                    .diagnostics
                    .push(Diagnostic::warning(Location::start(), err.to_string()));
                return outcome;
            }
        };

        for note in set.notes {
            outcome
                .diagnostics
                .push(Diagnostic::warning(note.location, note.message));
        }

        for fragment in set.fragments {
            let location = fragment.location;
            match self.classifier.classify(plugin, fragment) {
                Ok(symbol) => outcome.symbols.push(symbol),
                Err(err) => outcome
                    .diagnostics
                    .push(Diagnostic::warning(location, err.to_string())),
            }
        }

        outcome
            .diagnostics
            .sort_by_key(|d| (d.location.line, d.location.column));

        debug!(
            language = plugin.language_id().name(),
            symbols = outcome.symbols.len(),
            diagnostics = outcome.diagnostics.len(),
            "extracted file"
        );
        outcome
    }

    /// Extract from raw bytes, guarding text decodability
    ///
    /// Undecodable input is the only condition that aborts a file's
    /// extraction entirely: one diagnostic, empty symbol sequence.
    pub fn extract_bytes(&self, bytes: &[u8], plugin: &dyn LanguagePlugin) -> FileOutcome {
        match std::str::from_utf8(bytes) {
            Ok(source) => self.extract(source, plugin),
            Err(err) => {
                warn!(%err, "source is not valid UTF-8");
                let mut outcome = FileOutcome::new();
                outcome.diagnostics.push(Diagnostic::warning(
                    Location::start(),
                    format!("[unreadable_source] source is not valid UTF-8: {}", err),
                ));
                outcome
            }
        }
    }
}

impl Default for FileExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-facing extraction surface
///
/// Holds a shared registry reference; all state is read-only after
/// construction, so one extractor can serve many worker threads.
pub struct SymbolExtractor<'r> {
    registry: &'r ExtractorRegistry,
    files: FileExtractor,
    fallback: GenericPlugin,
}

impl<'r> SymbolExtractor<'r> {
    pub fn new(registry: &'r ExtractorRegistry) -> Self {
        Self {
            registry,
            files: FileExtractor::new(),
            fallback: GenericPlugin::new(),
        }
    }

    /// Extract one file; `Err` only for an unsupported language hint
    pub fn extract(&self, language_hint: &str, source: &str) -> Result<FileOutcome> {
        let plugin = self.registry.resolve(language_hint)?;
        Ok(self.files.extract(source, plugin))
    }

    /// Extract raw bytes; `Err` only for an unsupported language hint
    pub fn extract_bytes(&self, language_hint: &str, bytes: &[u8]) -> Result<FileOutcome> {
        let plugin = self.registry.resolve(language_hint)?;
        Ok(self.files.extract_bytes(bytes, plugin))
    }

    /// Extract one file, degrading to the generic line-based extractor when
    /// the hint has no registered plugin
    pub fn extract_or_generic(&self, language_hint: &str, source: &str) -> FileOutcome {
        match self.registry.resolve(language_hint) {
            Ok(plugin) => self.files.extract(source, plugin),
            Err(_) => {
                debug!(hint = language_hint, "falling back to generic extractor");
                self.files.extract(source, &self.fallback)
            }
        }
    }

    /// Extract many `(hint, source)` pairs in parallel
    ///
    /// Each extraction is a pure computation over an immutable buffer, so
    /// fan-out needs no locking.
    pub fn extract_batch(&self, files: &[(String, String)]) -> Vec<Result<FileOutcome>> {
        files
            .par_iter()
            .map(|(hint, source)| self.extract(hint, source))
            .collect()
    }
}

impl SymbolExtractor<'static> {
    /// Extractor over the process-wide default registry
    pub fn with_defaults() -> Self {
        Self::new(default_registry())
    }
}
