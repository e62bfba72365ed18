/*
 * Symmap Extract - Multi-Language Symbol Extraction
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Symbol, Span, Diagnostic, errors)
 * - features/    : Vertical slices (extraction: ports → domain → infrastructure → application → plugins)
 *
 * Extraction is total over textual input: malformed declarations become
 * diagnostics, never failures. Only an unsupported language hint or an
 * undecodable byte buffer interrupts a file's extraction.
 */

pub mod features;
pub mod shared;

pub use shared::models::{
    Diagnostic, ErrorKind, ExtractError, Location, Result, Severity, Span, Symbol, SymbolKind,
    Visibility,
};

pub use features::extraction::domain::{Classifier, FileOutcome, FragmentSet, RawFragment};
pub use features::extraction::plugins::{
    self, create_full_registry, create_registry, default_registry,
};
pub use features::extraction::ports::{
    CaseVisibility, ExportListVisibility, ExtractorRegistry, LanguageId, LanguagePlugin,
    MarkerVisibility, NoVisibility, VisibilityRule,
};
pub use features::extraction::{FileExtractor, SymbolExtractor};
