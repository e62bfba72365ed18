//! Extraction ports

pub mod language_plugin;
pub mod visibility;

pub use language_plugin::{ExtractorRegistry, LanguageId, LanguagePlugin, SpanExt};
pub use visibility::{
    CaseVisibility, ExportListVisibility, MarkerVisibility, NoVisibility, VisibilityRule,
};
