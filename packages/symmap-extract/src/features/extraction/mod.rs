//! Symbol extraction feature
//!
//! Layered as ports (plugin and registry contracts), domain (fragments,
//! classification, outcomes), infrastructure (tree-sitter parsing),
//! application (extraction use cases), and plugins (per-language
//! implementations).

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod plugins;
pub mod ports;

pub use application::{FileExtractor, SymbolExtractor};
pub use domain::{Classifier, FileOutcome, FragmentSet, RawFragment, ScanNote};
pub use plugins::{create_full_registry, create_registry, default_registry};
pub use ports::{ExtractorRegistry, LanguageId, LanguagePlugin, VisibilityRule};
