//! Extraction use cases

pub mod extract_file;

pub use extract_file::{FileExtractor, SymbolExtractor};
