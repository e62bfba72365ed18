//! Shared models
//!
//! Common vocabulary used by every feature: spans, symbols, diagnostics,
//! and the unified error type.

pub mod error;
pub mod span;
pub mod symbol;

pub use error::{ErrorKind, ExtractError, Result};
pub use span::{Location, Span};
pub use symbol::{Diagnostic, Severity, Symbol, SymbolKind, Visibility};
