//! Normalized symbol and diagnostic records
//!
//! The shared output vocabulary every language plugin normalizes into.
//! `Symbol` serializes with a stable field order (kind, name, visibility,
//! span_start, span_end) so downstream renderers can rely on it.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::span::{Location, Span};

/// Kind of a top-level declaration
///
/// Open set: plugins may report vocabulary the classifier does not
/// anticipate, which passes through as `Other` with the plugin's tag string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Struct,
    Enum,
    Trait,
    Function,
    Constant,
    Module,
    Other(String),
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Struct => write!(f, "struct"),
            SymbolKind::Enum => write!(f, "enum"),
            SymbolKind::Trait => write!(f, "trait"),
            SymbolKind::Function => write!(f, "function"),
            SymbolKind::Constant => write!(f, "constant"),
            SymbolKind::Module => write!(f, "module"),
            SymbolKind::Other(tag) => write!(f, "other:{}", tag),
        }
    }
}

impl Serialize for SymbolKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Whether a declaration is usable outside its defining file/module
///
/// `Unknown` means "visibility not asserted" (no visibility syntax, or the
/// plugin could not determine it). It is never a synonym for `Private`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
    Unknown,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
            Visibility::Unknown => write!(f, "unknown"),
        }
    }
}

/// One normalized top-level declaration
///
/// `name` is the identifier text as written; uniqueness within a file is not
/// guaranteed (shadowing and duplicates are preserved verbatim).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    pub visibility: Visibility,
    pub span: Span,
}

impl Symbol {
    pub fn new(kind: SymbolKind, name: impl Into<String>, visibility: Visibility, span: Span) -> Self {
        Self {
            kind,
            name: name.into(),
            visibility,
            span,
        }
    }
}

// Manual impl: the span is flattened into span_start/span_end and the field
// order is part of the external contract.
impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Symbol", 5)?;
        state.serialize_field("kind", &self.kind)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("visibility", &self.visibility)?;
        state.serialize_field("span_start", &self.span.start)?;
        state.serialize_field("span_end", &self.span.end)?;
        state.end()
    }
}

/// Diagnostic severity
///
/// Informational or warning only; the extractor never emits a diagnostic
/// that aborts processing of the remaining file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
}

/// A non-fatal problem encountered while extracting one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub location: Location,
    pub message: String,
    pub severity: Severity,
}

impl Diagnostic {
    pub fn info(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn warning(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
            severity: Severity::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_serialization_field_order() {
        let symbol = Symbol::new(
            SymbolKind::Struct,
            "PublicStruct",
            Visibility::Public,
            Span::new(0, 42),
        );
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"struct","name":"PublicStruct","visibility":"public","span_start":0,"span_end":42}"#
        );
    }

    #[test]
    fn test_other_kind_keeps_tag() {
        let kind = SymbolKind::Other("var_spec".to_string());
        assert_eq!(kind.to_string(), "other:var_spec");
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""other:var_spec""#);
    }

    #[test]
    fn test_visibility_serialization() {
        assert_eq!(serde_json::to_string(&Visibility::Unknown).unwrap(), r#""unknown""#);
    }

    #[test]
    fn test_diagnostic_constructors() {
        let diag = Diagnostic::warning(Location::new(3, 0), "syntax error");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.location.line, 3);
    }
}
