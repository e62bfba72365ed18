//! Language Plugin Port
//!
//! Defines the contract for language-specific extraction plugins.
//! Each supported language (Rust, Go, Python, Java) implements this trait;
//! the generic fallback implements it too, without a grammar behind it.

use std::collections::HashMap;

use tracing::debug;
use tree_sitter::Node as TSNode;

use crate::features::extraction::domain::FragmentSet;
use crate::features::extraction::ports::VisibilityRule;
use crate::shared::models::{ExtractError, Location, Result, Span, SymbolKind};

/// Language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Rust,
    Go,
    Python,
    Java,
    /// The degraded line-based fallback, outside the registry table
    Generic,
}

impl LanguageId {
    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Rust => "rust",
            LanguageId::Go => "go",
            LanguageId::Python => "python",
            LanguageId::Java => "java",
            LanguageId::Generic => "generic",
        }
    }

    /// Resolve a caller-supplied hint (extension or language name)
    ///
    /// The hint is an opaque string key; no file I/O and no extension
    /// inference happens here. `Generic` is never resolved from a hint.
    pub fn from_hint(hint: &str) -> Option<Self> {
        match hint.to_lowercase().as_str() {
            "rs" | "rust" => Some(LanguageId::Rust),
            "go" | "golang" => Some(LanguageId::Go),
            "py" | "pyi" | "python" => Some(LanguageId::Python),
            "java" => Some(LanguageId::Java),
            _ => None,
        }
    }

    /// Get supported file extensions
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Rust => &["rs"],
            LanguageId::Go => &["go"],
            LanguageId::Python => &["py", "pyi"],
            LanguageId::Java => &["java"],
            LanguageId::Generic => &[],
        }
    }
}

/// Language plugin trait
///
/// A plugin is a stateless, pure function of source text: it recognizes
/// top-level declaration fragments and supplies the vocabulary mappings the
/// classifier normalizes through. Implementations hold no mutable state and
/// are safe to drive concurrently across files.
pub trait LanguagePlugin: Send + Sync {
    /// Get the language identifier
    fn language_id(&self) -> LanguageId;

    /// The visibility policy for this language
    fn visibility_rule(&self) -> &dyn VisibilityRule;

    /// Map the plugin's kind vocabulary onto the shared `SymbolKind` set
    ///
    /// `None` means the classifier passes the tag through as `Other`.
    fn map_kind(&self, tag: &str) -> Option<SymbolKind>;

    /// Enumerate top-level declaration fragments in source order
    ///
    /// Per-fragment parse problems are reported as notes inside the set;
    /// `Err` is reserved for catastrophic failures (grammar setup, input the
    /// parser cannot process at all).
    fn scan(&self, source: &str) -> Result<FragmentSet>;

    /// Get supported file extensions
    fn extensions(&self) -> &'static [&'static str] {
        self.language_id().extensions()
    }

    /// Check if this plugin answers to a hint
    fn supports(&self, hint: &str) -> bool {
        LanguageId::from_hint(hint) == Some(self.language_id())
    }
}

impl std::fmt::Debug for dyn LanguagePlugin + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguagePlugin")
            .field("language_id", &self.language_id())
            .finish()
    }
}

/// Registry for language plugins
///
/// Pure lookup over a table populated at construction time; read-only
/// afterwards, so a single registry can be shared across worker threads.
pub struct ExtractorRegistry {
    plugins: HashMap<LanguageId, Box<dyn LanguagePlugin>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            plugins: HashMap::new(),
        }
    }

    /// Register a language plugin
    pub fn register(&mut self, plugin: Box<dyn LanguagePlugin>) {
        self.plugins.insert(plugin.language_id(), plugin);
    }

    /// Resolve a language hint to its plugin
    ///
    /// Unknown hints are a recoverable `NotSupported` error, never a panic;
    /// callers decide whether to skip the file or fall back to the generic
    /// extractor.
    pub fn resolve(&self, hint: &str) -> Result<&dyn LanguagePlugin> {
        let lang = LanguageId::from_hint(hint)
            .ok_or_else(|| ExtractError::not_supported(format!("no plugin for hint `{}`", hint)))?;
        debug!(hint, language = lang.name(), "resolved language hint");
        self.plugins.get(&lang).map(|p| p.as_ref()).ok_or_else(|| {
            ExtractError::not_supported(format!("language `{}` is not registered", lang.name()))
        })
    }

    /// Get plugin by language ID
    pub fn get(&self, lang: LanguageId) -> Option<&dyn LanguagePlugin> {
        self.plugins.get(&lang).map(|p| p.as_ref())
    }

    /// Get all registered plugins
    pub fn all(&self) -> impl Iterator<Item = &dyn LanguagePlugin> {
        self.plugins.values().map(|p| p.as_ref())
    }

    /// Check if any plugin answers to the hint
    pub fn supports(&self, hint: &str) -> bool {
        self.resolve(hint).is_ok()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper trait for extracting spans and locations from tree-sitter nodes
pub trait SpanExt {
    fn byte_span(&self) -> Span;
    fn location(&self) -> Location;
}

impl SpanExt for TSNode<'_> {
    fn byte_span(&self) -> Span {
        Span::new(self.start_byte(), self.end_byte())
    }

    fn location(&self) -> Location {
        Location::new(
            self.start_position().row as u32 + 1,
            self.start_position().column as u32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::ErrorKind;

    #[test]
    fn test_language_id_from_hint() {
        assert_eq!(LanguageId::from_hint("rs"), Some(LanguageId::Rust));
        assert_eq!(LanguageId::from_hint("rust"), Some(LanguageId::Rust));
        assert_eq!(LanguageId::from_hint("GO"), Some(LanguageId::Go));
        assert_eq!(LanguageId::from_hint("py"), Some(LanguageId::Python));
        assert_eq!(LanguageId::from_hint("pyi"), Some(LanguageId::Python));
        assert_eq!(LanguageId::from_hint("java"), Some(LanguageId::Java));
        assert_eq!(LanguageId::from_hint("cob"), None);
        assert_eq!(LanguageId::from_hint("generic"), None);
    }

    #[test]
    fn test_empty_registry_resolve_is_not_supported() {
        let registry = ExtractorRegistry::new();
        let err = registry.resolve("rs").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotSupported);

        let err = registry.resolve("cob").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotSupported);
        assert!(!registry.supports("cob"));
    }
}
