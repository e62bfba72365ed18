//! Declaration Classifier
//!
//! Normalizes a plugin's raw fragment into a `Symbol`: kind vocabulary maps
//! through the plugin, visibility goes through the plugin's rule, and the
//! name is trimmed and validated. The classifier itself never branches on
//! language.

use crate::features::extraction::ports::LanguagePlugin;
use crate::shared::models::{ExtractError, Result, Symbol, SymbolKind};

use super::RawFragment;

/// Stateless fragment-to-symbol normalizer
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Normalize one fragment
    ///
    /// Fails with `MalformedFragment` when no identifiable name token
    /// exists; the file extractor converts that into a diagnostic rather
    /// than propagating a hard failure.
    pub fn classify(&self, plugin: &dyn LanguagePlugin, fragment: RawFragment) -> Result<Symbol> {
        let name = fragment
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                ExtractError::malformed_fragment(format!(
                    "declaration `{}` has no name token",
                    fragment.tag
                ))
                .with_line(fragment.location.line)
            })?;

        let visibility = plugin.visibility_rule().visibility(&fragment);
        let kind = plugin
            .map_kind(&fragment.tag)
            .unwrap_or_else(|| SymbolKind::Other(fragment.tag.clone()));

        Ok(Symbol::new(kind, name, visibility, fragment.span))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
