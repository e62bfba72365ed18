//! Language plugin implementations
//!
//! One plugin per supported language plus the keyword-based generic
//! fallback. Registry builders live here so callers get a populated table
//! without naming individual plugins.

pub mod generic;
pub mod go;
pub mod java;
pub mod python;
pub mod rust_lang;

pub use generic::GenericPlugin;
pub use go::GoPlugin;
pub use java::JavaPlugin;
pub use python::PythonPlugin;
pub use rust_lang::RustPlugin;

use once_cell::sync::Lazy;

use crate::features::extraction::ports::{ExtractorRegistry, LanguageId};

/// Registry with every dedicated language plugin registered
///
/// The generic fallback is intentionally absent: it answers to no hint and
/// is reached only through `SymbolExtractor::extract_or_generic`.
pub fn create_full_registry() -> ExtractorRegistry {
    create_registry(&[
        LanguageId::Rust,
        LanguageId::Go,
        LanguageId::Python,
        LanguageId::Java,
    ])
}

/// Registry restricted to the given languages
pub fn create_registry(languages: &[LanguageId]) -> ExtractorRegistry {
    let mut registry = ExtractorRegistry::new();
    for language in languages {
        match language {
            LanguageId::Rust => registry.register(Box::new(RustPlugin::new())),
            LanguageId::Go => registry.register(Box::new(GoPlugin::new())),
            LanguageId::Python => registry.register(Box::new(PythonPlugin::new())),
            LanguageId::Java => registry.register(Box::new(JavaPlugin::new())),
            LanguageId::Generic => registry.register(Box::new(GenericPlugin::new())),
        }
    }
    registry
}

static DEFAULT_REGISTRY: Lazy<ExtractorRegistry> = Lazy::new(create_full_registry);

/// Process-wide shared registry with all dedicated plugins
pub fn default_registry() -> &'static ExtractorRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_registry_resolves_all_hints() {
        let registry = create_full_registry();
        assert_eq!(registry.len(), 4);
        for hint in ["rust", "rs", "go", "golang", "python", "py", "java"] {
            assert!(registry.supports(hint), "hint {hint} should resolve");
        }
        assert!(!registry.supports("cobol"));
    }

    #[test]
    fn test_restricted_registry() {
        let registry = create_registry(&[LanguageId::Rust]);
        assert_eq!(registry.len(), 1);
        assert!(registry.supports("rs"));
        assert!(!registry.supports("go"));
    }

    #[test]
    fn test_default_registry_is_shared() {
        let first = default_registry() as *const ExtractorRegistry;
        let second = default_registry() as *const ExtractorRegistry;
        assert_eq!(first, second);
    }
}
