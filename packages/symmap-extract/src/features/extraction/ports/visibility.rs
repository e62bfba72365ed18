//! Visibility Rule Port
//!
//! Per-language visibility policy as a capability trait. Each plugin selects
//! the rule matching its language family, so adding a language never touches
//! shared classifier logic.

use crate::features::extraction::domain::RawFragment;
use crate::shared::models::Visibility;

/// Visibility policy for one language family
pub trait VisibilityRule: Send + Sync {
    fn visibility(&self, fragment: &RawFragment) -> Visibility;
}

/// Explicit keyword-based modifier on each item (Rust `pub`, Java `public`)
///
/// Modifier present -> Public; absent -> Private, uniformly for every
/// declaration kind.
pub struct MarkerVisibility;

impl VisibilityRule for MarkerVisibility {
    fn visibility(&self, fragment: &RawFragment) -> Visibility {
        if fragment.has_marker {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

/// Exported-identifier convention (Go): uppercase initial -> Public
pub struct CaseVisibility;

impl VisibilityRule for CaseVisibility {
    fn visibility(&self, fragment: &RawFragment) -> Visibility {
        match fragment.name.as_deref().and_then(|n| n.chars().next()) {
            Some(first) if first.is_uppercase() => Visibility::Public,
            Some(_) => Visibility::Private,
            None => Visibility::Unknown,
        }
    }
}

/// File-scoped export list (Python `__all__`)
///
/// Name listed -> Public, not listed -> Private. When the file declares no
/// export list the leading-underscore convention applies instead.
pub struct ExportListVisibility;

impl VisibilityRule for ExportListVisibility {
    fn visibility(&self, fragment: &RawFragment) -> Visibility {
        match fragment.export_listed {
            Some(true) => Visibility::Public,
            Some(false) => Visibility::Private,
            None => match fragment.name.as_deref() {
                Some(name) if name.starts_with('_') => Visibility::Private,
                Some(_) => Visibility::Public,
                None => Visibility::Unknown,
            },
        }
    }
}

/// No visibility concept at the declaration syntax level
///
/// Always `Unknown` — "visibility not asserted", never a synonym for Private.
pub struct NoVisibility;

impl VisibilityRule for NoVisibility {
    fn visibility(&self, _fragment: &RawFragment) -> Visibility {
        Visibility::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Location, Span};

    fn fragment(name: &str) -> RawFragment {
        RawFragment::new("function_item", Span::zero(), Location::start()).with_name(name)
    }

    #[test]
    fn test_marker_rule() {
        let marked = fragment("public_fn").with_marker(true);
        let unmarked = fragment("private_fn");
        assert_eq!(MarkerVisibility.visibility(&marked), Visibility::Public);
        assert_eq!(MarkerVisibility.visibility(&unmarked), Visibility::Private);
    }

    #[test]
    fn test_case_rule() {
        assert_eq!(CaseVisibility.visibility(&fragment("PublicFunc")), Visibility::Public);
        assert_eq!(CaseVisibility.visibility(&fragment("privateFunc")), Visibility::Private);
    }

    #[test]
    fn test_export_list_rule() {
        let listed = fragment("public_function").with_export_listed(true);
        let unlisted = fragment("helper").with_export_listed(false);
        assert_eq!(ExportListVisibility.visibility(&listed), Visibility::Public);
        assert_eq!(ExportListVisibility.visibility(&unlisted), Visibility::Private);
    }

    #[test]
    fn test_export_list_rule_underscore_fallback() {
        assert_eq!(
            ExportListVisibility.visibility(&fragment("_PrivateClass")),
            Visibility::Private
        );
        assert_eq!(
            ExportListVisibility.visibility(&fragment("PublicClass")),
            Visibility::Public
        );
    }

    #[test]
    fn test_no_visibility_rule() {
        assert_eq!(NoVisibility.visibility(&fragment("anything")), Visibility::Unknown);
    }
}
