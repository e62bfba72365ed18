//! Raw declaration fragments
//!
//! The plugin-facing intermediate representation: one fragment per
//! recognized top-level declaration, carrying the language-specific kind tag
//! and the generic visibility evidence the stock rules interpret.

use crate::shared::models::{Location, Span};

/// One top-level declaration as recognized by a plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFragment {
    /// Plugin vocabulary for the declaration kind (e.g. a grammar node kind)
    pub tag: String,
    /// Name token text, if one was found
    pub name: Option<String>,
    /// Byte span of the whole declaration in the scanned source
    pub span: Span,
    /// Line/column of the declaration start, for diagnostics
    pub location: Location,
    /// Explicit visibility modifier present (keyword-family languages)
    pub has_marker: bool,
    /// Export-list membership: `Some(listed)` when the file has an export
    /// list, `None` when it has none
    pub export_listed: Option<bool>,
}

impl RawFragment {
    pub fn new(tag: impl Into<String>, span: Span, location: Location) -> Self {
        Self {
            tag: tag.into(),
            name: None,
            span,
            location,
            has_marker: false,
            export_listed: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.name = Some(name);
        }
        self
    }

    pub fn with_marker(mut self, has_marker: bool) -> Self {
        self.has_marker = has_marker;
        self
    }

    pub fn with_export_listed(mut self, listed: bool) -> Self {
        self.export_listed = Some(listed);
        self
    }
}

/// A parse problem local to one fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanNote {
    pub location: Location,
    pub message: String,
}

impl ScanNote {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// Result of scanning a single file
///
/// Fragments are kept in source order; notes record declarations the plugin
/// itself could not parse, which the file extractor turns into diagnostics.
#[derive(Debug, Default)]
pub struct FragmentSet {
    pub fragments: Vec<RawFragment>,
    pub notes: Vec<ScanNote>,
}

impl FragmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_fragment(&mut self, fragment: RawFragment) {
        self.fragments.push(fragment);
    }

    pub fn add_note(&mut self, note: ScanNote) {
        self.notes.push(note);
    }

    pub fn merge(&mut self, other: FragmentSet) {
        self.fragments.extend(other.fragments);
        self.notes.extend(other.notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_name_ignores_empty() {
        let frag = RawFragment::new("struct_item", Span::zero(), Location::start()).with_name("");
        assert_eq!(frag.name, None);
    }

    #[test]
    fn test_merge_keeps_order() {
        let mut a = FragmentSet::new();
        a.add_fragment(RawFragment::new("first", Span::new(0, 4), Location::new(1, 0)));
        let mut b = FragmentSet::new();
        b.add_fragment(RawFragment::new("second", Span::new(5, 9), Location::new(2, 0)));
        b.add_note(ScanNote::new(Location::new(3, 0), "oops"));

        a.merge(b);
        assert_eq!(a.fragments.len(), 2);
        assert_eq!(a.fragments[0].tag, "first");
        assert_eq!(a.fragments[1].tag, "second");
        assert_eq!(a.notes.len(), 1);
    }
}
