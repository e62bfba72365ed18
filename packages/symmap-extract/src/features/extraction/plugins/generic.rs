//! Generic Fallback Plugin
//!
//! Line-based keyword scanner for languages without a dedicated plugin.
//! Detection is best-effort and never fails; visibility is always Unknown
//! because no language-specific policy applies.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::features::extraction::domain::{FragmentSet, RawFragment};
use crate::features::extraction::ports::{LanguageId, LanguagePlugin, NoVisibility, VisibilityRule};
use crate::shared::models::{Location, Result, Span, SymbolKind};

/// `<modifiers> <keyword> <identifier>` at the start of a line, across the
/// declaration keywords common to C-family and ML-family syntaxes.
static DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^\s*
        (?:(?:pub(?:\([^)]*\))?|public|private|protected|internal|export|static|final|abstract|async|default|sealed|open|data)\s+)*
        (struct|enum|trait|interface|class|fn|func|function|def|const|mod|module|type)
        \s+
        ([A-Za-z_][A-Za-z0-9_]*)
        ",
    )
    .expect("declaration pattern is valid")
});

/// Keyword-driven fallback extractor
pub struct GenericPlugin;

impl GenericPlugin {
    pub fn new() -> Self {
        Self
    }

    fn is_comment_line(line: &str) -> bool {
        let trimmed = line.trim_start();
        trimmed.starts_with("//") || trimmed.starts_with('#') || trimmed.starts_with("/*")
    }
}

impl Default for GenericPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for GenericPlugin {
    fn language_id(&self) -> LanguageId {
        LanguageId::Generic
    }

    fn visibility_rule(&self) -> &dyn VisibilityRule {
        &NoVisibility
    }

    fn map_kind(&self, tag: &str) -> Option<SymbolKind> {
        match tag {
            "struct" | "class" => Some(SymbolKind::Struct),
            "enum" => Some(SymbolKind::Enum),
            "trait" | "interface" => Some(SymbolKind::Trait),
            "fn" | "func" | "function" | "def" => Some(SymbolKind::Function),
            "const" => Some(SymbolKind::Constant),
            "mod" | "module" => Some(SymbolKind::Module),
            // `type` and anything unexpected pass through as Other
            _ => None,
        }
    }

    fn scan(&self, source: &str) -> Result<FragmentSet> {
        let mut set = FragmentSet::new();
        let mut offset = 0usize;

        for (index, line) in source.split_inclusive('\n').enumerate() {
            if !Self::is_comment_line(line) {
                if let Some(captures) = DECLARATION.captures(line) {
                    let keyword = captures.get(1).map(|m| m.as_str()).unwrap_or("");
                    let name = captures.get(2).map(|m| m.as_str()).unwrap_or("");
                    let matched = captures.get(0).map(|m| m.range()).unwrap_or(0..0);
                    let span = Span::new(offset + matched.start, offset + matched.end);
                    let location = Location::new(index as u32 + 1, matched.start as u32);
                    set.add_fragment(
                        RawFragment::new(keyword, span, location).with_name(name),
                    );
                }
            }
            offset += line.len();
        }

        Ok(set)
    }
}
