//! Java Language Plugin
//!
//! Recognizes top-level type declarations: classes, interfaces, enums,
//! records, and annotation types. Visibility follows the explicit `public`
//! modifier; package-private, `protected`, and `private` all classify as
//! Private.

use tree_sitter::{Node as TSNode, Tree};

use crate::features::extraction::domain::{FragmentSet, RawFragment, ScanNote};
use crate::features::extraction::infrastructure::parse_source;
use crate::features::extraction::ports::{
    LanguageId, LanguagePlugin, MarkerVisibility, SpanExt, VisibilityRule,
};
use crate::shared::models::{Result, SymbolKind};

/// Java language plugin
pub struct JavaPlugin;

impl JavaPlugin {
    pub fn new() -> Self {
        Self
    }

    fn collect(&self, source: &str, tree: &Tree) -> FragmentSet {
        let mut set = FragmentSet::new();
        let root = tree.root_node();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "class_declaration"
                | "interface_declaration"
                | "enum_declaration"
                | "record_declaration"
                | "annotation_type_declaration" => {
                    let name = child
                        .child_by_field_name("name")
                        .and_then(|n| source.get(n.byte_range()))
                        .unwrap_or("");
                    set.add_fragment(
                        RawFragment::new(child.kind(), child.byte_span(), child.location())
                            .with_name(name)
                            .with_marker(self.has_public_modifier(&child)),
                    );
                }
                "ERROR" => {
                    set.add_note(ScanNote::new(
                        child.location(),
                        "syntax error: unparsable declaration fragment",
                    ));
                }
                // package declaration, imports, comments
                _ => {}
            }
        }
        set
    }

    fn has_public_modifier(&self, node: &TSNode) -> bool {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            if child.kind() == "modifiers" {
                let mut modifier_cursor = child.walk();
                return child
                    .children(&mut modifier_cursor)
                    .any(|m| m.kind() == "public");
            }
        }
        false
    }
}

impl Default for JavaPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for JavaPlugin {
    fn language_id(&self) -> LanguageId {
        LanguageId::Java
    }

    fn visibility_rule(&self) -> &dyn VisibilityRule {
        &MarkerVisibility
    }

    fn map_kind(&self, tag: &str) -> Option<SymbolKind> {
        match tag {
            "class_declaration" | "record_declaration" => Some(SymbolKind::Struct),
            "interface_declaration" => Some(SymbolKind::Trait),
            "enum_declaration" => Some(SymbolKind::Enum),
            // annotation types pass through as Other
            _ => None,
        }
    }

    fn scan(&self, source: &str) -> Result<FragmentSet> {
        let tree = parse_source(&tree_sitter_java::language(), source)?;
        Ok(self.collect(source, &tree))
    }
}
