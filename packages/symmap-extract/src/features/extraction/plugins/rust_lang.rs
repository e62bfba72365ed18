//! Rust Language Plugin
//!
//! Recognizes top-level Rust declarations: structs, enums, traits,
//! functions, constants, statics, and modules (recursing into inline module
//! bodies). Visibility follows the explicit `pub` marker.

use tree_sitter::{Node as TSNode, Tree};

use crate::features::extraction::domain::{FragmentSet, RawFragment, ScanNote};
use crate::features::extraction::infrastructure::parse_source;
use crate::features::extraction::ports::{
    LanguageId, LanguagePlugin, MarkerVisibility, SpanExt, VisibilityRule,
};
use crate::shared::models::{Result, SymbolKind};

/// Rust language plugin
pub struct RustPlugin;

impl RustPlugin {
    pub fn new() -> Self {
        Self
    }

    fn collect(&self, source: &str, tree: &Tree) -> FragmentSet {
        let mut set = FragmentSet::new();
        self.collect_items(source, &tree.root_node(), &mut set);
        set
    }

    /// Walk one item container (source file or inline module body)
    fn collect_items(&self, source: &str, container: &TSNode, set: &mut FragmentSet) {
        let mut cursor = container.walk();
        for child in container.children(&mut cursor) {
            match child.kind() {
                "struct_item" | "enum_item" | "trait_item" | "function_item" | "const_item"
                | "static_item" | "type_item" | "union_item" | "macro_definition" => {
                    set.add_fragment(self.item_fragment(source, &child));
                }
                "mod_item" => {
                    set.add_fragment(self.item_fragment(source, &child));
                    // Inline module bodies surface their items at depth
                    if let Some(body) = child.child_by_field_name("body") {
                        self.collect_items(source, &body, set);
                    }
                }
                "ERROR" => {
                    set.add_note(ScanNote::new(
                        child.location(),
                        "syntax error: unparsable declaration fragment",
                    ));
                }
                // impl blocks, use declarations, attributes, comments
                _ => {}
            }
        }
    }

    fn item_fragment(&self, source: &str, node: &TSNode) -> RawFragment {
        let name = node
            .child_by_field_name("name")
            .and_then(|n| source.get(n.byte_range()))
            .unwrap_or("");

        RawFragment::new(node.kind(), node.byte_span(), node.location())
            .with_name(name)
            .with_marker(self.has_visibility_modifier(node))
    }

    fn has_visibility_modifier(&self, node: &TSNode) -> bool {
        let mut cursor = node.walk();
        let has_modifier = node
            .children(&mut cursor)
            .any(|c| c.kind() == "visibility_modifier");
        has_modifier
    }
}

impl Default for RustPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for RustPlugin {
    fn language_id(&self) -> LanguageId {
        LanguageId::Rust
    }

    fn visibility_rule(&self) -> &dyn VisibilityRule {
        &MarkerVisibility
    }

    fn map_kind(&self, tag: &str) -> Option<SymbolKind> {
        match tag {
            "struct_item" => Some(SymbolKind::Struct),
            "enum_item" => Some(SymbolKind::Enum),
            "trait_item" => Some(SymbolKind::Trait),
            "function_item" => Some(SymbolKind::Function),
            "const_item" | "static_item" => Some(SymbolKind::Constant),
            "mod_item" => Some(SymbolKind::Module),
            _ => None,
        }
    }

    fn scan(&self, source: &str) -> Result<FragmentSet> {
        let tree = parse_source(&tree_sitter_rust::language(), source)?;
        Ok(self.collect(source, &tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extraction::application::FileExtractor;
    use crate::shared::models::Visibility;

    const SAMPLE: &str = r#"use std::collections::{HashMap, HashSet};
use std::fmt;

pub struct PublicStruct {
    value: i32,
}
struct PrivateStruct {
    value: i32,
}

pub enum PublicEnum {
    One,
    Two,
}
pub trait PublicTrait {
    fn run(&self);
}

pub const PUBLIC_CONST: i32 = 1;
const PRIVATE_CONST: i32 = 2;

pub fn public_fn() -> i32 {
    1
}
fn private_fn() -> i32 {
    2
}
"#;

    #[test]
    fn test_sample_file_extraction() {
        let outcome = FileExtractor::new().extract(SAMPLE, &RustPlugin::new());
        assert!(outcome.diagnostics.is_empty());

        let names: Vec<&str> = outcome.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "PublicStruct",
                "PrivateStruct",
                "PublicEnum",
                "PublicTrait",
                "PUBLIC_CONST",
                "PRIVATE_CONST",
                "public_fn",
                "private_fn"
            ]
        );

        let kinds: Vec<SymbolKind> = outcome.symbols.iter().map(|s| s.kind.clone()).collect();
        assert_eq!(
            kinds,
            [
                SymbolKind::Struct,
                SymbolKind::Struct,
                SymbolKind::Enum,
                SymbolKind::Trait,
                SymbolKind::Constant,
                SymbolKind::Constant,
                SymbolKind::Function,
                SymbolKind::Function
            ]
        );

        let visibilities: Vec<Visibility> =
            outcome.symbols.iter().map(|s| s.visibility).collect();
        assert_eq!(
            visibilities,
            [
                Visibility::Public,
                Visibility::Private,
                Visibility::Public,
                Visibility::Public,
                Visibility::Public,
                Visibility::Private,
                Visibility::Public,
                Visibility::Private
            ]
        );
    }

    #[test]
    fn test_marker_flips_visibility() {
        let plugin = RustPlugin::new();
        let extractor = FileExtractor::new();

        let marked = extractor.extract("pub struct Point { x: i32 }", &plugin);
        assert_eq!(marked.symbols[0].visibility, Visibility::Public);

        let unmarked = extractor.extract("struct Point { x: i32 }", &plugin);
        assert_eq!(unmarked.symbols[0].visibility, Visibility::Private);
    }

    #[test]
    fn test_span_reslices_declaration_text() {
        let source = "pub struct Point {\n    x: i32,\n}\n";
        let outcome = FileExtractor::new().extract(source, &RustPlugin::new());
        let span = outcome.symbols[0].span;
        let text = span.slice(source).unwrap();
        assert!(text.starts_with("pub struct Point"));
        assert!(text.ends_with('}'));
    }

    #[test]
    fn test_inline_module_items_surface() {
        let source = r#"pub mod outer {
    pub fn inner_fn() {}
    struct InnerStruct;
}
fn after() {}
"#;
        let outcome = FileExtractor::new().extract(source, &RustPlugin::new());
        let names: Vec<&str> = outcome.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["outer", "inner_fn", "InnerStruct", "after"]);
        assert_eq!(outcome.symbols[0].kind, SymbolKind::Module);
        assert_eq!(outcome.symbols[0].visibility, Visibility::Public);
        assert_eq!(outcome.symbols[2].visibility, Visibility::Private);
    }

    #[test]
    fn test_static_and_type_alias() {
        let source = "pub static COUNTER: u32 = 0;\ntype Alias = u32;\n";
        let outcome = FileExtractor::new().extract(source, &RustPlugin::new());
        assert_eq!(outcome.symbols.len(), 2);
        assert_eq!(outcome.symbols[0].kind, SymbolKind::Constant);
        assert_eq!(
            outcome.symbols[1].kind,
            SymbolKind::Other("type_item".to_string())
        );
    }

    #[test]
    fn test_malformed_declaration_does_not_halt() {
        let source = "pub struct Good { x: i32 }\n???;\npub fn also_good() {}\n";
        let outcome = FileExtractor::new().extract(source, &RustPlugin::new());

        let names: Vec<&str> = outcome.symbols.iter().map(|s| s.name.as_str()).collect();
        assert!(names.contains(&"Good"));
        assert!(names.contains(&"also_good"));
        assert!(!outcome.diagnostics.is_empty());
    }
}
