//! Go Language Plugin
//!
//! Recognizes top-level Go declarations: functions, methods, type specs
//! (structs, interfaces, aliases), constants, and variables. Visibility
//! follows the exported-identifier convention (uppercase initial).

use tree_sitter::{Node as TSNode, Tree};

use crate::features::extraction::domain::{FragmentSet, RawFragment, ScanNote};
use crate::features::extraction::infrastructure::parse_source;
use crate::features::extraction::ports::{
    CaseVisibility, LanguageId, LanguagePlugin, SpanExt, VisibilityRule,
};
use crate::shared::models::{Result, SymbolKind};

/// Go language plugin
pub struct GoPlugin;

impl GoPlugin {
    pub fn new() -> Self {
        Self
    }

    fn collect(&self, source: &str, tree: &Tree) -> FragmentSet {
        let mut set = FragmentSet::new();
        let root = tree.root_node();
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "function_declaration" | "method_declaration" => {
                    let name = child
                        .child_by_field_name("name")
                        .and_then(|n| source.get(n.byte_range()))
                        .unwrap_or("");
                    set.add_fragment(
                        RawFragment::new(child.kind(), child.byte_span(), child.location())
                            .with_name(name),
                    );
                }
                "type_declaration" => self.collect_type_specs(source, &child, &mut set),
                "const_declaration" => self.collect_value_specs(source, &child, "const_spec", &mut set),
                "var_declaration" => self.collect_value_specs(source, &child, "var_spec", &mut set),
                "ERROR" => {
                    set.add_note(ScanNote::new(
                        child.location(),
                        "syntax error: unparsable declaration fragment",
                    ));
                }
                // package clause, imports, comments
                _ => {}
            }
        }
        set
    }

    /// One fragment per type spec; the tag is the underlying type's node
    /// kind so struct and interface types classify differently.
    fn collect_type_specs(&self, source: &str, decl: &TSNode, set: &mut FragmentSet) {
        let mut cursor = decl.walk();
        for spec in decl.children(&mut cursor) {
            if spec.kind() != "type_spec" && spec.kind() != "type_alias" {
                continue;
            }
            let name = spec
                .child_by_field_name("name")
                .and_then(|n| source.get(n.byte_range()))
                .unwrap_or("");
            let tag = if spec.kind() == "type_alias" {
                "type_alias"
            } else {
                spec.child_by_field_name("type")
                    .map(|t| t.kind())
                    .unwrap_or("type_spec")
            };
            set.add_fragment(
                RawFragment::new(tag, spec.byte_span(), spec.location()).with_name(name),
            );
        }
    }

    /// One fragment per declared name; `const x, y = 1, 2` yields two.
    fn collect_value_specs(&self, source: &str, decl: &TSNode, spec_kind: &str, set: &mut FragmentSet) {
        let mut cursor = decl.walk();
        for spec in decl.children(&mut cursor) {
            if spec.kind() != spec_kind {
                continue;
            }
            let mut name_cursor = spec.walk();
            for name_node in spec.children_by_field_name("name", &mut name_cursor) {
                let name = source.get(name_node.byte_range()).unwrap_or("");
                set.add_fragment(
                    RawFragment::new(spec_kind, spec.byte_span(), spec.location()).with_name(name),
                );
            }
        }
    }
}

impl Default for GoPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for GoPlugin {
    fn language_id(&self) -> LanguageId {
        LanguageId::Go
    }

    fn visibility_rule(&self) -> &dyn VisibilityRule {
        &CaseVisibility
    }

    fn map_kind(&self, tag: &str) -> Option<SymbolKind> {
        match tag {
            "struct_type" => Some(SymbolKind::Struct),
            "interface_type" => Some(SymbolKind::Trait),
            "function_declaration" | "method_declaration" => Some(SymbolKind::Function),
            "const_spec" => Some(SymbolKind::Constant),
            // type aliases and var specs pass through as Other
            _ => None,
        }
    }

    fn scan(&self, source: &str) -> Result<FragmentSet> {
        let tree = parse_source(&tree_sitter_go::language(), source)?;
        Ok(self.collect(source, &tree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extraction::application::FileExtractor;
    use crate::shared::models::Visibility;

    const SAMPLE: &str = r#"package sample

import "fmt"
import pkg "os"

const PublicConst = 1
const privateConst = 2

type PublicType struct { Name string }
type privateType interface { Run() }

func PublicFunc(value int) int { return value + 1 }
func privateFunc() { fmt.Println(pkg.PathSeparator) }
func (t PublicType) Method() int { return len(t.Name) }
"#;

    #[test]
    fn test_sample_file_extraction() {
        let outcome = FileExtractor::new().extract(SAMPLE, &GoPlugin::new());
        assert!(outcome.diagnostics.is_empty());

        let names: Vec<&str> = outcome.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "PublicConst",
                "privateConst",
                "PublicType",
                "privateType",
                "PublicFunc",
                "privateFunc",
                "Method"
            ]
        );

        assert_eq!(outcome.symbols[0].kind, SymbolKind::Constant);
        assert_eq!(outcome.symbols[2].kind, SymbolKind::Struct);
        assert_eq!(outcome.symbols[3].kind, SymbolKind::Trait);
        assert_eq!(outcome.symbols[4].kind, SymbolKind::Function);
        assert_eq!(outcome.symbols[6].kind, SymbolKind::Function);

        let visibilities: Vec<Visibility> =
            outcome.symbols.iter().map(|s| s.visibility).collect();
        assert_eq!(
            visibilities,
            [
                Visibility::Public,
                Visibility::Private,
                Visibility::Public,
                Visibility::Private,
                Visibility::Public,
                Visibility::Private,
                Visibility::Public
            ]
        );
    }

    #[test]
    fn test_var_and_alias_pass_through_as_other() {
        let source = "package p\n\nvar Count = 0\n\ntype ID = string\n";
        let outcome = FileExtractor::new().extract(source, &GoPlugin::new());
        assert_eq!(outcome.symbols.len(), 2);
        assert_eq!(
            outcome.symbols[0].kind,
            SymbolKind::Other("var_spec".to_string())
        );
        assert_eq!(outcome.symbols[0].visibility, Visibility::Public);
        assert_eq!(
            outcome.symbols[1].kind,
            SymbolKind::Other("type_alias".to_string())
        );
    }

    #[test]
    fn test_grouped_const_block() {
        let source = "package p\n\nconst (\n\tFirst = 1\n\tsecond = 2\n)\n";
        let outcome = FileExtractor::new().extract(source, &GoPlugin::new());
        let names: Vec<&str> = outcome.symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["First", "second"]);
        assert_eq!(outcome.symbols[0].visibility, Visibility::Public);
        assert_eq!(outcome.symbols[1].visibility, Visibility::Private);
    }
}
