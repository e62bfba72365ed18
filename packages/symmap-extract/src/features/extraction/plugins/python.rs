//! Python Language Plugin
//!
//! Recognizes module-level `def`/`async def` and `class` declarations
//! (decorated definitions unwrapped) plus SCREAMING_CASE module constants.
//! Visibility follows the `__all__` export list when one is assigned, and
//! the leading-underscore convention otherwise.

use std::collections::HashSet;

use tree_sitter::{Node as TSNode, Tree};

use crate::features::extraction::domain::{FragmentSet, RawFragment, ScanNote};
use crate::features::extraction::infrastructure::parse_source;
use crate::features::extraction::ports::{
    ExportListVisibility, LanguageId, LanguagePlugin, SpanExt, VisibilityRule,
};
use crate::shared::models::{Result, SymbolKind};

/// Python language plugin
pub struct PythonPlugin;

impl PythonPlugin {
    pub fn new() -> Self {
        Self
    }

    fn collect(&self, source: &str, tree: &Tree) -> FragmentSet {
        let mut set = FragmentSet::new();
        let root = tree.root_node();
        let export_list = self.export_list(source, &root);

        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            match child.kind() {
                "function_definition" | "class_definition" => {
                    self.collect_definition(source, &child, export_list.as_ref(), &mut set);
                }
                "decorated_definition" => {
                    if let Some(def) = child.child_by_field_name("definition") {
                        self.collect_definition(source, &def, export_list.as_ref(), &mut set);
                    }
                }
                "expression_statement" => {
                    self.collect_assignment(source, &child, export_list.as_ref(), &mut set);
                }
                "ERROR" => {
                    set.add_note(ScanNote::new(
                        child.location(),
                        "syntax error: unparsable declaration fragment",
                    ));
                }
                // imports, docstrings, comments
                _ => {}
            }
        }
        set
    }

    fn collect_definition(
        &self,
        source: &str,
        node: &TSNode,
        export_list: Option<&HashSet<String>>,
        set: &mut FragmentSet,
    ) {
        let name = node
            .child_by_field_name("name")
            .and_then(|n| source.get(n.byte_range()))
            .unwrap_or("");

        let mut fragment = RawFragment::new(node.kind(), node.byte_span(), node.location())
            .with_name(name);
        if let Some(list) = export_list {
            fragment = fragment.with_export_listed(list.contains(name));
        }
        set.add_fragment(fragment);
    }

    /// Module-level `NAME = value` assignments: SCREAMING_CASE names are
    /// surfaced as constants; the `__all__` assignment itself is the export
    /// list, not a symbol.
    fn collect_assignment(
        &self,
        source: &str,
        stmt: &TSNode,
        export_list: Option<&HashSet<String>>,
        set: &mut FragmentSet,
    ) {
        let Some(assignment) = self.simple_assignment(stmt) else {
            return;
        };
        let Some(name) = self.assignment_target(source, &assignment) else {
            return;
        };
        if name == "__all__" || !Self::is_screaming_case(&name) {
            return;
        }

        let mut fragment =
            RawFragment::new("assignment", assignment.byte_span(), assignment.location())
                .with_name(name.as_str());
        if let Some(list) = export_list {
            fragment = fragment.with_export_listed(list.contains(&name));
        }
        set.add_fragment(fragment);
    }

    /// Parse the `__all__ = [...]` export list, if the module has one
    fn export_list(&self, source: &str, root: &TSNode) -> Option<HashSet<String>> {
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() != "expression_statement" {
                continue;
            }
            let Some(assignment) = self.simple_assignment(&child) else {
                continue;
            };
            if self.assignment_target(source, &assignment).as_deref() != Some("__all__") {
                continue;
            }
            let right = assignment.child_by_field_name("right")?;
            if right.kind() != "list" {
                continue;
            }

            let mut names = HashSet::new();
            let mut list_cursor = right.walk();
            for element in right.named_children(&mut list_cursor) {
                if element.kind() == "string" {
                    if let Some(text) = source.get(element.byte_range()) {
                        names.insert(text.trim_matches(|c| c == '"' || c == '\'').to_string());
                    }
                }
            }
            return Some(names);
        }
        None
    }

    fn simple_assignment<'a>(&self, stmt: &TSNode<'a>) -> Option<TSNode<'a>> {
        let inner = stmt.named_child(0)?;
        (inner.kind() == "assignment").then_some(inner)
    }

    fn assignment_target(&self, source: &str, assignment: &TSNode) -> Option<String> {
        let left = assignment.child_by_field_name("left")?;
        if left.kind() != "identifier" {
            return None;
        }
        source.get(left.byte_range()).map(str::to_string)
    }

    fn is_screaming_case(name: &str) -> bool {
        name.chars().any(|c| c.is_ascii_uppercase())
            && name
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    }
}

impl Default for PythonPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagePlugin for PythonPlugin {
    fn language_id(&self) -> LanguageId {
        LanguageId::Python
    }

    fn visibility_rule(&self) -> &dyn VisibilityRule {
        &ExportListVisibility
    }

    fn map_kind(&self, tag: &str) -> Option<SymbolKind> {
        match tag {
            "class_definition" => Some(SymbolKind::Struct),
            "function_definition" => Some(SymbolKind::Function),
            "assignment" => Some(SymbolKind::Constant),
            _ => None,
        }
    }

    fn scan(&self, source: &str) -> Result<FragmentSet> {
        let tree = parse_source(&tree_sitter_python::language(), source)?;
        Ok(self.collect(source, &tree))
    }
}
