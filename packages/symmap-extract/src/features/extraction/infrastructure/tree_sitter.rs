//! Tree-sitter parsing helper
//!
//! This is where the tree-sitter runtime dependency lives. A fresh parser is
//! constructed per call so plugins stay stateless and safe to run
//! concurrently across files.

use tree_sitter::{Language as TSLanguage, Parser as TSParser, Tree};

use crate::shared::models::{ExtractError, Result};

/// Parse one source buffer with the given grammar
///
/// Grammar setup failure is an internal error; a parser that produces no
/// tree at all is the catastrophic case surfaced as `UnreadableSource`.
pub fn parse_source(language: &TSLanguage, source: &str) -> Result<Tree> {
    let mut parser = TSParser::new();
    parser
        .set_language(language)
        .map_err(|e| ExtractError::internal(format!("failed to set grammar: {}", e)))?;

    parser
        .parse(source, None)
        .ok_or_else(|| ExtractError::unreadable_source("parser produced no syntax tree"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rust_source() {
        let tree = parse_source(&tree_sitter_rust::language(), "fn main() {}").unwrap();
        assert_eq!(tree.root_node().kind(), "source_file");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_parse_is_total_over_garbage() {
        // Malformed but textually bounded input still yields a tree
        let tree = parse_source(&tree_sitter_rust::language(), "pub pub pub {{{").unwrap();
        assert!(tree.root_node().has_error());
    }
}
