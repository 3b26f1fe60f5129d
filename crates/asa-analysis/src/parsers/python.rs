//! Python import extractor using native tree-sitter.
//!
//! Only the import statement forms are inspected:
//! - `import a.b, c as d` contributes `a.b` and `c`
//! - `from a.b import x` contributes `a.b`
//!
//! Relative imports and `from __future__ import ...` contribute nothing.
//! Imports nested in functions, classes, or `try` blocks are found too.

use std::path::Path;

use tree_sitter::{Node, Parser};

use asa_core::errors::ParseError;

use super::error_tolerant::count_errors;
use super::traits::{ImportExtractor, ImportSet};

#[derive(Debug, Default, Clone, Copy)]
pub struct PythonImportExtractor;

impl PythonImportExtractor {
    pub fn new() -> Self {
        Self
    }

    fn parser() -> Result<Parser, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ParseError::GrammarUnavailable {
                language: "python".to_string(),
                message: e.to_string(),
            })?;
        Ok(parser)
    }
}

impl ImportExtractor for PythonImportExtractor {
    fn language(&self) -> &'static str {
        "python"
    }

    fn extensions(&self) -> &[&str] {
        &["py", "pyi"]
    }

    fn extract_imports(&self, source: &[u8], path: &Path) -> Result<ImportSet, ParseError> {
        if std::str::from_utf8(source).is_err() {
            return Err(ParseError::InvalidEncoding {
                path: path.to_path_buf(),
            });
        }

        let mut parser = Self::parser()?;
        let tree = parser.parse(source, None).ok_or_else(|| ParseError::NoTree {
            path: path.to_path_buf(),
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ParseError::SyntaxErrors {
                path: path.to_path_buf(),
                error_count: count_errors(root),
            });
        }

        let mut imports = ImportSet::new();
        collect_imports(root, source, &mut imports);
        Ok(imports)
    }
}

/// Depth-first walk over an explicit stack; nesting depth never grows the call stack.
fn collect_imports(root: Node<'_>, source: &[u8], out: &mut ImportSet) {
    let mut stack = vec![root];
    let mut cursor = root.walk();

    while let Some(node) = stack.pop() {
        match node.kind() {
            "import_statement" => {
                let mut names = node.walk();
                for name in node.children_by_field_name("name", &mut names) {
                    let dotted = match name.kind() {
                        "aliased_import" => name.child_by_field_name("name"),
                        "dotted_name" => Some(name),
                        _ => None,
                    };
                    if let Some(module) = dotted.and_then(|n| dotted_name(n, source)) {
                        out.insert(module);
                    }
                }
            }
            "import_from_statement" => {
                // `module_name` is a `relative_import` for `from .x import y`; skipped.
                if let Some(module) = node
                    .child_by_field_name("module_name")
                    .filter(|n| n.kind() == "dotted_name")
                    .and_then(|n| dotted_name(n, source))
                {
                    out.insert(module);
                }
            }
            _ => {
                cursor.reset(node);
                if cursor.goto_first_child() {
                    loop {
                        if cursor.node().is_named() {
                            stack.push(cursor.node());
                        }
                        if !cursor.goto_next_sibling() {
                            break;
                        }
                    }
                }
            }
        }
    }
}

/// `a . b` and `a.b` both normalize to `a.b`.
fn dotted_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    let parts: Vec<&str> = node
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "identifier")
        .filter_map(|n| n.utf8_text(source).ok())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("."))
    }
}
