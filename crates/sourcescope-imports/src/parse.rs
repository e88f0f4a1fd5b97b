use std::fs;
use std::path::Path;

use sourcescope_core::ImportDeclaration;
use tracing::debug;
use tree_sitter::{Node, Parser};

use crate::{ImportParseError, Result};

/// The header of a Go source file: its package name and the leading imports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSection {
    pub package_name: String,
    pub imports: Vec<ImportDeclaration>,
}

impl ImportSection {
    pub fn import_paths(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(|import| import.path.as_str())
    }
}

/// Reads `path` and extracts its import section.
///
/// # Errors
///
/// Returns [`ImportParseError::Read`] if the file cannot be read as UTF-8 text, or any
/// error from [`parse_imports`].
pub fn read_imports(path: &Path) -> Result<ImportSection> {
    let source = fs::read_to_string(path).map_err(|source| ImportParseError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_imports(&source, path)
}

/// Extracts the package clause and the leading `import` declarations of `source`.
///
/// Only top-level nodes up to the end of the import section are inspected. Syntax
/// errors further down the file (inside function bodies, for example) are ignored.
///
/// # Errors
///
/// Returns [`ImportParseError::MissingPackageClause`] if the file does not start with a
/// package clause, and [`ImportParseError::MalformedImports`] if the package clause or an
/// import declaration contains a syntax error. `path` is used for error reporting only.
pub fn parse_imports(source: &str, path: &Path) -> Result<ImportSection> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ImportParseError::NoTree {
            path: path.to_path_buf(),
        })?;
    let root = tree.root_node();
    let text = source.as_bytes();

    if root.is_error() {
        return Err(malformed(path, root));
    }

    let mut package_name = None;
    let mut imports = Vec::new();
    let mut cursor = root.walk();

    for node in root.children(&mut cursor) {
        match node.kind() {
            "comment" => {}
            "package_clause" if package_name.is_none() => {
                if node.has_error() {
                    return Err(malformed(path, node));
                }
                let name = package_identifier(node, text).ok_or_else(|| malformed(path, node))?;
                package_name = Some(name);
            }
            "import_declaration" if package_name.is_some() => {
                if node.has_error() {
                    return Err(malformed(path, node));
                }
                collect_specs(node, text, &mut imports);
            }
            _ if package_name.is_none() => {
                if node.is_error() || node.is_missing() {
                    return Err(malformed(path, node));
                }
                return Err(ImportParseError::MissingPackageClause {
                    path: path.to_path_buf(),
                });
            }
            // Explicit `;` terminators.
            _ if !node.is_named() && !node.is_missing() => {}
            _ if node.is_error() && contains_import_keyword(node) => {
                return Err(malformed(path, node));
            }
            _ => break,
        }
    }

    let package_name = package_name.ok_or_else(|| ImportParseError::MissingPackageClause {
        path: path.to_path_buf(),
    })?;

    debug!(
        path = %path.display(),
        package = %package_name,
        imports = imports.len(),
        "parsed import section"
    );

    Ok(ImportSection {
        package_name,
        imports,
    })
}

fn malformed(path: &Path, node: Node<'_>) -> ImportParseError {
    ImportParseError::MalformedImports {
        path: path.to_path_buf(),
        line: node.start_position().row + 1,
    }
}

fn package_identifier(clause: Node<'_>, text: &[u8]) -> Option<String> {
    let mut cursor = clause.walk();
    clause
        .children(&mut cursor)
        .find(|child| child.kind() == "package_identifier")
        .and_then(|child| child.utf8_text(text).ok())
        .map(str::to_string)
}

fn collect_specs(declaration: Node<'_>, text: &[u8], imports: &mut Vec<ImportDeclaration>) {
    let mut cursor = declaration.walk();
    for child in declaration.children(&mut cursor) {
        match child.kind() {
            "import_spec" => imports.extend(import_spec(child, text)),
            "import_spec_list" => {
                let mut list_cursor = child.walk();
                imports.extend(
                    child
                        .children(&mut list_cursor)
                        .filter(|spec| spec.kind() == "import_spec")
                        .filter_map(|spec| import_spec(spec, text)),
                );
            }
            _ => {}
        }
    }
}

fn import_spec(spec: Node<'_>, text: &[u8]) -> Option<ImportDeclaration> {
    let path = spec
        .child_by_field_name("path")?
        .utf8_text(text)
        .ok()?
        .trim_matches(|c: char| c == '"' || c == '`');

    if path.is_empty() {
        return None;
    }

    let import = ImportDeclaration::new(path);
    match spec
        .child_by_field_name("name")
        .and_then(|name| name.utf8_text(text).ok())
    {
        Some(name) => Some(import.with_name(name)),
        None => Some(import),
    }
}

// A top-level error node holding an `import` keyword means the import section
// itself failed to parse.
fn contains_import_keyword(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .any(|child| child.kind() == "import" || contains_import_keyword(child))
}
