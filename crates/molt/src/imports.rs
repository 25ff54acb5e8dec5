//! Import binding resolution.
//!
//! Resolves which local identifiers of a file are bound to which exported
//! names of a target package, across default, named, aliased, and namespace
//! import forms, including deep-path specifiers such as
//! `@patternfly/react-table/dist/esm/components/Table/index.js`.

use compact_str::CompactString;
use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier, Program, Statement};
use oxc_span::Span;

/// The import form a binding was introduced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportBindingKind {
    /// `import { Name } from '...'` or `import { Name as Local } from '...'`
    Named,
    /// `import Local from '...'`
    Default,
    /// `import * as Local from '...'`
    Namespace,
}

/// One imported symbol: the name as exported by the package paired with the
/// name it is bound to in the consuming file's scope.
#[derive(Debug, Clone)]
pub struct ImportBinding {
    /// Name as exported by the package (`"default"` for default imports)
    pub imported: CompactString,
    /// Name referenced in the consuming file (equal to `imported` when no
    /// alias is used)
    pub local: CompactString,
    /// Span of the whole specifier, including any `as Local` alias
    pub span: Span,
    /// Import form
    pub kind: ImportBindingKind,
}

impl ImportBinding {
    /// Whether the local name differs from the exported name
    #[inline]
    pub fn is_aliased(&self) -> bool {
        self.imported != self.local
    }
}

/// One import declaration referencing the target package.
///
/// Constructed once per file scan, read-only afterwards, and discarded when
/// the file's analysis completes.
#[derive(Debug, Clone)]
pub struct ImportDeclarationInfo {
    /// Module specifier exactly as written, possibly a deep path
    pub request: CompactString,
    /// Span of the whole declaration statement
    pub span: Span,
    /// Span of the module specifier string (including quotes)
    pub source_span: Span,
    /// Bindings in source order
    pub bindings: Vec<ImportBinding>,
}

/// All import declarations of one file that reference a target package.
#[derive(Debug, Clone)]
pub struct PackageImports {
    /// The package the lookup was performed for
    pub package: CompactString,
    /// Matching declarations in source order
    pub decls: Vec<ImportDeclarationInfo>,
}

impl PackageImports {
    /// Whether the package is imported at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Iterate all bindings across all matching declarations, in source order
    #[inline]
    pub fn bindings(&self) -> impl Iterator<Item = &ImportBinding> {
        self.decls.iter().flat_map(|d| d.bindings.iter())
    }

    /// Find the binding for an exported name, if any
    #[inline]
    pub fn find_imported(&self, exported: &str) -> Option<&ImportBinding> {
        self.bindings().find(|b| b.imported == exported)
    }

    /// Find the binding a local name belongs to, if any
    #[inline]
    pub fn find_local(&self, local: &str) -> Option<&ImportBinding> {
        self.bindings().find(|b| b.local == local)
    }

    /// Whether an exported name is already bound (aliased or not)
    #[inline]
    pub fn has_imported(&self, exported: &str) -> bool {
        self.find_imported(exported).is_some()
    }

    /// The declaration whose statement span equals `span`
    #[inline]
    pub fn decl_at(&self, span: Span) -> Option<&ImportDeclarationInfo> {
        self.decls.iter().find(|d| d.span == span)
    }
}

/// Check whether a module specifier refers to `package`, either exactly or as
/// a deep path below it (`package` followed by a path separator).
#[inline]
pub fn matches_package(request: &str, package: &str) -> bool {
    match request.strip_prefix(package) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Resolve all import declarations of `program` referencing `package`.
///
/// Returns declarations in source order. An empty result means the package is
/// never imported - the common case, and callers must treat it as "rule does
/// not apply", never as a failure.
pub fn resolve_imports(program: &Program<'_>, package: &str) -> PackageImports {
    let mut decls = Vec::new();

    for stmt in &program.body {
        let Statement::ImportDeclaration(decl) = stmt else {
            continue;
        };
        if !matches_package(decl.source.value.as_str(), package) {
            continue;
        }
        decls.push(resolve_declaration(decl));
    }

    PackageImports {
        package: CompactString::from(package),
        decls,
    }
}

/// Build the binding info for a single import declaration.
///
/// Type-only imports and type-only specifiers introduce no runtime binding
/// and are skipped.
pub fn resolve_declaration(decl: &ImportDeclaration<'_>) -> ImportDeclarationInfo {
    let mut bindings = Vec::new();

    if !decl.import_kind.is_type() {
        if let Some(specifiers) = &decl.specifiers {
            for spec in specifiers {
                match spec {
                    ImportDeclarationSpecifier::ImportSpecifier(s) => {
                        if s.import_kind.is_type() {
                            continue;
                        }
                        bindings.push(ImportBinding {
                            imported: CompactString::from(s.imported.name().as_str()),
                            local: CompactString::from(s.local.name.as_str()),
                            span: s.span,
                            kind: ImportBindingKind::Named,
                        });
                    }
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => {
                        bindings.push(ImportBinding {
                            imported: CompactString::from("default"),
                            local: CompactString::from(s.local.name.as_str()),
                            span: s.span,
                            kind: ImportBindingKind::Default,
                        });
                    }
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
                        bindings.push(ImportBinding {
                            imported: CompactString::from("*"),
                            local: CompactString::from(s.local.name.as_str()),
                            span: s.span,
                            kind: ImportBindingKind::Namespace,
                        });
                    }
                }
            }
        }
    }

    ImportDeclarationInfo {
        request: CompactString::from(decl.source.value.as_str()),
        span: decl.span,
        source_span: decl.source.span,
        bindings,
    }
}
