//! Edit planning for import lists and element renames.
//!
//! The planner turns requested operations into minimal `TextEdit` sets that
//! keep the source syntactically valid. It never inspects semantics beyond
//! ranges and names; callers decide *why* an edit is requested.
//!
//! All operations are idempotent across reruns: planning the same operation
//! against already-rewritten source yields no edits.

use compact_str::CompactString;
use oxc_span::Span;
use rustc_hash::FxHashSet;

use crate::diagnostic::TextEdit;
use crate::imports::{ImportBindingKind, ImportDeclarationInfo};

/// A requested source rewrite, lowered to text edits by [`EditOperation::plan`].
#[derive(Debug, Clone)]
pub enum EditOperation {
    /// Add named imports to an existing declaration's specifier list.
    /// Names already bound are skipped.
    InsertIntoImportList { names: Vec<CompactString> },
    /// Remove the specifiers bound to the given local names, consuming
    /// separators so the result stays valid. Removing every binding removes
    /// the whole declaration statement.
    RemoveFromImportList { locals: FxHashSet<CompactString> },
    /// Replace a range with new text.
    ReplaceRange { span: Span, text: String },
}

impl EditOperation {
    /// Lower this operation into text edits.
    ///
    /// `decl` is the owning import declaration for the import-list variants;
    /// it is ignored for `ReplaceRange`.
    pub fn plan(&self, decl: Option<&ImportDeclarationInfo>, source: &str) -> Vec<TextEdit> {
        match self {
            Self::InsertIntoImportList { names } => {
                let Some(decl) = decl else { return Vec::new() };
                let names: Vec<&str> = names.iter().map(CompactString::as_str).collect();
                insert_into_import_list(decl, &names, &FxHashSet::default())
                    .into_iter()
                    .collect()
            }
            Self::RemoveFromImportList { locals } => {
                let Some(decl) = decl else { return Vec::new() };
                remove_from_import_list(decl, source, locals)
            }
            Self::ReplaceRange { span, text } => {
                vec![TextEdit::replace(*span, text.clone())]
            }
        }
    }
}

/// Plan the insertion of named imports into an existing declaration.
///
/// Names already present among the declaration's bindings (by exported name)
/// are skipped, so replanning after a previous round's insert is a no-op.
/// `removed` holds local names being removed from the same declaration in the
/// same pass; the insertion anchor avoids their ranges.
///
/// Returns `None` when nothing needs inserting or the declaration cannot
/// carry named specifiers (namespace-only or side-effect imports).
pub fn insert_into_import_list(
    decl: &ImportDeclarationInfo,
    names: &[&str],
    removed: &FxHashSet<CompactString>,
) -> Option<TextEdit> {
    let missing: Vec<&str> = names
        .iter()
        .copied()
        .filter(|name| !decl.bindings.iter().any(|b| b.imported == *name))
        .collect();
    if missing.is_empty() {
        return None;
    }
    let joined = missing.join(", ");

    // Preferred anchor: after the last named specifier that survives the pass
    if let Some(anchor) = decl
        .bindings
        .iter()
        .rev()
        .find(|b| b.kind == ImportBindingKind::Named && !removed.contains(b.local.as_str()))
    {
        return Some(TextEdit::insert(anchor.span.end, format!(", {joined}")));
    }

    // Every named specifier is going away this pass: prepend inside the braces
    if let Some(first_named) = decl
        .bindings
        .iter()
        .find(|b| b.kind == ImportBindingKind::Named)
    {
        return Some(TextEdit::insert(first_named.span.start, format!("{joined}, ")));
    }

    // Default-only declaration: open a named group after the default binding
    if let Some(default) = decl
        .bindings
        .iter()
        .find(|b| b.kind == ImportBindingKind::Default)
    {
        return Some(TextEdit::insert(default.span.end, format!(", {{ {joined} }}")));
    }

    None
}

/// Plan the removal of the specifiers bound to `locals`.
///
/// Each removed specifier's range also consumes the trailing separator up to
/// the next token, so removing a middle element leaves no dangling comma. A
/// last named specifier with a surviving named sibling consumes its preceding
/// comma instead. When every binding of the declaration is removed, the whole
/// statement is deleted, including its line terminator.
pub fn remove_from_import_list(
    decl: &ImportDeclarationInfo,
    source: &str,
    locals: &FxHashSet<CompactString>,
) -> Vec<TextEdit> {
    let removed: Vec<bool> = decl
        .bindings
        .iter()
        .map(|b| locals.contains(b.local.as_str()))
        .collect();
    let removed_count = removed.iter().filter(|r| **r).count();
    if removed_count == 0 {
        return Vec::new();
    }

    if removed_count == decl.bindings.len() {
        return vec![TextEdit::delete(
            decl.span.start,
            statement_end(source, decl.span.end),
        )];
    }

    let bytes = source.as_bytes();
    let mut edits = Vec::with_capacity(removed_count);

    for (i, binding) in decl.bindings.iter().enumerate() {
        if !removed[i] {
            continue;
        }
        let mut start = binding.span.start as usize;
        let mut end = binding.span.end as usize;

        // Trailing separator: comma plus whitespace up to the next token
        let mut j = end;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j < bytes.len() && bytes[j] == b',' {
            j += 1;
            while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                j += 1;
            }
            end = j;
        } else if i > 0
            && decl.bindings[i - 1].kind == ImportBindingKind::Named
            && !removed[i - 1]
        {
            // Last specifier in the braces: consume the preceding comma
            // instead, unless the previous specifier's own removal already
            // swallowed it. The comma after a default specifier is structural
            // and stays.
            let mut k = start;
            while k > 0 && bytes[k - 1].is_ascii_whitespace() {
                k -= 1;
            }
            if k > 0 && bytes[k - 1] == b',' {
                start = k - 1;
            }
        }

        edits.push(TextEdit::delete(start as u32, end as u32));
    }

    edits
}

/// Plan the in-place rename of a JSX element: the opening name and, when
/// present, the closing name are replaced together - substituting only one of
/// the pair would leave mismatched tags.
pub fn rename_element(
    opening_name: Span,
    closing_name: Option<Span>,
    new_name: &str,
) -> Vec<TextEdit> {
    let mut edits = vec![TextEdit::replace(opening_name, new_name)];
    if let Some(closing) = closing_name {
        edits.push(TextEdit::replace(closing, new_name));
    }
    edits
}

/// Extend a statement's end offset past an optional semicolon and one line
/// terminator, so deleting the statement removes its line.
fn statement_end(source: &str, end: u32) -> u32 {
    let bytes = source.as_bytes();
    let mut i = end as usize;
    if i < bytes.len() && bytes[i] == b';' {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'\r' {
        i += 1;
    }
    if i < bytes.len() && bytes[i] == b'\n' {
        i += 1;
    }
    i as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imports::resolve_imports;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn plan_on(source: &str, op: &EditOperation) -> String {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty(), "parse errors in test source");
        let imports = resolve_imports(&ret.program, "pkg");
        let decl = imports.decls.first();
        let edits = op.plan(decl, source);
        apply(source, edits)
    }

    fn apply(source: &str, mut edits: Vec<TextEdit>) -> String {
        // Ties between a deletion and an insertion at the same start apply
        // the deletion first (larger end first).
        edits.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));
        let mut out = source.to_string();
        for edit in edits {
            out.replace_range(edit.start as usize..edit.end as usize, &edit.new_text);
        }
        out
    }

    fn insert(names: &[&str]) -> EditOperation {
        EditOperation::InsertIntoImportList {
            names: names.iter().map(|n| CompactString::from(*n)).collect(),
        }
    }

    fn remove(locals: &[&str]) -> EditOperation {
        EditOperation::RemoveFromImportList {
            locals: locals.iter().map(|n| CompactString::from(*n)).collect(),
        }
    }

    #[test]
    fn test_insert_appends_after_last_specifier() {
        assert_eq!(
            plan_on("import { Old } from 'pkg';", &insert(&["New"])),
            "import { Old, New } from 'pkg';"
        );
    }

    #[test]
    fn test_insert_existing_name_is_noop() {
        let source = "import { Old, New } from 'pkg';";
        assert_eq!(plan_on(source, &insert(&["New"])), source);
    }

    #[test]
    fn test_insert_skips_only_present_names() {
        assert_eq!(
            plan_on("import { Old, New } from 'pkg';", &insert(&["New", "Other"])),
            "import { Old, New, Other } from 'pkg';"
        );
    }

    #[test]
    fn test_insert_after_default_only_import() {
        assert_eq!(
            plan_on("import Core from 'pkg';", &insert(&["New"])),
            "import Core, { New } from 'pkg';"
        );
    }

    #[test]
    fn test_insert_into_namespace_only_import_is_noop() {
        let source = "import * as pf from 'pkg';";
        assert_eq!(plan_on(source, &insert(&["New"])), source);
    }

    #[test]
    fn test_insert_anchors_inside_braces_not_after_default() {
        assert_eq!(
            plan_on("import Core, { Old } from 'pkg';", &insert(&["New"])),
            "import Core, { Old, New } from 'pkg';"
        );
    }

    #[test]
    fn test_remove_first_specifier_consumes_trailing_comma() {
        assert_eq!(
            plan_on("import { Old, New } from 'pkg';", &remove(&["Old"])),
            "import { New } from 'pkg';"
        );
    }

    #[test]
    fn test_remove_middle_specifier() {
        assert_eq!(
            plan_on("import { A, Old, B } from 'pkg';", &remove(&["Old"])),
            "import { A, B } from 'pkg';"
        );
    }

    #[test]
    fn test_remove_last_specifier_consumes_preceding_comma() {
        assert_eq!(
            plan_on("import { New, Old } from 'pkg';", &remove(&["Old"])),
            "import { New } from 'pkg';"
        );
    }

    #[test]
    fn test_remove_two_adjacent_specifiers() {
        assert_eq!(
            plan_on("import { A, OldA, OldB } from 'pkg';", &remove(&["OldA", "OldB"])),
            "import { A,  } from 'pkg';"
        );
    }

    #[test]
    fn test_remove_aliased_specifier_by_local_name() {
        assert_eq!(
            plan_on("import { Old as Alias, New } from 'pkg';", &remove(&["Alias"])),
            "import { New } from 'pkg';"
        );
    }

    #[test]
    fn test_remove_all_bindings_removes_declaration() {
        assert_eq!(
            plan_on("import { Old } from 'pkg';\nconst x = 1;", &remove(&["Old"])),
            "const x = 1;"
        );
    }

    #[test]
    fn test_remove_all_bindings_without_trailing_newline() {
        assert_eq!(
            plan_on("import { OldA, OldB } from 'pkg';", &remove(&["OldA", "OldB"])),
            ""
        );
    }

    #[test]
    fn test_remove_over_multiline_list() {
        let source = "import {\n  Old,\n  New\n} from 'pkg';";
        assert_eq!(
            plan_on(source, &remove(&["Old"])),
            "import {\n  New\n} from 'pkg';"
        );
    }

    #[test]
    fn test_remove_named_next_to_surviving_default() {
        assert_eq!(
            plan_on("import Core, { Old } from 'pkg';", &remove(&["Old"])),
            "import Core, {  } from 'pkg';"
        );
    }

    #[test]
    fn test_remove_unknown_local_is_noop() {
        let source = "import { Old } from 'pkg';";
        assert!(matches!(
            remove(&["Missing"]),
            EditOperation::RemoveFromImportList { .. }
        ));
        assert_eq!(plan_on(source, &remove(&["Missing"])), source);
    }

    #[test]
    fn test_insert_and_remove_compose_in_one_pass() {
        // Some old names dead, others still in use: insertion must anchor on
        // a surviving specifier so both edit sets apply cleanly together.
        let source = "import { OldA, OldB } from 'pkg';";
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        let imports = resolve_imports(&ret.program, "pkg");
        let decl = imports.decls.first().unwrap();

        let dead: FxHashSet<CompactString> = [CompactString::from("OldB")].into_iter().collect();
        let mut edits = remove_from_import_list(decl, source, &dead);
        edits.extend(insert_into_import_list(decl, &["New"], &dead));

        assert_eq!(apply(source, edits), "import { OldA, New } from 'pkg';");
    }

    #[test]
    fn test_replace_range_plan() {
        let op = EditOperation::ReplaceRange {
            span: Span::new(1, 4),
            text: "New".to_string(),
        };
        let edits = op.plan(None, "<Old/>");
        assert_eq!(apply("<Old/>", edits), "<New/>");
    }

    #[test]
    fn test_rename_element_pair() {
        let source = "<Old>x</Old>";
        let edits = rename_element(Span::new(1, 4), Some(Span::new(8, 11)), "New");
        assert_eq!(apply(source, edits), "<New>x</New>");
    }

    #[test]
    fn test_rename_self_closing_element() {
        let source = "<Old/>";
        let edits = rename_element(Span::new(1, 4), None, "New");
        assert_eq!(apply(source, edits), "<New/>");
    }
}
