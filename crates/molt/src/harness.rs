//! Shared machinery for codemod rules.
//!
//! Concrete rules are thin configurations of two recurring shapes:
//!
//! - [`ComponentRename`]: old component names map to one new name. Usage
//!   sites are renamed first; the replacement import is added while any old
//!   usage remains; old imports are pruned once their locals go dead. The
//!   host's fix loop drives a file through those states across passes, so
//!   each pass emits exactly the edits that are safe now and nothing a later
//!   pass would undo.
//! - [`PropRemoval`]: a prop is dropped from a set of components, optionally
//!   conditional on its value being a given string literal or enum-member
//!   reference.

use compact_str::CompactString;
use oxc_ast::ast::{ImportDeclaration, JSXElement};
use rustc_hash::FxHashSet;

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, TextEdit};
use crate::edits::{insert_into_import_list, EditOperation};
use crate::imports::{matches_package, ImportBinding, ImportBindingKind, PackageImports};
use crate::jsx;

/// Rename configuration: every element bound to one of `old_names` is
/// rewritten to `new_name`, and the import list is kept consistent.
pub struct ComponentRename {
    pub package: &'static str,
    pub old_names: &'static [&'static str],
    pub new_name: &'static str,
}

impl ComponentRename {
    /// Whether any old name is imported in this file
    pub fn applies(&self, ctx: &mut LintContext<'_>) -> bool {
        let imports = ctx.package_imports(self.package);
        let applies = imports
            .bindings()
            .any(|b| self.old_names.contains(&b.imported.as_str()));
        applies
    }

    fn old_bindings(&self, imports: &PackageImports) -> Vec<ImportBinding> {
        imports
            .bindings()
            .filter(|b| self.old_names.contains(&b.imported.as_str()))
            .cloned()
            .collect()
    }

    /// Import-list maintenance, run on every declaration of the target
    /// package.
    ///
    /// While any old local is still referenced, the new name is inserted (the
    /// usage rewrite happens in the same or an earlier pass). Old bindings
    /// whose locals no longer appear outside imports are reported unused and
    /// removed. Both steps are no-ops when replanned against their own
    /// output, which is what lets the host rerun the rule safely.
    pub fn check_import_declaration<'a>(
        &self,
        ctx: &mut LintContext<'a>,
        decl: &ImportDeclaration<'a>,
    ) {
        if !matches_package(decl.source.value.as_str(), self.package) {
            return;
        }
        let imports = ctx.package_imports(self.package);
        let old = self.old_bindings(&imports);
        if old.is_empty() {
            return;
        }

        let locals: Vec<&str> = old.iter().map(|b| b.local.as_str()).collect();
        let live = ctx.live_locals(&locals);
        let unused: FxHashSet<CompactString> = old
            .iter()
            .filter(|b| !live.contains(b.local.as_str()))
            .map(|b| b.local.clone())
            .collect();

        let Some(decl_info) = imports.decl_at(decl.span) else {
            return;
        };
        let dead_here: FxHashSet<CompactString> = decl_info
            .bindings
            .iter()
            .filter(|b| {
                self.old_names.contains(&b.imported.as_str()) && unused.contains(b.local.as_str())
            })
            .map(|b| b.local.clone())
            .collect();
        let rule = ctx.current_rule;

        // Usage sites still reference an old local: the replacement must be
        // importable before the old bindings can go. Insert on one
        // declaration only, so two declarations of the same package cannot
        // both add the name in one pass. Side-effect and namespace-only
        // declarations have no specifier list to extend.
        let insert_target = imports
            .decls
            .iter()
            .find(|d| {
                d.bindings
                    .iter()
                    .any(|b| b.kind != ImportBindingKind::Namespace)
            })
            .map(|d| d.span);
        if unused.len() < old.len()
            && !imports.has_imported(self.new_name)
            && insert_target == Some(decl.span)
        {
            if let Some(edit) = insert_into_import_list(decl_info, &[self.new_name], &dead_here) {
                ctx.report(
                    LintDiagnostic::error(
                        rule,
                        format!("add missing imports {} from {}", self.new_name, self.package),
                        decl.span.start,
                        decl.span.end,
                    )
                    .with_fix(Fix::new(
                        format!("Add {} to the import list", self.new_name),
                        edit,
                    )),
                );
            }
        }

        if dead_here.is_empty() {
            return;
        }
        let op = EditOperation::RemoveFromImportList {
            locals: dead_here.clone(),
        };
        let edits = op.plan(Some(decl_info), ctx.source);
        if edits.is_empty() {
            return;
        }

        // Source order keeps the message deterministic
        let removed_locals: Vec<&str> = decl_info
            .bindings
            .iter()
            .filter(|b| dead_here.contains(b.local.as_str()))
            .map(|b| b.local.as_str())
            .collect();
        let plural = if removed_locals.len() > 1 { "s" } else { "" };
        ctx.report(
            LintDiagnostic::error(
                rule,
                format!(
                    "unused import{} {} from {}",
                    plural,
                    removed_locals.join(", "),
                    self.package
                ),
                decl.span.start,
                decl.span.end,
            )
            .with_fix(Fix::with_edits("Remove the unused imports", edits)),
        );
    }

    /// Usage-site rewrite: rename the opening/closing pair of any element
    /// bound to an old name.
    pub fn check_jsx_element<'a>(&self, ctx: &mut LintContext<'a>, element: &JSXElement<'a>) {
        let Some((name, name_span)) = jsx::opening_name(element) else {
            return;
        };
        let imports = ctx.package_imports(self.package);
        let Some(binding) = imports.find_local(name) else {
            return;
        };
        if !self.old_names.contains(&binding.imported.as_str()) {
            return;
        }

        let edits = crate::edits::rename_element(
            name_span,
            jsx::closing_name_span(element),
            self.new_name,
        );
        let rule = ctx.current_rule;
        ctx.report(
            LintDiagnostic::error(
                rule,
                format!("{} has been replaced with {}", binding.imported, self.new_name),
                element.span.start,
                element.span.end,
            )
            .with_fix(Fix::with_edits(
                format!("Rename to {}", self.new_name),
                edits,
            )),
        );
    }
}

/// Condition on a removed prop's value
pub enum PropValue {
    /// The prop's presence alone triggers the removal
    Any,
    /// The value must be the given string literal, or a member access
    /// `enum_object.member` where `enum_object` is another export of the
    /// same package
    LiteralOrEnum {
        literal: &'static str,
        enum_object: &'static str,
        member: &'static str,
    },
}

/// Prop-removal configuration: drop `prop` from elements bound to any of
/// `components`, when `value` matches.
pub struct PropRemoval {
    pub package: &'static str,
    pub components: &'static [&'static str],
    pub prop: &'static str,
    pub value: PropValue,
    /// Diagnostic message, given the component's exported name
    pub message: fn(&str) -> String,
}

impl PropRemoval {
    /// Whether any target component is imported in this file
    pub fn applies(&self, ctx: &mut LintContext<'_>) -> bool {
        let imports = ctx.package_imports(self.package);
        let applies = imports
            .bindings()
            .any(|b| self.components.contains(&b.imported.as_str()));
        applies
    }

    pub fn check_jsx_element<'a>(&self, ctx: &mut LintContext<'a>, element: &JSXElement<'a>) {
        let Some((name, _)) = jsx::opening_name(element) else {
            return;
        };
        let imports = ctx.package_imports(self.package);
        let Some(binding) = imports.find_local(name) else {
            return;
        };
        if !self.components.contains(&binding.imported.as_str()) {
            return;
        }

        let opening = &element.opening_element;
        let Some(attr) = jsx::get_attribute(opening, self.prop) else {
            return;
        };

        match self.value {
            PropValue::Any => {}
            PropValue::LiteralOrEnum {
                literal,
                enum_object,
                member,
            } => {
                if attr.value.is_none() {
                    return;
                }
                let is_literal = jsx::attribute_string_value(attr) == Some(literal);
                let is_enum = jsx::attribute_expression(attr).is_some_and(|expr| {
                    imports
                        .find_imported(enum_object)
                        .is_some_and(|e| jsx::is_enum_member(expr, e.local.as_str(), member))
                });
                // Unrecognized value shapes are skipped rather than guessed
                if !is_literal && !is_enum {
                    return;
                }
            }
        }

        let rule = ctx.current_rule;
        let message = (self.message)(binding.imported.as_str());
        ctx.report(
            LintDiagnostic::error(rule, message, opening.span.start, opening.span.end).with_fix(
                Fix::new(
                    format!("Remove the {} prop", self.prop),
                    TextEdit::delete(attr.span.start, attr.span.end),
                ),
            ),
        );
    }
}
