//! AST visitor for rule execution.
//!
//! Walks the oxc AST once and dispatches import-declaration and JSX-element
//! callbacks to every active rule.

use oxc_ast::ast::{ImportDeclaration, JSXElement, Program};
use oxc_ast_visit::{walk, Visit};

use crate::context::LintContext;
use crate::rule::Rule;

/// Visit the AST and run all active rules
pub struct LintVisitor<'a, 'ctx, 'rules> {
    ctx: &'ctx mut LintContext<'a>,
    rules: &'rules [&'rules dyn Rule],
}

impl<'a, 'ctx, 'rules> LintVisitor<'a, 'ctx, 'rules> {
    /// Create a new visitor over the given active rules
    #[inline]
    pub fn new(ctx: &'ctx mut LintContext<'a>, rules: &'rules [&'rules dyn Rule]) -> Self {
        Self { ctx, rules }
    }

    /// Walk the program, running program-level checks first
    pub fn run(&mut self, program: &Program<'a>) {
        for rule in self.rules {
            self.ctx.current_rule = rule.meta().name;
            rule.run_on_program(self.ctx, program);
        }
        self.visit_program(program);
    }
}

impl<'a> Visit<'a> for LintVisitor<'a, '_, '_> {
    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        for rule in self.rules {
            self.ctx.current_rule = rule.meta().name;
            rule.check_import_declaration(self.ctx, decl);
        }
        walk::walk_import_declaration(self, decl);
    }

    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        for rule in self.rules {
            self.ctx.current_rule = rule.meta().name;
            rule.check_jsx_element(self.ctx, element);
        }
        // Recurse: nested elements get their own callbacks
        walk::walk_jsx_element(self, element);
    }
}
