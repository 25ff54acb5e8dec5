//! Rule trait and registry for codemod rules.

use oxc_ast::ast::{ImportDeclaration, JSXElement, Program};

use crate::context::LintContext;
use crate::diagnostic::Severity;

/// Which major-version upgrade a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// PatternFly v4 -> v5 API changes
    MajorV5,
    /// PatternFly v5 -> v6 API changes
    MajorV6,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "pf-v5/emptyState-rename-components")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Upgrade the rule belongs to
    pub category: RuleCategory,
    /// Whether the rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Trait for implementing codemod rules.
///
/// Rules implement visitor-like methods called during AST traversal. Each
/// method receives a mutable reference to `LintContext` for reporting
/// diagnostics and resolving imports.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Whether this rule has anything to do for the current file.
    ///
    /// Called once per file before traversal; a rule whose target package is
    /// never imported returns `false` and receives no node callbacks - the
    /// common case, costing one hash lookup and no tree walk.
    #[allow(unused_variables)]
    fn applies<'a>(&self, ctx: &mut LintContext<'a>) -> bool {
        true
    }

    /// Run once on the program root, before node callbacks
    #[allow(unused_variables)]
    fn run_on_program<'a>(&self, ctx: &mut LintContext<'a>, program: &Program<'a>) {}

    /// Called for each import declaration
    #[allow(unused_variables)]
    fn check_import_declaration<'a>(
        &self,
        ctx: &mut LintContext<'a>,
        decl: &ImportDeclaration<'a>,
    ) {
    }

    /// Called for each JSX element, outermost first
    #[allow(unused_variables)]
    fn check_jsx_element<'a>(&self, ctx: &mut LintContext<'a>, element: &JSXElement<'a>) {}
}

/// Registry holding all enabled codemod rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Create registry with every upgrade rule enabled
    pub fn with_all() -> Self {
        let mut registry = Self::with_v5();
        for rule in Self::with_v6().rules {
            registry.register(rule);
        }
        registry
    }

    /// Create registry with the v4 -> v5 upgrade rules
    pub fn with_v5() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::rules::v5::EmptyStateRenameComponents));
        registry.register(Box::new(crate::rules::v5::TableRemoveHasSelectableRowCaption));
        registry.register(Box::new(crate::rules::v5::DatalistRemoveSelectableRow));
        registry
    }

    /// Create registry with the v5 -> v6 upgrade rules
    pub fn with_v6() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::rules::v6::PageSectionRemoveNavType));
        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_with_all_contains_every_rule() {
        let registry = RuleRegistry::with_all();
        let names: Vec<_> = registry.rules().iter().map(|r| r.meta().name).collect();
        assert!(names.contains(&"pf-v5/emptyState-rename-components"));
        assert!(names.contains(&"pf-v5/table-remove-hasSelectableRowCaption"));
        assert!(names.contains(&"pf-v5/datalist-remove-selectableRow"));
        assert!(names.contains(&"pf-v6/pageSection-remove-nav-type"));
    }

    #[test]
    fn test_rule_metadata_is_fixable() {
        for rule in RuleRegistry::with_all().rules() {
            assert!(rule.meta().fixable, "{} must be fixable", rule.meta().name);
        }
    }
}
