//! pf-v5/emptyState-rename-components
//!
//! `EmptyStatePrimary` and `EmptyStateSecondaryActions` were merged into
//! `EmptyStateActions` in v5.
//!
//! ## Examples
//!
//! ### Invalid
//! ```jsx
//! import { EmptyStatePrimary } from '@patternfly/react-core';
//! <EmptyStatePrimary>Primary action</EmptyStatePrimary>
//! ```
//!
//! ### Valid
//! ```jsx
//! import { EmptyStateActions } from '@patternfly/react-core';
//! <EmptyStateActions>Primary action</EmptyStateActions>
//! ```

use oxc_ast::ast::{ImportDeclaration, JSXElement};

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::harness::ComponentRename;
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "pf-v5/emptyState-rename-components",
    description: "Replace EmptyStatePrimary and EmptyStateSecondaryActions with EmptyStateActions",
    category: RuleCategory::MajorV5,
    fixable: true,
    default_severity: Severity::Error,
};

static RENAME: ComponentRename = ComponentRename {
    package: "@patternfly/react-core",
    old_names: &["EmptyStatePrimary", "EmptyStateSecondaryActions"],
    new_name: "EmptyStateActions",
};

/// Replace the removed EmptyState action wrappers with EmptyStateActions
pub struct EmptyStateRenameComponents;

impl Rule for EmptyStateRenameComponents {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn applies<'a>(&self, ctx: &mut LintContext<'a>) -> bool {
        RENAME.applies(ctx)
    }

    fn check_import_declaration<'a>(
        &self,
        ctx: &mut LintContext<'a>,
        decl: &ImportDeclaration<'a>,
    ) {
        RENAME.check_import_declaration(ctx, decl);
    }

    fn check_jsx_element<'a>(&self, ctx: &mut LintContext<'a>, element: &JSXElement<'a>) {
        RENAME.check_jsx_element(ctx, element);
    }
}
