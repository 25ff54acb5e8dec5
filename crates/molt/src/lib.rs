//! # molt
//!
//! Molt - Codemod linter for PatternFly React major-version upgrades.
//!
//! ## Name Origin
//!
//! **Molt** (/moʊlt/) is the process by which an animal sheds an old outer
//! layer so a new one can take its place. `molt` does the same for component
//! code: it finds usages of removed or renamed PatternFly APIs and rewrites
//! them into their current form, shedding the old surface without touching
//! anything else.
//!
//! ## Features
//!
//! - Import-binding resolution across default/named/aliased/namespace forms
//!   and deep-path specifiers
//! - Conservative token-level liveness so an import is never pruned while its
//!   name is still referenced
//! - Idempotent edit planning: fixes converge under the host's bounded
//!   reapplication loop and never undo a previous pass
//! - Rich diagnostic output with code snippets (via oxc_diagnostics) plus a
//!   JSON formatter for tooling
//!
//! ## Usage
//!
//! ```rust,ignore
//! use molt::{fix, Linter};
//!
//! let linter = Linter::new();
//! let source = "import { EmptyStatePrimary } from '@patternfly/react-core';
//! <EmptyStatePrimary>Primary action</EmptyStatePrimary>;";
//!
//! let outcome = fix(&linter, source, "example.tsx")?;
//! assert!(outcome.code.contains("EmptyStateActions"));
//! ```
//!
//! ## Rules
//!
//! ### v4 -> v5
//! - `pf-v5/emptyState-rename-components` - Replace `EmptyStatePrimary` and
//!   `EmptyStateSecondaryActions` with `EmptyStateActions`
//! - `pf-v5/table-remove-hasSelectableRowCaption` - Remove the
//!   `hasSelectableRowCaption` prop from `Table` and `TableComposable`
//! - `pf-v5/datalist-remove-selectableRow` - Replace `DataList`'s
//!   `selectableRow` prop with `onSelectableRowChange`
//!
//! ### v5 -> v6
//! - `pf-v6/pageSection-remove-nav-type` - Remove the `"nav"` type prop from
//!   `PageSection`

mod context;
mod diagnostic;
mod edits;
mod fixer;
mod harness;
mod imports;
mod jsx;
mod linter;
mod liveness;
pub mod output;
mod rule;
pub mod rules;
pub mod tester;
mod visitor;

pub use context::LintContext;
pub use diagnostic::{Fix, Label, LintDiagnostic, LintSummary, Severity, TextEdit};
pub use edits::{
    insert_into_import_list, remove_from_import_list, rename_element, EditOperation,
};
pub use fixer::{
    apply_edits, fix, fix_source, select_pass_fixes, FixError, FixOutcome, FIX_PASS_LIMIT,
};
pub use harness::{ComponentRename, PropRemoval, PropValue};
pub use imports::{
    matches_package, resolve_imports, ImportBinding, ImportBindingKind, ImportDeclarationInfo,
    PackageImports,
};
pub use linter::{LintResult, Linter};
pub use liveness::live_names;
pub use output::{format_results, format_summary, OutputFormat};
pub use rule::{Rule, RuleCategory, RuleMeta, RuleRegistry};
