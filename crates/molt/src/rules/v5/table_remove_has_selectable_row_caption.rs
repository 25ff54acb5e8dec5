//! pf-v5/table-remove-hasSelectableRowCaption
//!
//! The `hasSelectableRowCaption` prop was removed from `Table` and
//! `TableComposable` in v5.

use oxc_ast::ast::JSXElement;

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::harness::{PropRemoval, PropValue};
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "pf-v5/table-remove-hasSelectableRowCaption",
    description: "Remove the hasSelectableRowCaption prop from Table and TableComposable",
    category: RuleCategory::MajorV5,
    fixable: true,
    default_severity: Severity::Error,
};

fn removal_message(component: &str) -> String {
    format!("hasSelectableRowCaption prop for {component} has been removed")
}

static REMOVAL: PropRemoval = PropRemoval {
    package: "@patternfly/react-table",
    components: &["Table", "TableComposable"],
    prop: "hasSelectableRowCaption",
    value: PropValue::Any,
    message: removal_message,
};

/// Remove the dropped selectable-row caption prop from table components
pub struct TableRemoveHasSelectableRowCaption;

impl Rule for TableRemoveHasSelectableRowCaption {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn applies<'a>(&self, ctx: &mut LintContext<'a>) -> bool {
        REMOVAL.applies(ctx)
    }

    fn check_jsx_element<'a>(&self, ctx: &mut LintContext<'a>, element: &JSXElement<'a>) {
        REMOVAL.check_jsx_element(ctx, element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tester::{InvalidCase, RuleTester};

    #[test]
    fn test_table_remove_has_selectable_row_caption() {
        RuleTester::new(Box::new(TableRemoveHasSelectableRowCaption)).run(
            &[
                "import { Table } from '@patternfly/react-table'; <Table />;",
                "import { TableComposable } from '@patternfly/react-table'; <TableComposable />;",
                // No @patternfly/react-table import
                "<Table hasSelectableRowCaption />;",
            ],
            &[
                InvalidCase {
                    code: "import { Table } from '@patternfly/react-table'; <Table hasSelectableRowCaption />;",
                    output: Some("import { Table } from '@patternfly/react-table'; <Table  />;"),
                    messages: &["hasSelectableRowCaption prop for Table has been removed"],
                },
                InvalidCase {
                    code: "import { TableComposable } from '@patternfly/react-table'; <TableComposable hasSelectableRowCaption />;",
                    output: Some("import { TableComposable } from '@patternfly/react-table'; <TableComposable  />;"),
                    messages: &["hasSelectableRowCaption prop for TableComposable has been removed"],
                },
            ],
        );
    }

    #[test]
    fn test_deep_path_import_matches() {
        RuleTester::new(Box::new(TableRemoveHasSelectableRowCaption)).run(
            &[
                "import { Table } from '@patternfly/react-table/dist/esm/components/Table/index.js'; <Table />;",
            ],
            &[InvalidCase {
                code: "import { Table } from '@patternfly/react-table/dist/esm/components/Table/index.js'; <Table hasSelectableRowCaption />;",
                output: Some("import { Table } from '@patternfly/react-table/dist/esm/components/Table/index.js'; <Table  />;"),
                messages: &["hasSelectableRowCaption prop for Table has been removed"],
            }],
        );
    }

    #[test]
    fn test_aliased_component_reports_exported_name() {
        RuleTester::new(Box::new(TableRemoveHasSelectableRowCaption)).run(
            &[],
            &[InvalidCase {
                code: "import { Table as PfTable } from '@patternfly/react-table'; <PfTable hasSelectableRowCaption />;",
                output: Some("import { Table as PfTable } from '@patternfly/react-table'; <PfTable  />;"),
                messages: &["hasSelectableRowCaption prop for Table has been removed"],
            }],
        );
    }

    #[test]
    fn test_unrelated_component_untouched() {
        RuleTester::new(Box::new(TableRemoveHasSelectableRowCaption)).run(
            &[
                "import { Table } from '@patternfly/react-table'; <Other hasSelectableRowCaption />;",
            ],
            &[],
        );
    }
}
