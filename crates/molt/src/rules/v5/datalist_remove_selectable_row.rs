//! pf-v5/datalist-remove-selectableRow
//!
//! `DataList`'s `selectableRow` prop was replaced with an
//! `onSelectableRowChange` callback in v5, and the callback's parameter order
//! changed so the event comes first.
//!
//! The rewrite is attribute-local: `selectableRow={{ onChange: fn }}` with an
//! inline function is unwrapped and its parameters reordered. Shorthand
//! properties, identifier references, and typed or destructured parameters
//! cannot be reordered from the attribute alone, so those report without a
//! fix.

use oxc_ast::ast::{
    BindingPattern, Expression, FormalParameters, JSXAttribute, JSXElement, ObjectPropertyKind,
    PropertyKey, PropertyKind,
};
use oxc_span::Span;

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, Severity, TextEdit};
use crate::edits::EditOperation;
use crate::jsx;
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "pf-v5/datalist-remove-selectableRow",
    description: "Replace DataList's selectableRow prop with onSelectableRowChange",
    category: RuleCategory::MajorV5,
    fixable: true,
    default_severity: Severity::Error,
};

const PACKAGE: &str = "@patternfly/react-core";
const MESSAGE: &str = "DataList's selectableRow property has been replaced with \
                       onSelectableRowChange. The order of the params in the callback has also \
                       been updated so that the event param is first.";

/// Replace the selectableRow prop with the onSelectableRowChange callback
pub struct DatalistRemoveSelectableRow;

impl Rule for DatalistRemoveSelectableRow {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn applies<'a>(&self, ctx: &mut LintContext<'a>) -> bool {
        let imports = ctx.package_imports(PACKAGE);
        imports.has_imported("DataList")
    }

    fn check_jsx_element<'a>(&self, ctx: &mut LintContext<'a>, element: &JSXElement<'a>) {
        let Some((name, _)) = jsx::opening_name(element) else {
            return;
        };
        let imports = ctx.package_imports(PACKAGE);
        let Some(binding) = imports.find_local(name) else {
            return;
        };
        if binding.imported != "DataList" {
            return;
        }

        let opening = &element.opening_element;
        let Some(attr) = jsx::get_attribute(opening, "selectableRow") else {
            return;
        };

        let rule = ctx.current_rule;
        let mut diagnostic =
            LintDiagnostic::error(rule, MESSAGE, opening.span.start, opening.span.end);
        if let Some(edits) = plan_rewrite(ctx.source, attr) {
            diagnostic = diagnostic.with_fix(Fix::with_edits(
                "Replace selectableRow with onSelectableRowChange",
                edits,
            ));
        }
        ctx.report(diagnostic);
    }
}

/// Plan `selectableRow={{ onChange: fn }}` -> `onSelectableRowChange={fn'}`,
/// or `None` when the value shape cannot be rewritten safely.
fn plan_rewrite(source: &str, attr: &JSXAttribute<'_>) -> Option<Vec<TextEdit>> {
    let Expression::ObjectExpression(object) = jsx::attribute_expression(attr)? else {
        return None;
    };
    if object.properties.len() != 1 {
        return None;
    }
    let ObjectPropertyKind::ObjectProperty(property) = &object.properties[0] else {
        return None;
    };
    // Methods and accessors have no standalone function-expression text to
    // move into the new attribute
    if property.shorthand || property.computed || property.method {
        return None;
    }
    if property.kind != PropertyKind::Init {
        return None;
    }
    let PropertyKey::StaticIdentifier(key) = &property.key else {
        return None;
    };
    if key.name != "onChange" {
        return None;
    }

    let callback = reorder_callback(source, &property.value)?;
    let op = EditOperation::ReplaceRange {
        span: attr.span,
        text: format!("onSelectableRowChange={{{callback}}}"),
    };
    Some(op.plan(None, source))
}

/// Rebuild an inline callback's source text with the event parameter first.
fn reorder_callback(source: &str, expr: &Expression<'_>) -> Option<String> {
    let (params, span) = match expr {
        Expression::ArrowFunctionExpression(arrow) => (&arrow.params, arrow.span),
        Expression::FunctionExpression(func) => (&func.params, func.span),
        _ => return None,
    };
    let idents = simple_param_idents(params)?;
    let text = &source[span.start as usize..span.end as usize];
    let rel = |s: Span| (s.start - span.start) as usize..(s.end - span.start) as usize;

    match idents.as_slice() {
        // No parameters: the callback ignores its arguments either way
        [] => Some(text.to_string()),
        // One parameter: it was the id; the event now comes first
        [(id_span, id_name)] => {
            if *id_name == "event" {
                return None;
            }
            let mut out = text.to_string();
            out.replace_range(rel(*id_span), &format!("event, {id_name}"));
            Some(out)
        }
        // Two parameters: (id, event) becomes (event, id)
        [(first_span, first_name), (second_span, second_name)] => {
            let mut out = text.to_string();
            // Replace back-to-front so the first range stays valid
            out.replace_range(rel(*second_span), first_name);
            out.replace_range(rel(*first_span), second_name);
            Some(out)
        }
        _ => None,
    }
}

/// The parameters as plain identifiers, or `None` when any parameter is
/// destructured, typed, optional, or a rest element - reordering those from
/// text alone could change meaning.
fn simple_param_idents<'a>(params: &'a FormalParameters<'a>) -> Option<Vec<(Span, &'a str)>> {
    if params.rest.is_some() {
        return None;
    }
    let mut idents = Vec::with_capacity(params.items.len());
    for param in &params.items {
        if param.type_annotation.is_some() || param.optional {
            return None;
        }
        match &param.pattern {
            BindingPattern::BindingIdentifier(ident) => {
                idents.push((ident.span, ident.name.as_str()));
            }
            _ => return None,
        }
    }
    Some(idents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tester::{InvalidCase, RuleTester};

    #[test]
    fn test_datalist_remove_selectable_row() {
        RuleTester::new(Box::new(DatalistRemoveSelectableRow)).run(
            &[
                "import { DataList } from '@patternfly/react-core'; <DataList onSelectableRowChange={(event, id) => {}} />;",
                // No @patternfly/react-core import
                "<DataList selectableRow={{ onChange: (id, event) => {} }} />;",
                "import { DataList } from '@patternfly/react-core'; <DataList />;",
            ],
            &[
                InvalidCase {
                    code: "import { DataList } from '@patternfly/react-core'; <DataList selectableRow={{ onChange: (id, event) => {} }} />;",
                    output: Some("import { DataList } from '@patternfly/react-core'; <DataList onSelectableRowChange={(event, id) => {}} />;"),
                    messages: &[MESSAGE],
                },
                InvalidCase {
                    code: "import { DataList } from '@patternfly/react-core'; <DataList selectableRow={{ onChange: function (id, event) {} }} />;",
                    output: Some("import { DataList } from '@patternfly/react-core'; <DataList onSelectableRowChange={function (event, id) {}} />;"),
                    messages: &[MESSAGE],
                },
                // One-parameter callback gains the leading event param
                InvalidCase {
                    code: "import { DataList } from '@patternfly/react-core'; <DataList selectableRow={{ onChange: (id) => {} }} />;",
                    output: Some("import { DataList } from '@patternfly/react-core'; <DataList onSelectableRowChange={(event, id) => {}} />;"),
                    messages: &[MESSAGE],
                },
            ],
        );
    }

    #[test]
    fn test_deep_path_import() {
        RuleTester::new(Box::new(DatalistRemoveSelectableRow)).run(
            &[],
            &[InvalidCase {
                code: "import { DataList } from '@patternfly/react-core/dist/esm/components/DataList/index.js'; <DataList selectableRow={{ onChange: (id, event) => {} }} />;",
                output: Some("import { DataList } from '@patternfly/react-core/dist/esm/components/DataList/index.js'; <DataList onSelectableRowChange={(event, id) => {}} />;"),
                messages: &[MESSAGE],
            }],
        );
    }

    #[test]
    fn test_unresolvable_shapes_report_without_fix() {
        RuleTester::new(Box::new(DatalistRemoveSelectableRow)).run(
            &[],
            &[
                // Shorthand property: the callback lives elsewhere
                InvalidCase {
                    code: "import { DataList } from '@patternfly/react-core'; <DataList selectableRow={{ onChange }} />;",
                    output: None,
                    messages: &[MESSAGE],
                },
                // Identifier value: not an object literal at all
                InvalidCase {
                    code: "import { DataList } from '@patternfly/react-core'; <DataList selectableRow={rowConfig} />;",
                    output: None,
                    messages: &[MESSAGE],
                },
                // Reference callback: parameter order unknowable here
                InvalidCase {
                    code: "import { DataList } from '@patternfly/react-core'; <DataList selectableRow={{ onChange: handleChange }} />;",
                    output: None,
                    messages: &[MESSAGE],
                },
            ],
        );
    }

    #[test]
    fn test_rewritten_attribute_is_stable() {
        // The fixed form no longer matches the rule
        RuleTester::new(Box::new(DatalistRemoveSelectableRow)).run(
            &[
                "import { DataList } from '@patternfly/react-core'; <DataList onSelectableRowChange={(event, id) => {}} otherProp />;",
            ],
            &[],
        );
    }
}
