//! pf-v6/pageSection-remove-nav-type
//!
//! The `"nav"` value of PageSection's `type` prop was removed in v6. The
//! value may be written as a string literal or as a reference to the
//! `PageSectionTypes` enum object, which needs its own import resolution.

use oxc_ast::ast::JSXElement;

use crate::context::LintContext;
use crate::diagnostic::Severity;
use crate::harness::{PropRemoval, PropValue};
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "pf-v6/pageSection-remove-nav-type",
    description: "Remove the removed \"nav\" type prop from PageSection",
    category: RuleCategory::MajorV6,
    fixable: true,
    default_severity: Severity::Error,
};

fn removal_message(_component: &str) -> String {
    "The \"nav\" type for PageSection has been removed.".to_string()
}

static REMOVAL: PropRemoval = PropRemoval {
    package: "@patternfly/react-core",
    components: &["PageSection"],
    prop: "type",
    value: PropValue::LiteralOrEnum {
        literal: "nav",
        enum_object: "PageSectionTypes",
        member: "nav",
    },
    message: removal_message,
};

/// Remove `type="nav"` from PageSection elements
pub struct PageSectionRemoveNavType;

impl Rule for PageSectionRemoveNavType {
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
    fn test_page_section_remove_nav_type() {
        RuleTester::new(Box::new(PageSectionRemoveNavType)).run(
            &[
                "import { PageSection } from '@patternfly/react-core'; <PageSection />;",
                "import { PageSection } from '@patternfly/react-core'; <PageSection type=\"default\" />;",
                "import { PageSection, PageSectionTypes } from '@patternfly/react-core'; <PageSection type={PageSectionTypes.default} />;",
                // Value shape we cannot resolve: skip rather than guess
                "import { PageSection } from '@patternfly/react-core'; <PageSection type={navType} />;",
                // Bare prop carries no value to match
                "import { PageSection } from '@patternfly/react-core'; <PageSection type />;",
                // No @patternfly/react-core import
                "<PageSection type=\"nav\" />;",
            ],
            &[
                InvalidCase {
                    code: "import { PageSection } from '@patternfly/react-core'; <PageSection type=\"nav\" />;",
                    output: Some("import { PageSection } from '@patternfly/react-core'; <PageSection  />;"),
                    messages: &["The \"nav\" type for PageSection has been removed."],
                },
                InvalidCase {
                    code: "import { PageSection } from '@patternfly/react-core'; <PageSection type={\"nav\"} />;",
                    output: Some("import { PageSection } from '@patternfly/react-core'; <PageSection  />;"),
                    messages: &["The \"nav\" type for PageSection has been removed."],
                },
                InvalidCase {
                    code: "import { PageSection, PageSectionTypes } from '@patternfly/react-core'; <PageSection type={PageSectionTypes.nav} />;",
                    output: Some("import { PageSection, PageSectionTypes } from '@patternfly/react-core'; <PageSection  />;"),
                    messages: &["The \"nav\" type for PageSection has been removed."],
                },
                // Enum object imported under an alias
                InvalidCase {
                    code: "import { PageSection, PageSectionTypes as Types } from '@patternfly/react-core'; <PageSection type={Types.nav} />;",
                    output: Some("import { PageSection, PageSectionTypes as Types } from '@patternfly/react-core'; <PageSection  />;"),
                    messages: &["The \"nav\" type for PageSection has been removed."],
                },
            ],
        );
    }

    #[test]
    fn test_enum_reference_requires_the_import() {
        // `PageSectionTypes` bound to something other than the package export
        // must not match
        RuleTester::new(Box::new(PageSectionRemoveNavType)).run(
            &[
                "import { PageSection } from '@patternfly/react-core';\n\
                 const PageSectionTypes = { nav: 'nav' };\n\
                 <PageSection type={PageSectionTypes.nav} />;",
            ],
            &[],
        );
    }
}
