//! Test harness for codemod rules.
//!
//! Mirrors the host engine's contract: each invalid case covers exactly one
//! pass of the fix loop. A rule that needs two passes (rename, then prune)
//! gets one case per pass, with the first case's output as the second case's
//! input. From the consumer's point of view the host reapplies fixes up to
//! ten times; tests pin down what each single run does.

use oxc_span::SourceType;

use crate::fixer::{apply_edits, select_pass_fixes};
use crate::linter::Linter;
use crate::rule::{Rule, RuleRegistry};

/// An invalid-case fixture: expected messages in report order, and the
/// expected source after one fix pass. `output: None` asserts the case
/// reports without changing the source (fix withheld).
pub struct InvalidCase<'a> {
    pub code: &'a str,
    pub output: Option<&'a str>,
    pub messages: &'a [&'a str],
}

/// Runs valid/invalid fixtures against a single rule.
pub struct RuleTester {
    linter: Linter,
    rule_name: &'static str,
}

impl RuleTester {
    /// Create a tester for one rule
    pub fn new(rule: Box<dyn Rule>) -> Self {
        let rule_name = rule.meta().name;
        let mut registry = RuleRegistry::new();
        registry.register(rule);
        Self {
            linter: Linter::with_registry(registry),
            rule_name,
        }
    }

    /// Assert every valid case is silent and every invalid case reports the
    /// expected messages and one-pass output.
    pub fn run(&self, valid: &[&str], invalid: &[InvalidCase<'_>]) {
        for (i, code) in valid.iter().enumerate() {
            let result = self.linter.lint_source(code, "test.tsx", SourceType::tsx());
            assert!(
                !result.parse_failed,
                "{}: valid case {} failed to parse:\n{}",
                self.rule_name, i, code
            );
            assert!(
                result.diagnostics.is_empty(),
                "{}: valid case {} reported {:?}:\n{}",
                self.rule_name,
                i,
                result
                    .diagnostics
                    .iter()
                    .map(|d| d.message.as_str())
                    .collect::<Vec<_>>(),
                code
            );
        }

        for (i, case) in invalid.iter().enumerate() {
            let result = self
                .linter
                .lint_source(case.code, "test.tsx", SourceType::tsx());
            assert!(
                !result.parse_failed,
                "{}: invalid case {} failed to parse:\n{}",
                self.rule_name, i, case.code
            );

            let messages: Vec<&str> = result
                .diagnostics
                .iter()
                .map(|d| d.message.as_str())
                .collect();
            assert_eq!(
                messages, case.messages,
                "{}: invalid case {} messages mismatch:\n{}",
                self.rule_name, i, case.code
            );

            let (edits, _) = select_pass_fixes(&result.diagnostics);
            let fixed = apply_edits(case.code, &edits);
            match case.output {
                Some(expected) => assert_eq!(
                    fixed, expected,
                    "{}: invalid case {} output mismatch after one pass",
                    self.rule_name, i
                ),
                None => assert_eq!(
                    fixed, case.code,
                    "{}: invalid case {} must not change the source",
                    self.rule_name, i
                ),
            }
        }
    }
}
