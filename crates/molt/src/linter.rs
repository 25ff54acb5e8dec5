//! Main linter entry point.

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary};
use crate::rule::{Rule, RuleRegistry};
use crate::visitor::LintVisitor;

/// Lint result for a single file
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Filename that was linted
    pub filename: String,
    /// Collected diagnostics
    pub diagnostics: Vec<LintDiagnostic>,
    /// Number of errors
    pub error_count: usize,
    /// Number of warnings
    pub warning_count: usize,
    /// Whether the parser gave up on the file; no rules ran in that case
    pub parse_failed: bool,
}

impl LintResult {
    /// Check if there are any errors
    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Check if there are any diagnostics
    #[inline]
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of diagnostics carrying a fix
    #[inline]
    pub fn fixable_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.has_fix()).count()
    }

    fn empty(filename: &str, parse_failed: bool) -> Self {
        Self {
            filename: filename.to_string(),
            diagnostics: Vec::new(),
            error_count: 0,
            warning_count: 0,
            parse_failed,
        }
    }
}

/// Main linter struct.
///
/// Stateless across invocations: every call parses fresh and builds its own
/// per-file context, so the host's fix loop can re-invoke it safely.
pub struct Linter {
    registry: RuleRegistry,
}

impl Linter {
    /// Create a new linter with every upgrade rule
    #[inline]
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_all(),
        }
    }

    /// Create a linter with a custom rule registry
    #[inline]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Derive the source type from a file name, defaulting to JSX
    #[inline]
    pub fn source_type_for(filename: &str) -> SourceType {
        SourceType::from_path(filename).unwrap_or_else(|_| SourceType::jsx())
    }

    /// Lint a source file, deriving the source type from the file name
    #[inline]
    pub fn lint(&self, source: &str, filename: &str) -> LintResult {
        self.lint_source(source, filename, Self::source_type_for(filename))
    }

    /// Lint a source file with an explicit source type
    pub fn lint_source(
        &self,
        source: &str,
        filename: &str,
        source_type: SourceType,
    ) -> LintResult {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, source_type).parse();
        if ret.panicked {
            return LintResult::empty(filename, true);
        }
        let program = ret.program;

        let mut ctx = LintContext::new(&program, source, filename);

        // Rules whose target package is absent register no callbacks
        let mut active: Vec<&dyn Rule> = Vec::new();
        for rule in self.registry.rules() {
            ctx.current_rule = rule.meta().name;
            if rule.applies(&mut ctx) {
                active.push(rule.as_ref());
            }
        }

        if !active.is_empty() {
            let mut visitor = LintVisitor::new(&mut ctx, &active);
            visitor.run(&program);
        }

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        let diagnostics = ctx.into_diagnostics();

        LintResult {
            filename: filename.to_string(),
            diagnostics,
            error_count,
            warning_count,
            parse_failed: false,
        }
    }

    /// Lint multiple files and aggregate results
    pub fn lint_files(&self, files: &[(String, String)]) -> (Vec<LintResult>, LintSummary) {
        let mut results = Vec::with_capacity(files.len());
        let mut summary = LintSummary::default();

        for (filename, source) in files {
            let result = self.lint(source, filename);
            summary.error_count += result.error_count;
            summary.warning_count += result.warning_count;
            summary.fixable_count += result.fixable_count();
            results.push(result);
        }

        summary.file_count = files.len();
        (results, summary)
    }

    /// Get the rule registry
    #[inline]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lint_empty_source() {
        let linter = Linter::new();
        let result = linter.lint("", "test.tsx");
        assert!(!result.has_errors());
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_lint_without_target_imports_is_silent() {
        let linter = Linter::new();
        // Unrelated local named like an old component must not trigger
        let result = linter.lint(
            "const EmptyStatePrimary = () => null;\n<EmptyStatePrimary/>;",
            "test.tsx",
        );
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_lint_reports_rename() {
        let linter = Linter::new();
        let result = linter.lint(
            "import { EmptyStatePrimary } from '@patternfly/react-core';\n\
             <EmptyStatePrimary>Primary action</EmptyStatePrimary>;",
            "test.tsx",
        );
        assert!(result.has_errors());
        assert!(result.fixable_count() > 0);
    }

    #[test]
    fn test_parse_failure_is_flagged() {
        let linter = Linter::new();
        let result = linter.lint("import { from ???", "test.tsx");
        assert!(result.parse_failed);
        assert!(!result.has_diagnostics());
    }

    #[test]
    fn test_lint_files_batch() {
        let linter = Linter::new();
        let files = vec![
            ("a.tsx".to_string(), "const x = 1;".to_string()),
            ("b.tsx".to_string(), "const y = 2;".to_string()),
        ];
        let (results, summary) = linter.lint_files(&files);
        assert_eq!(results.len(), 2);
        assert_eq!(summary.file_count, 2);
    }
}
