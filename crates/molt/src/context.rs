//! Lint context for rule execution.

use std::rc::Rc;

use compact_str::CompactString;
use oxc_ast::ast::Program;
use oxc_span::Span;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::diagnostic::{LintDiagnostic, Severity};
use crate::imports::{resolve_imports, PackageImports};
use crate::liveness::live_names;

/// Context passed to rules during one file's analysis.
///
/// Holds the parsed program, the source text, collected diagnostics, and a
/// per-file cache of package import resolutions. The cache lives for exactly
/// one pass over one file - offsets shift between the host's fix passes, so
/// nothing here survives a rewrite round.
pub struct LintContext<'a> {
    /// Parsed program for this file
    program: &'a Program<'a>,
    /// Source code being linted
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Collected diagnostics
    diagnostics: Vec<LintDiagnostic>,
    /// Current rule name (set by the visitor before calling rule methods)
    pub current_rule: &'static str,
    /// Import resolutions memoized per target package
    import_cache: FxHashMap<CompactString, Rc<PackageImports>>,
    /// Cached error count for fast access
    error_count: usize,
    /// Cached warning count for fast access
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    /// Initial capacity for the diagnostics vector
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 8;

    /// Create a new lint context for one file
    pub fn new(program: &'a Program<'a>, source: &'a str, filename: &'a str) -> Self {
        Self {
            program,
            source,
            filename,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            current_rule: "",
            import_cache: FxHashMap::default(),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Get the parsed program
    #[inline]
    pub fn program(&self) -> &'a Program<'a> {
        self.program
    }

    /// Get a slice of source text for a span
    #[inline]
    pub fn span_text(&self, span: Span) -> &'a str {
        &self.source[span.start as usize..span.end as usize]
    }

    /// Resolve the import declarations referencing `package`, memoized for
    /// the duration of this file pass.
    pub fn package_imports(&mut self, package: &str) -> Rc<PackageImports> {
        if let Some(hit) = self.import_cache.get(package) {
            return Rc::clone(hit);
        }
        let resolved = Rc::new(resolve_imports(self.program, package));
        self.import_cache
            .insert(CompactString::from(package), Rc::clone(&resolved));
        resolved
    }

    /// Compute which of `candidates` still occur outside import declarations.
    ///
    /// Recomputed on every call; liveness is never cached because it is
    /// queried against hypothetical rewrites.
    #[inline]
    pub fn live_locals(&self, candidates: &[&str]) -> FxHashSet<CompactString> {
        live_names(self.program, self.source, candidates)
    }

    /// Report a lint diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Report an error at a span
    #[inline]
    pub fn error(&mut self, message: impl Into<CompactString>, span: Span) {
        self.report(LintDiagnostic::error(
            self.current_rule,
            message,
            span.start,
            span.end,
        ));
    }

    /// Report a warning at a span
    #[inline]
    pub fn warn(&mut self, message: impl Into<CompactString>, span: Span) {
        self.report(LintDiagnostic::warn(
            self.current_rule,
            message,
            span.start,
            span.end,
        ));
    }

    /// Get collected diagnostics, consuming the context
    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    /// Get reference to collected diagnostics
    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Get the error count (cached, O(1))
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the warning count (cached, O(1))
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}
