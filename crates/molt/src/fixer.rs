//! Fix application: the host side of the codemod contract.
//!
//! Rules are written assuming re-invocation, not single-shot execution: a
//! rename needs one pass to rewrite usages and a second to prune the old
//! import. This module drives that loop - apply every non-conflicting fix
//! from one pass, re-parse, re-lint - until no fixable diagnostics remain or
//! the pass cap is reached.

use oxc_span::SourceType;
use thiserror::Error;

use crate::diagnostic::{LintDiagnostic, TextEdit};
use crate::linter::Linter;

/// Upper bound on fix reapplication rounds per file. Any single rule
/// converges in at most two; the cap only guards against a misbehaving rule
/// oscillating forever.
pub const FIX_PASS_LIMIT: usize = 10;

/// Fixing failed before any edit was applied
#[derive(Debug, Error)]
pub enum FixError {
    /// The parser gave up on the file; applying edits computed from a broken
    /// tree could corrupt it, so nothing is written.
    #[error("{0}: source failed to parse; no fixes were applied")]
    Parse(String),
}

/// Result of driving one file to its fixed point
#[derive(Debug)]
pub struct FixOutcome {
    /// Source text after all applied passes
    pub code: String,
    /// Number of passes that applied at least one fix
    pub passes: usize,
    /// Total number of fixes applied
    pub applied: usize,
    /// Diagnostics still present after the final pass
    pub remaining: Vec<LintDiagnostic>,
}

impl FixOutcome {
    /// Whether any fix changed the source
    #[inline]
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

/// Apply a set of non-overlapping edits to a source string.
///
/// Edits are applied in descending offset order so earlier offsets stay
/// valid; at a shared start offset a deletion applies before an insertion.
pub fn apply_edits(source: &str, edits: &[TextEdit]) -> String {
    let mut edits = edits.to_vec();
    edits.sort_by(|a, b| b.start.cmp(&a.start).then(b.end.cmp(&a.end)));

    let mut out = source.to_string();
    for edit in edits {
        let start = edit.start as usize;
        let end = edit.end as usize;
        if start <= end && end <= out.len() {
            out.replace_range(start..end, &edit.new_text);
        }
    }
    out
}

/// Collect the edits to apply in one pass.
///
/// Each diagnostic's fix is atomic: either all of its edits are taken or none.
/// A fix overlapping an already-selected one is dropped for this pass; the
/// rule will re-report it against the re-parsed source next pass. Returns the
/// selected edits and the number of fixes they came from.
pub fn select_pass_fixes(diagnostics: &[LintDiagnostic]) -> (Vec<TextEdit>, usize) {
    let mut selected: Vec<TextEdit> = Vec::new();
    let mut occupied: Vec<(u32, u32)> = Vec::new();
    let mut fix_count = 0;

    let mut fixes: Vec<&crate::diagnostic::Fix> =
        diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();
    fixes.sort_by_key(|fix| fix.edits.iter().map(|e| e.start).min().unwrap_or(0));

    for fix in fixes {
        let conflict = fix.edits.iter().any(|edit| {
            occupied.iter().any(|&(start, end)| {
                if edit.is_insertion() && start == end {
                    // Two insertions at the same point would apply in an
                    // unspecified order
                    edit.start == start
                } else {
                    edit.start < end && start < edit.end
                }
            })
        });
        if conflict {
            continue;
        }
        for edit in &fix.edits {
            occupied.push((edit.start, edit.end));
            selected.push(edit.clone());
        }
        fix_count += 1;
    }

    (selected, fix_count)
}

/// Drive a file to its fixed point, deriving the source type from the name
#[inline]
pub fn fix(linter: &Linter, source: &str, filename: &str) -> Result<FixOutcome, FixError> {
    fix_source(linter, source, filename, Linter::source_type_for(filename))
}

/// Drive a file to its fixed point with an explicit source type
pub fn fix_source(
    linter: &Linter,
    source: &str,
    filename: &str,
    source_type: SourceType,
) -> Result<FixOutcome, FixError> {
    let mut code = source.to_string();
    let mut passes = 0;
    let mut applied = 0;

    loop {
        let result = linter.lint_source(&code, filename, source_type);
        if result.parse_failed {
            return Err(FixError::Parse(filename.to_string()));
        }

        let (edits, fix_count) = select_pass_fixes(&result.diagnostics);
        if edits.is_empty() || passes == FIX_PASS_LIMIT {
            return Ok(FixOutcome {
                code,
                passes,
                applied,
                remaining: result.diagnostics,
            });
        }

        code = apply_edits(&code, &edits);
        passes += 1;
        applied += fix_count;
    }
}
