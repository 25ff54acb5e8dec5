//! Conservative liveness tracking for imported local names.
//!
//! A candidate name is "live" when its text occurs, at identifier-token
//! granularity, anywhere inside a non-import top-level statement. The check
//! is deliberately syntax-level, not scope-level: an unrelated name with the
//! same spelling in a nested scope still counts as live. Removing a needed
//! import is unacceptable; keeping one an extra pass is harmless and
//! self-corrects on the next pass.
//!
//! Must be recomputed fresh after every rewrite round - offsets and token
//! text change between rounds.

use compact_str::CompactString;
use memchr::memmem;
use oxc_ast::ast::{Program, Statement};
use oxc_span::GetSpan;
use oxc_syntax::identifier::is_identifier_part;
use rustc_hash::FxHashSet;

/// Return the subset of `candidates` that still occur outside import
/// declarations.
pub fn live_names(
    program: &Program<'_>,
    source: &str,
    candidates: &[&str],
) -> FxHashSet<CompactString> {
    let mut live = FxHashSet::default();
    if candidates.is_empty() {
        return live;
    }

    for stmt in &program.body {
        if matches!(stmt, Statement::ImportDeclaration(_)) {
            continue;
        }
        let span = stmt.span();
        let text = &source[span.start as usize..span.end as usize];

        for &name in candidates {
            if live.contains(name) || name.is_empty() {
                continue;
            }
            if occurs_as_identifier(text, name) {
                live.insert(CompactString::from(name));
            }
        }

        if live.len() == candidates.len() {
            break;
        }
    }

    live
}

/// Whether `name` occurs in `text` with identifier boundaries on both sides.
///
/// Matching inside string or comment text is accepted; that only errs on the
/// conservative side.
fn occurs_as_identifier(text: &str, name: &str) -> bool {
    let finder = memmem::Finder::new(name.as_bytes());

    for pos in finder.find_iter(text.as_bytes()) {
        if !text.is_char_boundary(pos) || !text.is_char_boundary(pos + name.len()) {
            continue;
        }
        let before_ok = text[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| !is_identifier_part(c));
        let after_ok = text[pos + name.len()..]
            .chars()
            .next()
            .is_none_or(|c| !is_identifier_part(c));
        if before_ok && after_ok {
            return true;
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn live(source: &str, candidates: &[&str]) -> FxHashSet<CompactString> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::tsx()).parse();
        assert!(ret.errors.is_empty(), "parse errors in test source");
        live_names(&ret.program, source, candidates)
    }

    #[test]
    fn test_import_only_name_is_dead() {
        let result = live("import { Old } from 'pkg';\nconst x = 1;", &["Old"]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_usage_keeps_name_live() {
        let result = live("import { Old } from 'pkg';\n<Old>x</Old>;", &["Old"]);
        assert!(result.contains("Old"));
    }

    #[test]
    fn test_identifier_boundary_excludes_longer_names() {
        // `OldButton` must not keep `Old` alive
        let result = live(
            "import { Old } from 'pkg';\nconst OldButton = 1;",
            &["Old"],
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_nested_scope_occurrence_is_conservatively_live() {
        // Shadowed spelling in an unrelated scope still counts
        let result = live(
            "import { Old } from 'pkg';\nfunction f() { const Old = 1; return Old; }",
            &["Old"],
        );
        assert!(result.contains("Old"));
    }

    #[test]
    fn test_member_expression_usage_is_live() {
        let result = live(
            "import { PageSectionTypes } from 'pkg';\nconst t = PageSectionTypes.nav;",
            &["PageSectionTypes"],
        );
        assert!(result.contains("PageSectionTypes"));
    }

    #[test]
    fn test_multiple_candidates_partial_liveness() {
        let result = live(
            "import { OldA, OldB } from 'pkg';\n<OldA/>;",
            &["OldA", "OldB"],
        );
        assert!(result.contains("OldA"));
        assert!(!result.contains("OldB"));
    }

    #[test]
    fn test_reexport_keeps_name_live() {
        let result = live("import { Old } from 'pkg';\nexport { Old };", &["Old"]);
        assert!(result.contains("Old"));
    }
}
