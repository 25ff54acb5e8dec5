//! Fix command - rewrite files in place, reapplying fixes until each file
//! converges or the pass cap is reached.

use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use clap::Args;
use rayon::prelude::*;

use molt::{fix, format_results, LintResult, Linter, OutputFormat, Severity};

#[derive(Args)]
pub struct FixArgs {
    /// Glob pattern(s) or directories to fix
    #[arg(default_value = ".")]
    pub patterns: Vec<String>,

    /// Show what would change without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Quiet mode - only show summary
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: FixArgs) {
    let start = Instant::now();

    let files = super::collect_files(&args.patterns);
    if files.is_empty() {
        eprintln!("No source files found matching patterns: {:?}", args.patterns);
        return;
    }

    let linter = Linter::new();
    let changed_count = AtomicUsize::new(0);
    let applied_count = AtomicUsize::new(0);
    let remaining_errors = AtomicUsize::new(0);

    // Each file is independent: read, converge, write back on change
    let leftovers: Vec<_> = files
        .par_iter()
        .filter_map(|path| {
            let source = match fs::read_to_string(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", path.display(), e);
                    return None;
                }
            };

            let filename = path.to_string_lossy().to_string();
            let outcome = match fix(&linter, &source, &filename) {
                Ok(outcome) => outcome,
                Err(e) => {
                    eprintln!("{}", e);
                    return None;
                }
            };

            if outcome.changed() {
                if !args.dry_run {
                    if let Err(e) = fs::write(path, &outcome.code) {
                        eprintln!("Failed to write {}: {}", path.display(), e);
                        return None;
                    }
                }
                changed_count.fetch_add(1, Ordering::Relaxed);
                applied_count.fetch_add(outcome.applied, Ordering::Relaxed);
            }

            if outcome.remaining.is_empty() {
                return None;
            }

            // Diagnostics the fixer could not resolve need a human
            let error_count = outcome
                .remaining
                .iter()
                .filter(|d| d.severity == Severity::Error)
                .count();
            let warning_count = outcome.remaining.len() - error_count;
            remaining_errors.fetch_add(error_count, Ordering::Relaxed);

            let result = LintResult {
                filename: filename.clone(),
                diagnostics: outcome.remaining,
                error_count,
                warning_count,
                parse_failed: false,
            };
            Some((filename, outcome.code, result))
        })
        .collect();

    if !args.quiet && !leftovers.is_empty() {
        let results: Vec<_> = leftovers.iter().map(|(_, _, r)| r).cloned().collect();
        let sources: Vec<_> = leftovers
            .iter()
            .map(|(f, s, _)| (f.clone(), s.clone()))
            .collect();
        let output = format_results(&results, &sources, OutputFormat::Text);
        if !output.trim().is_empty() {
            print!("{}", output);
        }
    }

    let changed = changed_count.load(Ordering::Relaxed);
    let applied = applied_count.load(Ordering::Relaxed);
    let unresolved = remaining_errors.load(Ordering::Relaxed);
    let elapsed = start.elapsed();

    let action = if args.dry_run { "Would fix" } else { "Fixed" };
    println!(
        "{} {} file{} ({} fix{} applied) in {:.4?}",
        action,
        changed,
        if changed == 1 { "" } else { "s" },
        applied,
        if applied == 1 { "" } else { "es" },
        elapsed
    );

    if unresolved > 0 {
        eprintln!(
            "{} problem{} could not be fixed automatically",
            unresolved,
            if unresolved == 1 { "" } else { "s" }
        );
        std::process::exit(1);
    }
}
