//! CLI subcommands.

pub mod check;
pub mod fix;

use std::path::PathBuf;

use glob::glob;
use ignore::Walk;

/// File extensions the codemod understands
const EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Collect source files from glob patterns or directory paths.
///
/// Patterns containing glob characters are expanded with `glob`; plain paths
/// are walked recursively, respecting `.gitignore`. `node_modules` is always
/// skipped.
pub fn collect_files(patterns: &[String]) -> Vec<PathBuf> {
    patterns
        .iter()
        .flat_map(|pattern| {
            if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
                glob(pattern)
                    .ok()
                    .into_iter()
                    .flatten()
                    .filter_map(|r| r.ok())
                    .filter(|p| is_source_file(p))
                    .collect::<Vec<_>>()
            } else {
                Walk::new(pattern)
                    .filter_map(|e| e.ok())
                    .filter(|e| is_source_file(e.path()))
                    .map(|e| e.path().to_path_buf())
                    .collect::<Vec<_>>()
            }
        })
        .collect()
}

fn is_source_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.contains(&ext))
        && !path.components().any(|c| c.as_os_str() == "node_modules")
}
