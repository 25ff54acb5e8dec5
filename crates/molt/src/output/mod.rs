//! Output formatters for codemod diagnostics.

mod text;

pub use text::*;

use serde::Serialize;

use crate::linter::LintResult;

/// Output format for lint results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rich terminal output with code snippets
    #[default]
    Text,
    /// JSON output for tooling integration
    Json,
}

/// Format lint results according to the specified format
pub fn format_results(
    results: &[LintResult],
    sources: &[(String, String)],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => format_text(results, sources),
        OutputFormat::Json => format_json(results, sources),
    }
}

/// JSON output structure for a single file
#[derive(Debug, Serialize)]
pub struct JsonFileResult {
    pub file: String,
    pub messages: Vec<JsonMessage>,
    #[serde(rename = "errorCount")]
    pub error_count: usize,
    #[serde(rename = "warningCount")]
    pub warning_count: usize,
    #[serde(rename = "fixableCount")]
    pub fixable_count: usize,
}

/// JSON output structure for a single message
#[derive(Debug, Serialize)]
pub struct JsonMessage {
    #[serde(rename = "ruleId")]
    pub rule_id: &'static str,
    pub severity: u8,
    pub message: String,
    pub line: u32,
    pub column: u32,
    #[serde(rename = "endLine")]
    pub end_line: u32,
    #[serde(rename = "endColumn")]
    pub end_column: u32,
    pub fixable: bool,
}

/// Convert a byte offset to 1-based line and column numbers
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let before = &source[..offset];
    let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map(|p| p + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() as u32 + 1;
    (line, column)
}

/// Format results as JSON
fn format_json(results: &[LintResult], sources: &[(String, String)]) -> String {
    let source_for = |file: &str| {
        sources
            .iter()
            .find(|(f, _)| f == file)
            .map(|(_, s)| s.as_str())
            .unwrap_or("")
    };

    let json_results: Vec<JsonFileResult> = results
        .iter()
        .map(|r| {
            let source = source_for(&r.filename);
            JsonFileResult {
                file: r.filename.clone(),
                messages: r
                    .diagnostics
                    .iter()
                    .map(|d| {
                        let (line, column) = offset_to_line_col(source, d.start);
                        let (end_line, end_column) = offset_to_line_col(source, d.end);
                        JsonMessage {
                            rule_id: d.rule_name,
                            severity: match d.severity {
                                crate::diagnostic::Severity::Error => 2,
                                crate::diagnostic::Severity::Warning => 1,
                            },
                            message: d.message.to_string(),
                            line,
                            column,
                            end_line,
                            end_column,
                            fixable: d.has_fix(),
                        }
                    })
                    .collect(),
                error_count: r.error_count,
                warning_count: r.warning_count,
                fixable_count: r.fixable_count(),
            }
        })
        .collect();

    serde_json::to_string_pretty(&json_results).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Linter;

    #[test]
    fn test_offset_to_line_col() {
        let source = "abc\ndef\nghi";
        assert_eq!(offset_to_line_col(source, 0), (1, 1));
        assert_eq!(offset_to_line_col(source, 4), (2, 1));
        assert_eq!(offset_to_line_col(source, 6), (2, 3));
        assert_eq!(offset_to_line_col(source, 8), (3, 1));
    }

    #[test]
    fn test_json_output_shape() {
        let linter = Linter::new();
        let source =
            "import { EmptyStatePrimary } from '@patternfly/react-core';\n<EmptyStatePrimary/>;";
        let result = linter.lint(source, "test.tsx");
        let json = format_results(
            &[result],
            &[("test.tsx".to_string(), source.to_string())],
            OutputFormat::Json,
        );
        assert!(json.contains("\"ruleId\""));
        assert!(json.contains("pf-v5/emptyState-rename-components"));
        assert!(json.contains("\"fixable\": true"));
    }
}
