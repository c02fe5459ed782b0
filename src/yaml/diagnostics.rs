//! YAML error diagnostics with source-located error messages

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// YAML syntax error with source location
#[derive(Debug, Error, Diagnostic)]
#[error("YAML syntax error: {message}")]
#[diagnostic(code(fwt::yaml::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    message: String,
}

impl YamlSyntaxError {
    /// Build a located diagnostic from a serde_yml error
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let (line, column) = err
            .location()
            .map(|loc| (loc.line(), loc.column()))
            .unwrap_or((1, 1));

        let offset = line_col_to_offset(source, line, column);
        let message = err.to_string();
        let help = suggest_fix(&message);

        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1)),
            help,
            message,
        }
    }
}

/// Convert 1-based line/column to a byte offset into `source`
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let mut remaining = line.saturating_sub(1);
    let mut offset = 0;

    for (i, ch) in source.char_indices() {
        if remaining == 0 {
            return (i + column.saturating_sub(1)).min(source.len().saturating_sub(1));
        }
        if ch == '\n' {
            remaining -= 1;
            offset = i + 1;
        }
    }

    offset.min(source.len().saturating_sub(1))
}

/// Suggestions for the YAML mistakes template files tend to contain
fn suggest_fix(message: &str) -> Option<String> {
    let msg = message.to_lowercase();

    if msg.contains("tab") {
        return Some(
            "YAML requires spaces for indentation, not tabs. Replace tabs with spaces.".to_string(),
        );
    }

    if msg.contains("duplicate key") {
        return Some("Each configuration key can only appear once.".to_string());
    }

    if msg.contains("mapping values are not allowed") {
        return Some("You may be missing a space after ':' or have incorrect indentation.".to_string());
    }

    if msg.contains("expected block end") {
        return Some("Check your indentation - it may be inconsistent.".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_to_offset() {
        let source = "one\ntwo\nthree";
        assert_eq!(line_col_to_offset(source, 1, 1), 0);
        assert_eq!(line_col_to_offset(source, 2, 1), 4);
        assert_eq!(line_col_to_offset(source, 3, 2), 9);
    }

    #[test]
    fn test_suggestions() {
        assert!(suggest_fix("found a tab character that violates indentation").is_some());
        assert!(suggest_fix("duplicate key").is_some());
        assert!(suggest_fix("something else entirely").is_none());
    }

    #[test]
    fn test_from_serde_error_carries_source() {
        let source = "minOptions: [unclosed";
        let err = serde_yml::from_str::<serde_json::Value>(source).unwrap_err();
        let diag = YamlSyntaxError::from_serde_error(&err, source, "config.yaml");
        assert!(!diag.message.is_empty());
    }
}
