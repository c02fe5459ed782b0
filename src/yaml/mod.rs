//! YAML parsing with miette diagnostics

pub mod diagnostics;

pub use diagnostics::YamlSyntaxError;

use miette::{IntoDiagnostic, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Parse a YAML file into `T`, turning syntax errors into located
/// diagnostics that point at the offending line
pub fn parse_yaml_file<T: DeserializeOwned + 'static>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).into_diagnostic()?;
    parse_yaml_str(&content, &path.display().to_string())
}

/// Parse a YAML string into `T` with a filename for diagnostics
pub fn parse_yaml_str<T: DeserializeOwned + 'static>(content: &str, filename: &str) -> Result<T> {
    serde_yml::from_str(content)
        .map_err(|e| YamlSyntaxError::from_serde_error(&e, content, filename).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_yaml() {
        let value: serde_json::Value = parse_yaml_str("minOptions: 2", "test.yaml").unwrap();
        assert_eq!(value["minOptions"], 2);
    }

    #[test]
    fn test_parse_invalid_yaml_is_diagnostic() {
        let result = parse_yaml_str::<serde_json::Value>("a: [1, 2", "broken.yaml");
        assert!(result.is_err());
    }
}
