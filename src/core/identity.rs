//! Identity for templates and generated form fields
//!
//! Templates get a prefixed ULID (`FORM-<ULID>`), which sorts by creation
//! time and is safe to use as a filename. Individual form fields get a
//! lighter-weight id of the shape `prefix_<millis>_<base36 suffix>`; the
//! prefix keeps the ids readable when debugging a schema by eye.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use ulid::Ulid;

/// Prefix used for template/schema identifiers
pub const TEMPLATE_PREFIX: &str = "FORM";

/// Unique identifier for a form template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(Ulid);

impl TemplateId {
    /// Generate a fresh id
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Parse an id from its string form
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }

    /// Get the ULID component
    pub fn ulid(&self) -> Ulid {
        self.0
    }
}

impl Default for TemplateId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", TEMPLATE_PREFIX, self.0)
    }
}

impl FromStr for TemplateId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, ulid_str) = s
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingDelimiter(s.to_string()))?;

        if !prefix.eq_ignore_ascii_case(TEMPLATE_PREFIX) {
            return Err(IdParseError::InvalidPrefix(prefix.to_string()));
        }

        let ulid = Ulid::from_string(ulid_str)
            .map_err(|e| IdParseError::InvalidUlid(ulid_str.to_string(), e.to_string()))?;

        Ok(Self(ulid))
    }
}

impl Serialize for TemplateId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TemplateId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing template IDs
#[derive(Debug, Error)]
pub enum IdParseError {
    #[error("invalid template id prefix: '{0}' (expected FORM)")]
    InvalidPrefix(String),

    #[error("missing '-' delimiter in template id: '{0}'")]
    MissingDelimiter(String),

    #[error("invalid ULID '{0}': {1}")]
    InvalidUlid(String, String),
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 6;

/// Generate a field-level id: `prefix_<unix millis>_<6 base36 chars>`
///
/// Unique within a process session; the timestamp keeps ids roughly
/// sortable and the random suffix avoids collisions for fields created
/// in the same millisecond.
pub fn field_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect();
    format!("{}_{}_{}", prefix, millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_id_format() {
        let id = TemplateId::new();
        let s = id.to_string();
        assert!(s.starts_with("FORM-"));
        assert_eq!(s.len(), 31); // FORM- (5) + ULID (26)
    }

    #[test]
    fn test_template_id_roundtrip() {
        let original = TemplateId::new();
        let parsed = TemplateId::parse(&original.to_string()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_template_id_wrong_prefix() {
        let err = TemplateId::parse("REQ-01HQ3K4N5M6P7R8S9T0UVWXYZ1").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidPrefix(_)));
    }

    #[test]
    fn test_template_id_missing_delimiter() {
        let err = TemplateId::parse("FORM01HQ3K4N5M6P7R8S9T0UVWXYZ").unwrap_err();
        assert!(matches!(err, IdParseError::MissingDelimiter(_)));
    }

    #[test]
    fn test_template_id_invalid_ulid() {
        let err = TemplateId::parse("FORM-notaulid").unwrap_err();
        assert!(matches!(err, IdParseError::InvalidUlid(_, _)));
    }

    #[test]
    fn test_field_id_shape() {
        let id = field_id("fld");
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "fld");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), SUFFIX_LEN);
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_field_ids_unique() {
        let ids: HashSet<String> = (0..100).map(|_| field_id("fld")).collect();
        assert_eq!(ids.len(), 100);
    }
}
