//! Category configuration validators
//!
//! One pure validator per category, dispatched through
//! [`validate_category_configuration`]. Validators collect every
//! applicable error rather than stopping at the first one, so a host UI
//! can show all problems at once. Failures are values, never errors:
//! callers branch on [`ValidationResult::valid`].

use crate::core::category::Category;
use crate::wizard::config::CategoryData;

/// Outcome of validating one category configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Build a result from collected errors; valid iff none
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// A single-error failure, used for unknown categories arriving as
    /// strings from outside the type system
    pub fn unknown_category(name: &str) -> Self {
        Self::from_errors(vec![format!("Unknown template category: {}", name)])
    }
}

/// Validate `data` against the business rules of `category`
pub fn validate_category_configuration(category: Category, data: &CategoryData) -> ValidationResult {
    match category {
        Category::Polls => validate_poll_config(data),
        Category::Quiz => validate_quiz_config(data),
        Category::Ecommerce => validate_product_config(data),
        Category::Services => validate_appointment_config(data),
        Category::DataCollection => validate_restaurant_config(data),
        Category::Events => validate_events_config(data),
    }
}

/// Allowed vote tracking methods for polls
pub const VOTE_TRACKING_METHODS: &[&str] = &["session", "ip", "fingerprint"];

/// Allowed appointment slot intervals, in minutes
pub const SLOT_INTERVALS: &[i64] = &[15, 30, 60, 120];

fn validate_poll_config(data: &CategoryData) -> ValidationResult {
    let mut errors = Vec::new();

    let min = require_integer(data, "minOptions", "Minimum options", &mut errors);
    let max = require_integer(data, "maxOptions", "Maximum options", &mut errors);

    if let Some(min) = min {
        if min < 2 {
            errors.push("Minimum options must be at least 2".to_string());
        }
    }
    if let Some(max) = max {
        if max < 2 {
            errors.push("Maximum options must be at least 2".to_string());
        }
        if max > 20 {
            errors.push("Maximum options must be 20 or fewer".to_string());
        }
    }
    if let (Some(min), Some(max)) = (min, max) {
        if max < min {
            errors.push(
                "Maximum options must be greater than or equal to minimum options".to_string(),
            );
        }
    }

    if data.contains("voteTracking") {
        match data.get_str("voteTracking") {
            Some(method) if VOTE_TRACKING_METHODS.contains(&method) => {}
            _ => errors.push(
                "Vote tracking must be one of: session, ip, fingerprint".to_string(),
            ),
        }
    }

    ValidationResult::from_errors(errors)
}

fn validate_quiz_config(data: &CategoryData) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(min) = require_integer(data, "minQuestions", "Minimum questions", &mut errors) {
        if min < 1 {
            errors.push("Minimum questions must be at least 1".to_string());
        }
        if min > 50 {
            errors.push("Minimum questions must be 50 or fewer".to_string());
        }
    }

    if !data.contains("passingScore") {
        errors.push("Passing score is required".to_string());
    } else {
        match data.get_f64("passingScore") {
            Some(score) if (0.0..=100.0).contains(&score) => {}
            Some(_) => errors.push("Passing score must be between 0 and 100".to_string()),
            None => errors.push("Passing score must be a number".to_string()),
        }
    }

    check_optional_bool(data, "allowRetakes", "Allow retakes", &mut errors);

    ValidationResult::from_errors(errors)
}

fn validate_product_config(data: &CategoryData) -> ValidationResult {
    let mut errors = Vec::new();

    if !data.contains("enableInventory") {
        errors.push("Enable inventory is required".to_string());
    } else if data.get_bool("enableInventory").is_none() {
        errors.push("Enable inventory must be true or false".to_string());
    }

    check_optional_bool(data, "enableTax", "Enable tax", &mut errors);

    if data.get_bool("enableTax") == Some(true) && data.contains("taxRate") {
        match data.get_f64("taxRate") {
            Some(rate) if (0.0..=1.0).contains(&rate) => {}
            _ => errors.push("Tax rate must be between 0 and 1".to_string()),
        }
    }

    ValidationResult::from_errors(errors)
}

fn validate_appointment_config(data: &CategoryData) -> ValidationResult {
    let mut errors = Vec::new();

    if !data.contains("slotInterval") {
        errors.push("Slot interval is required".to_string());
    } else {
        match data.get_i64("slotInterval") {
            Some(interval) if SLOT_INTERVALS.contains(&interval) => {}
            _ => errors.push(
                "Slot interval must be one of: 15, 30, 60, 120 minutes".to_string(),
            ),
        }
    }

    if let Some(max) =
        require_integer(data, "maxBookingsPerSlot", "Max bookings per slot", &mut errors)
    {
        if max < 1 {
            errors.push("Max bookings per slot must be at least 1".to_string());
        }
        if max > 100 {
            errors.push("Max bookings per slot must be 100 or fewer".to_string());
        }
    }

    ValidationResult::from_errors(errors)
}

fn validate_restaurant_config(data: &CategoryData) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(min) = require_integer(data, "minItems", "Minimum items", &mut errors) {
        if min < 1 {
            errors.push("Minimum items must be at least 1".to_string());
        }
    }

    check_optional_bool(data, "enableCategories", "Enable categories", &mut errors);

    ValidationResult::from_errors(errors)
}

fn validate_events_config(data: &CategoryData) -> ValidationResult {
    let mut errors = Vec::new();

    check_optional_bool(data, "allowGuestCount", "Allow guest count", &mut errors);

    if let Some(max) =
        require_integer(data, "maxTicketsPerOrder", "Max tickets per order", &mut errors)
    {
        if max < 1 {
            errors.push("Max tickets per order must be at least 1".to_string());
        }
        if max > 100 {
            errors.push("Max tickets per order must be 100 or fewer".to_string());
        }
    }

    ValidationResult::from_errors(errors)
}

/// Require `key` to be present and an integer; returns the value when it
/// is, pushing an error otherwise
fn require_integer(
    data: &CategoryData,
    key: &str,
    label: &str,
    errors: &mut Vec<String>,
) -> Option<i64> {
    if !data.contains(key) {
        errors.push(format!("{} is required", label));
        return None;
    }
    match data.get_i64(key) {
        Some(value) => Some(value),
        None => {
            errors.push(format!("{} must be a whole number", label));
            None
        }
    }
}

fn check_optional_bool(data: &CategoryData, key: &str, label: &str, errors: &mut Vec<String>) {
    if data.contains(key) && data.get_bool(key).is_none() {
        errors.push(format!("{} must be true or false", label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(pairs: &[(&str, serde_json::Value)]) -> CategoryData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_empty_data_invalid_for_every_category() {
        for cat in Category::all() {
            let result = validate_category_configuration(*cat, &CategoryData::new());
            assert!(!result.valid, "{} accepted empty data", cat);
            assert!(
                result.errors.iter().any(|e| e.contains("required")),
                "{} errors do not name a required field: {:?}",
                cat,
                result.errors
            );
        }
    }

    #[test]
    fn test_poll_valid_config() {
        let result = validate_category_configuration(
            Category::Polls,
            &data(&[
                ("minOptions", json!(2)),
                ("maxOptions", json!(10)),
                ("voteTracking", json!("session")),
            ]),
        );
        assert!(result.valid, "{:?}", result.errors);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_poll_min_exceeds_max() {
        let result = validate_category_configuration(
            Category::Polls,
            &data(&[("minOptions", json!(5)), ("maxOptions", json!(3))]),
        );
        assert!(!result.valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.contains("greater than or equal to")));
    }

    #[test]
    fn test_poll_max_over_limit() {
        let result = validate_category_configuration(
            Category::Polls,
            &data(&[("minOptions", json!(2)), ("maxOptions", json!(25))]),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("20 or fewer")));
    }

    #[test]
    fn test_poll_bad_tracking_method() {
        let result = validate_category_configuration(
            Category::Polls,
            &data(&[
                ("minOptions", json!(2)),
                ("maxOptions", json!(4)),
                ("voteTracking", json!("cookie")),
            ]),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("Vote tracking")));
    }

    #[test]
    fn test_poll_collects_all_errors() {
        // min too low, max too high, bad tracking: three errors at once
        let result = validate_category_configuration(
            Category::Polls,
            &data(&[
                ("minOptions", json!(1)),
                ("maxOptions", json!(30)),
                ("voteTracking", json!("cookie")),
            ]),
        );
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 3, "{:?}", result.errors);
    }

    #[test]
    fn test_quiz_valid_config() {
        let result = validate_category_configuration(
            Category::Quiz,
            &data(&[
                ("minQuestions", json!(3)),
                ("passingScore", json!(70)),
                ("allowRetakes", json!(true)),
            ]),
        );
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn test_quiz_score_out_of_range() {
        let result = validate_category_configuration(
            Category::Quiz,
            &data(&[("minQuestions", json!(3)), ("passingScore", json!(150))]),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("between 0 and 100")));
    }

    #[test]
    fn test_quiz_retakes_must_be_bool() {
        let result = validate_category_configuration(
            Category::Quiz,
            &data(&[
                ("minQuestions", json!(3)),
                ("passingScore", json!(70)),
                ("allowRetakes", json!("yes")),
            ]),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("Allow retakes")));
    }

    #[test]
    fn test_product_tax_rate_range() {
        let result = validate_category_configuration(
            Category::Ecommerce,
            &data(&[
                ("enableInventory", json!(true)),
                ("enableTax", json!(true)),
                ("taxRate", json!(1.5)),
            ]),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("between 0 and 1")));
    }

    #[test]
    fn test_product_tax_rate_ignored_when_tax_disabled() {
        let result = validate_category_configuration(
            Category::Ecommerce,
            &data(&[
                ("enableInventory", json!(false)),
                ("enableTax", json!(false)),
                ("taxRate", json!(9.0)),
            ]),
        );
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn test_appointment_interval_not_in_allowed_set() {
        let result = validate_category_configuration(
            Category::Services,
            &data(&[("slotInterval", json!(45)), ("maxBookingsPerSlot", json!(1))]),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("15, 30, 60, 120")));
    }

    #[test]
    fn test_appointment_valid_config() {
        let result = validate_category_configuration(
            Category::Services,
            &data(&[("slotInterval", json!(30)), ("maxBookingsPerSlot", json!(1))]),
        );
        assert!(result.valid, "{:?}", result.errors);
    }

    #[test]
    fn test_restaurant_min_items() {
        let result = validate_category_configuration(
            Category::DataCollection,
            &data(&[("minItems", json!(0))]),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("at least 1")));
    }

    #[test]
    fn test_events_ticket_cap() {
        let result = validate_category_configuration(
            Category::Events,
            &data(&[("maxTicketsPerOrder", json!(200)), ("allowGuestCount", json!(true))]),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("100 or fewer")));
    }

    #[test]
    fn test_non_integer_value_reported() {
        let result = validate_category_configuration(
            Category::Polls,
            &data(&[("minOptions", json!("two")), ("maxOptions", json!(5))]),
        );
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("whole number")));
    }
}
