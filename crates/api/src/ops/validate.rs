//! Per-command validation rule sets.
//!
//! Rules are declared here and evaluated by the engine in
//! `hacienda_core::validation`. A command that fails validation never
//! reaches its handler.

use serde::Serialize;
use serde_json::{json, Value};

use hacienda_core::validation::evaluator::evaluate_rules;
use hacienda_core::validation::rules::{
    FieldViolation, ValidationReport, ValidationRule, ValidationSeverity,
};
use hacienda_db::models::property::PropertyFilter;

fn rule(field: &str, rule_type: &str, config: Value, message: &str) -> ValidationRule {
    ValidationRule {
        field_name: field.to_string(),
        rule_type: rule_type.to_string(),
        config,
        error_message: message.to_string(),
        severity: ValidationSeverity::Error,
    }
}

const PHOTO_PATTERN: &str = "^https?://";
const MAX_NAME_LENGTH: u64 = 200;

pub fn create_owner_rules() -> Vec<ValidationRule> {
    vec![
        rule("name", "required", json!({}), "Name is required"),
        rule(
            "name",
            "max_length",
            json!({ "max": MAX_NAME_LENGTH }),
            "Name must be at most 200 characters",
        ),
        rule("address", "required", json!({}), "Address is required"),
        rule("photo", "required", json!({}), "Photo is required"),
        rule(
            "photo",
            "regex_pattern",
            json!({ "pattern": PHOTO_PATTERN }),
            "Photo must be an http(s) URL",
        ),
    ]
}

pub fn update_owner_rules() -> Vec<ValidationRule> {
    let mut rules = vec![rule("id", "required", json!({}), "Id is required")];
    rules.extend(create_owner_rules());
    rules
}

pub fn create_property_rules() -> Vec<ValidationRule> {
    vec![
        rule("name", "required", json!({}), "Name is required"),
        rule("address", "required", json!({}), "Address is required"),
        rule(
            "code_internal",
            "required",
            json!({}),
            "CodeInternal is required",
        ),
        rule(
            "price",
            "min_value",
            json!({ "min": 0 }),
            "Price must not be negative",
        ),
        rule(
            "year",
            "min_value",
            json!({ "min": 1800 }),
            "Year must be 1800 or later",
        ),
        rule(
            "year",
            "max_value",
            json!({ "max": 2100 }),
            "Year must be 2100 or earlier",
        ),
    ]
}

pub fn update_property_rules() -> Vec<ValidationRule> {
    vec![
        rule("id", "required", json!({}), "Id is required"),
        rule(
            "year",
            "min_value",
            json!({ "min": 1800 }),
            "Year must be 1800 or later",
        ),
        rule(
            "year",
            "max_value",
            json!({ "max": 2100 }),
            "Year must be 2100 or earlier",
        ),
    ]
}

pub fn change_price_rules() -> Vec<ValidationRule> {
    vec![
        rule("id", "required", json!({}), "Id is required"),
        rule("price", "required", json!({}), "Price is required"),
        rule(
            "price",
            "min_value",
            json!({ "min": 0 }),
            "Price must not be negative",
        ),
    ]
}

pub fn property_filter_rules() -> Vec<ValidationRule> {
    vec![
        rule(
            "min_price",
            "min_value",
            json!({ "min": 0 }),
            "MinPrice must not be negative",
        ),
        rule(
            "max_price",
            "min_value",
            json!({ "min": 0 }),
            "MaxPrice must not be negative",
        ),
    ]
}

/// Serialize a command payload and evaluate a rule set against it.
pub fn check<T: Serialize>(rules: &[ValidationRule], payload: &T) -> ValidationReport {
    let value = serde_json::to_value(payload).unwrap_or(Value::Null);
    let map = match value {
        Value::Object(map) => map,
        _ => serde_json::Map::new(),
    };
    evaluate_rules(rules, &map)
}

/// Cross-field check: `min_price` must not exceed `max_price`.
pub fn check_price_range(filter: &PropertyFilter) -> Option<FieldViolation> {
    match (filter.min_price, filter.max_price) {
        (Some(min), Some(max)) if min > max => Some(FieldViolation {
            field: "min_price".to_string(),
            rule_type: "range".to_string(),
            message: "MinPrice must not exceed MaxPrice".to_string(),
            value: Some(json!(min)),
        }),
        _ => None,
    }
}
