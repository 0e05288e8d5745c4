//! Rule evaluator — pure logic, no database access.

use regex::Regex;
use serde_json::Value;

use super::rules::{FieldViolation, ValidationReport, ValidationRule, ValidationSeverity};

/// Evaluate all rules against a single data record.
pub fn evaluate_rules(
    rules: &[ValidationRule],
    data: &serde_json::Map<String, Value>,
) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for rule in rules {
        if let Some(violation) = evaluate_single_rule(rule, data) {
            match rule.severity {
                ValidationSeverity::Error => errors.push(violation),
                ValidationSeverity::Warning => warnings.push(violation),
            }
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn evaluate_single_rule(
    rule: &ValidationRule,
    data: &serde_json::Map<String, Value>,
) -> Option<FieldViolation> {
    let field_value = data.get(&rule.field_name);

    match rule.rule_type.as_str() {
        "required" => evaluate_required(rule, field_value),
        "type_check" => evaluate_type_check(rule, field_value),
        "min_length" => evaluate_min_length(rule, field_value),
        "max_length" => evaluate_max_length(rule, field_value),
        "min_value" => evaluate_min_value(rule, field_value),
        "max_value" => evaluate_max_value(rule, field_value),
        "regex_pattern" => evaluate_regex_pattern(rule, field_value),
        _ => None, // Unknown rule types silently pass
    }
}

fn violation(rule: &ValidationRule, value: Option<&Value>) -> FieldViolation {
    FieldViolation {
        field: rule.field_name.clone(),
        rule_type: rule.rule_type.clone(),
        message: rule.error_message.clone(),
        value: value.cloned(),
    }
}

fn evaluate_required(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    match value {
        None | Some(Value::Null) => Some(violation(rule, value)),
        Some(Value::String(s)) if s.is_empty() => Some(violation(rule, value)),
        _ => None,
    }
}

fn evaluate_type_check(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    let value = match value {
        Some(v) if !v.is_null() => v,
        _ => return None, // type_check doesn't enforce presence
    };
    let expected = rule
        .config
        .get("type")
        .and_then(|t| t.as_str())
        .unwrap_or("string");
    let matches = match expected {
        "string" => value.is_string(),
        "number" | "integer" | "float" => value.is_number(),
        "boolean" => value.is_boolean(),
        "array" => value.is_array(),
        "object" => value.is_object(),
        _ => true,
    };
    if matches {
        None
    } else {
        Some(violation(rule, Some(value)))
    }
}

fn evaluate_min_length(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?;
    let min = rule.config.get("min").and_then(|v| v.as_u64()).unwrap_or(0) as usize;
    if s.len() < min {
        Some(violation(rule, value))
    } else {
        None
    }
}

fn evaluate_max_length(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?;
    let max = rule
        .config
        .get("max")
        .and_then(|v| v.as_u64())
        .unwrap_or(usize::MAX as u64) as usize;
    if s.len() > max {
        Some(violation(rule, value))
    } else {
        None
    }
}

fn evaluate_min_value(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    let num = value.and_then(|v| v.as_f64())?;
    let min = rule
        .config
        .get("min")
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::NEG_INFINITY);
    if num < min {
        Some(violation(rule, value))
    } else {
        None
    }
}

fn evaluate_max_value(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    let num = value.and_then(|v| v.as_f64())?;
    let max = rule
        .config
        .get("max")
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY);
    if num > max {
        Some(violation(rule, value))
    } else {
        None
    }
}

fn evaluate_regex_pattern(rule: &ValidationRule, value: Option<&Value>) -> Option<FieldViolation> {
    let s = value.and_then(|v| v.as_str())?;
    let pattern = rule.config.get("pattern").and_then(|p| p.as_str())?;
    // An unparseable pattern is a rule-authoring bug; treat as passing.
    let re = Regex::new(pattern).ok()?;
    if re.is_match(s) {
        None
    } else {
        Some(violation(rule, value))
    }
}
