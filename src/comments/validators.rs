// src/comments/validators.rs

use crate::common::content::word_list_matcher;
use crate::common::FieldResult;
use lazy_static::lazy_static;
use regex::Regex;

// ============================================================================
// Comment Validators
// ============================================================================

lazy_static! {
    // Whole-word matches only: "dammit" and "Cassandra" pass
    static ref PROFANITY: Regex =
        word_list_matcher(&["damn", "hell", "crap", "stupid", "idiot", "moron", "fool"]);
}

pub fn validate_comment(value: &str) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::invalid("Comment cannot be empty");
    }

    if trimmed.chars().count() > 500 {
        return FieldResult::invalid("Comment must be less than 500 characters");
    }

    if PROFANITY.is_match(trimmed) {
        return FieldResult::invalid("Comment contains inappropriate language");
    }

    FieldResult::valid(trimmed)
}

/// Generic numeric range check over the string a numeric control produces.
pub fn validate_numeric_range(value: &str, min: f64, max: f64, label: &str) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::invalid(format!("{} is required", label));
    }

    let parsed: f64 = match trimmed.parse() {
        Ok(number) => number,
        Err(_) => return FieldResult::invalid(format!("{} must be a number", label)),
    };

    // "NaN" parses successfully but is never a usable quantity
    if parsed.is_nan() || parsed < min || parsed > max {
        return FieldResult::invalid(format!("{} must be between {} and {}", label, min, max));
    }

    FieldResult::valid(parsed)
}

/// Hours logged against a task: 0.1 to 24.0.
pub fn validate_hours(value: &str) -> FieldResult {
    validate_numeric_range(value, 0.1, 24.0, "Hours")
}
