// src/tasks/validators.rs

use crate::common::content::{contains_dangerous_content, is_symbols_only};
use crate::common::FieldResult;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use std::collections::HashSet;

// ============================================================================
// Task Creation Validators
// ============================================================================

pub fn validate_task_title(value: &str) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::invalid("Title is required");
    }

    // Char counts, not bytes: multibyte titles get the full budget
    let length = trimmed.chars().count();

    if length < 3 {
        return FieldResult::invalid("Title must be at least 3 characters");
    }

    if length > 100 {
        return FieldResult::invalid("Title must be less than 100 characters");
    }

    if is_symbols_only(trimmed) {
        return FieldResult::invalid("Title cannot consist only of symbols");
    }

    FieldResult::valid(trimmed)
}

pub fn validate_task_description(value: &str) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::invalid("Description is required");
    }

    let length = trimmed.chars().count();

    if length < 10 {
        return FieldResult::invalid("Description must be at least 10 characters");
    }

    if length > 1000 {
        return FieldResult::invalid("Description must be less than 1000 characters");
    }

    if contains_dangerous_content(trimmed) {
        return FieldResult::invalid("Description contains content that is not allowed");
    }

    FieldResult::valid(trimmed)
}

/// Parse what an HTML date/datetime-local control produces.
pub(crate) fn parse_control_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(parsed);
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(parsed);
    }
    // Plain date control: midnight of that day
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

pub fn validate_due_date(value: &str) -> FieldResult {
    validate_due_date_at(value, Local::now().naive_local())
}

/// Due date is optional; when present it must fall between one hour and one
/// year from `now`.
pub fn validate_due_date_at(value: &str, now: NaiveDateTime) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::valid_empty();
    }

    let Some(due) = parse_control_datetime(trimmed) else {
        return FieldResult::invalid("Please enter a valid due date");
    };

    if due < now + Duration::hours(1) {
        return FieldResult::invalid("Due date must be at least one hour from now");
    }

    if due > now + Duration::days(365) {
        return FieldResult::invalid("Due date cannot be more than a year from now");
    }

    FieldResult::valid(due)
}

pub fn validate_priority(value: &str) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::valid("medium");
    }

    let lowered = trimmed.to_lowercase();
    let valid_priorities = HashSet::from(["low", "medium", "high"]);

    if !valid_priorities.contains(lowered.as_str()) {
        return FieldResult::invalid("Priority must be low, medium, or high");
    }

    FieldResult::valid(lowered)
}
