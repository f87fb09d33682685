// src/users/validators.rs

use crate::common::FieldResult;
use lazy_static::lazy_static;
use regex::Regex;

// ============================================================================
// User Registration Validators
// ============================================================================

lazy_static! {
    // Conservative RFC-lite pattern: local@domain.tld, TLD at least 2 letters.
    // Deliverability is checked by the backend, not here.
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap();

    // Letters, spaces, hyphens and apostrophes only
    static ref NAME_PATTERN: Regex = Regex::new(r"^[A-Za-z\s'-]+$").unwrap();
}

/// Common passwords rejected outright, matched case-insensitively.
const COMMON_PASSWORDS: [&str; 8] = [
    "password123",
    "password1234",
    "qwerty123456",
    "letmein1234",
    "welcome12345",
    "admin1234567",
    "iloveyou1234",
    "sunshine123",
];

/// Three-character ascending runs rejected anywhere in a password.
const SEQUENTIAL_RUNS: [&str; 13] = [
    "012", "123", "234", "345", "456", "567", "678", "789", "890", "abc", "bcd", "cde", "def",
];

pub fn validate_email(value: &str) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::invalid("Email is required");
    }

    if !EMAIL_PATTERN.is_match(trimmed) {
        return FieldResult::invalid("Please enter a valid email address");
    }

    FieldResult::valid(trimmed)
}

pub fn validate_password(value: &str) -> FieldResult {
    if value.is_empty() {
        return FieldResult::invalid("Password is required");
    }

    if value.len() < 10 {
        return FieldResult::invalid("Password must be at least 10 characters long");
    }

    if value.len() > 128 {
        return FieldResult::invalid("Password must be no more than 128 characters");
    }

    // At least 3 of the 4 character classes
    let has_uppercase = value.chars().any(|c| c.is_ascii_uppercase());
    let has_lowercase = value.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| !c.is_ascii_alphanumeric());
    let class_count = [has_uppercase, has_lowercase, has_digit, has_special]
        .iter()
        .filter(|present| **present)
        .count();

    if class_count < 3 {
        return FieldResult::invalid(
            "Password must include at least 3 of: uppercase letters, lowercase letters, numbers, special characters",
        );
    }

    let lowered = value.to_lowercase();

    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        return FieldResult::invalid("This password is too common, please choose another");
    }

    if SEQUENTIAL_RUNS.iter().any(|run| lowered.contains(run)) {
        return FieldResult::invalid(
            "Password cannot contain sequential characters like \"123\" or \"abc\"",
        );
    }

    // Passwords are never trimmed or normalized
    FieldResult::valid(value)
}

pub fn validate_password_confirmation(value: &str, password: &str) -> FieldResult {
    if value.is_empty() {
        return FieldResult::invalid("Please confirm your password");
    }

    if value != password {
        return FieldResult::invalid("Passwords do not match");
    }

    FieldResult::valid(value)
}

pub fn validate_name(value: &str) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::invalid("Name is required");
    }

    let length = trimmed.chars().count();

    if length < 2 {
        return FieldResult::invalid("Name must be at least 2 characters");
    }

    if length > 50 {
        return FieldResult::invalid("Name must be less than 50 characters");
    }

    if !NAME_PATTERN.is_match(trimmed) {
        return FieldResult::invalid("Name cannot contain numbers or symbols");
    }

    FieldResult::valid(trimmed)
}
