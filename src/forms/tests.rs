//! Tests for form-level aggregation and per-form state

use super::registry::{validate_form_at, FormType};
use super::state::FormState;
use crate::common::FormData;
use chrono::{NaiveDate, NaiveDateTime};
use std::str::FromStr;

fn frozen_now() -> NaiveDateTime {
    // 2025-06-10, 12:00 local
    NaiveDate::from_ymd_opt(2025, 6, 10)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

// ============================================================================
// FormType
// ============================================================================

#[test]
fn test_form_type_tags_round_trip() {
    for tag in [
        "userRegistration",
        "taskCreation",
        "comment",
        "timeLog",
        "reminder",
        "meeting",
    ] {
        let form_type = FormType::from_str(tag).unwrap();
        assert_eq!(form_type.as_str(), tag);
    }

    assert!(FormType::from_str("projectSettings").is_err());
}

#[test]
fn test_form_type_serde_uses_camel_case_tags() {
    let json = serde_json::to_string(&FormType::UserRegistration).unwrap();
    assert_eq!(json, "\"userRegistration\"");

    let parsed: FormType = serde_json::from_str("\"timeLog\"").unwrap();
    assert_eq!(parsed, FormType::TimeLog);
}

#[test]
fn test_field_lookup_by_name() {
    assert!(FormType::TaskCreation.field_for("title").is_some());
    assert!(FormType::TaskCreation.field_for("reminder_date").is_none());

    // Either meeting bound resolves to the pair validator
    let by_start = FormType::Meeting.field_for("start_time").unwrap();
    let by_end = FormType::Meeting.field_for("end_time").unwrap();
    assert_eq!(by_start, by_end);
}

// ============================================================================
// validate_form
// ============================================================================

#[test]
fn test_short_title_flags_only_the_title() {
    let form = FormData::from([("title", "ab")]);
    let result = validate_form_at(&form, FormType::TaskCreation, frozen_now());

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors.contains_key("title"));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_absent_fields_are_skipped_but_empty_ones_are_not() {
    // Present-but-empty description is a required-field error
    let form = FormData::from([("title", "Fix login bug"), ("description", "")]);
    let result = validate_form_at(&form, FormType::TaskCreation, frozen_now());

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors.contains_key("description"));
}

#[test]
fn test_full_task_form_valid() {
    let form = FormData::from([
        ("title", "Fix login bug"),
        ("description", "Users with stale sessions cannot log in."),
        ("due_date", "2025-06-12T09:00"),
        ("priority", "High"),
    ]);
    let result = validate_form_at(&form, FormType::TaskCreation, frozen_now());

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn test_registration_form_collects_independent_errors() {
    let form = FormData::from([
        ("name", "Jane3"),
        ("email", "a@b.c"),
        ("password", "Qypxw!vmrtz"),
        ("password_confirmation", "Qypxw!vmrtz"),
    ]);
    let result = validate_form_at(&form, FormType::UserRegistration, frozen_now());

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 2);
    assert!(result.errors.contains_key("name"));
    assert!(result.errors.contains_key("email"));
}

#[test]
fn test_registration_confirmation_checked_against_password() {
    let form = FormData::from([
        ("name", "Jane O'Brien"),
        ("email", "jane@example.com"),
        ("password", "Qypxw!vmrtz"),
        ("password_confirmation", "something-else"),
    ]);
    let result = validate_form_at(&form, FormType::UserRegistration, frozen_now());

    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors.get("password_confirmation").map(String::as_str),
        Some("Passwords do not match")
    );
}

#[test]
fn test_reminder_warning_does_not_block_submission() {
    let form = FormData::from([
        ("title", "Renew certificates"),
        ("reminder_date", "2026-08-01T09:00"),
        ("days_before", "7"),
    ]);
    let result = validate_form_at(&form, FormType::Reminder, frozen_now());

    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.contains_key("reminder_date"));
}

#[test]
fn test_meeting_pair_maps_to_its_field_slots() {
    // Inverted bounds: hard error on end_time
    let form = FormData::from([
        ("title", "Design review"),
        ("start_time", "2025-06-11T10:00"),
        ("end_time", "2025-06-11T09:00"),
    ]);
    let result = validate_form_at(&form, FormType::Meeting, frozen_now());
    assert!(!result.is_valid);
    assert!(result.errors.contains_key("end_time"));
    assert!(!result.errors.contains_key("start_time"));

    // Early start: valid with a warning on start_time
    let form = FormData::from([
        ("title", "Design review"),
        ("start_time", "2025-06-11T06:59"),
        ("end_time", "2025-06-11T08:00"),
    ]);
    let result = validate_form_at(&form, FormType::Meeting, frozen_now());
    assert!(result.is_valid);
    assert!(result.warnings.contains_key("start_time"));
}

#[test]
fn test_comment_and_time_log_forms() {
    let form = FormData::from([("comment", "damn good work")]);
    assert!(!validate_form_at(&form, FormType::Comment, frozen_now()).is_valid);

    let form = FormData::from([("comment", "This is a dammit review")]);
    assert!(validate_form_at(&form, FormType::Comment, frozen_now()).is_valid);

    let form = FormData::from([("hours", "25")]);
    let result = validate_form_at(&form, FormType::TimeLog, frozen_now());
    assert!(result.errors.contains_key("hours"));
}

// ============================================================================
// FormState
// ============================================================================

#[test]
fn test_state_tracks_single_field_edits() {
    let mut state = FormState::new(FormType::TaskCreation);
    let snapshot = FormData::new();

    assert!(!state.validate_field_at("title", "ab", &snapshot, frozen_now()));
    assert!(state.error("title").is_some());

    // Correcting the field clears its error
    assert!(state.validate_field_at("title", "Fix login bug", &snapshot, frozen_now()));
    assert!(state.error("title").is_none());
    assert!(state.is_valid());
}

#[test]
fn test_state_unknown_field_is_ignored() {
    let mut state = FormState::new(FormType::Comment);
    let snapshot = FormData::new();

    assert!(state.validate_field_at("reminder_date", "garbage", &snapshot, frozen_now()));
    assert!(state.errors().is_empty());
}

#[test]
fn test_state_meeting_edit_merges_freshest_value() {
    let mut state = FormState::new(FormType::Meeting);
    let snapshot = FormData::from([
        ("start_time", "2025-06-11T10:00"),
        ("end_time", "2025-06-11T09:00"),
    ]);

    // Editing end_time to a proper value validates the merged pair
    let valid = state.validate_field_at("end_time", "2025-06-11T11:00", &snapshot, frozen_now());
    assert!(valid);
    assert!(state.errors().is_empty());

    // Editing start_time past the snapshot's end flags end_time again
    let valid = state.validate_field_at("start_time", "2025-06-11T09:30", &snapshot, frozen_now());
    assert!(!valid);
    assert!(state.error("end_time").is_some());
}

#[test]
fn test_state_warning_and_error_evict_each_other() {
    let mut state = FormState::new(FormType::Meeting);
    let snapshot = FormData::from([("end_time", "2025-06-11T08:00")]);

    // Early start: warning on start_time
    state.validate_field_at("start_time", "2025-06-11T06:00", &snapshot, frozen_now());
    assert!(state.warning("start_time").is_some());
    assert!(state.error("start_time").is_none());

    // Past date: hard error replaces the warning
    state.validate_field_at("start_time", "2025-06-09T06:00", &snapshot, frozen_now());
    assert!(state.error("start_time").is_some());
    assert!(state.warning("start_time").is_none());
}

#[test]
fn test_state_validate_form_replaces_maps_wholesale() {
    let mut state = FormState::new(FormType::TaskCreation);
    let snapshot = FormData::new();
    state.validate_field_at("title", "ab", &snapshot, frozen_now());

    let form = FormData::from([
        ("title", "Fix login bug"),
        ("description", "Users with stale sessions cannot log in."),
        ("due_date", ""),
        ("priority", ""),
    ]);
    assert!(state.validate_form_at(&form, frozen_now()));
    assert!(state.errors().is_empty());
    assert!(state.is_valid());
}

#[test]
fn test_state_clear_errors() {
    let mut state = FormState::new(FormType::TaskCreation);
    let snapshot = FormData::new();
    state.validate_field_at("title", "", &snapshot, frozen_now());
    assert!(!state.is_valid());

    state.clear_errors();
    assert!(state.is_valid());
    assert!(state.errors().is_empty());
    assert!(state.warnings().is_empty());
}
