// src/scheduling/validators.rs

use super::models::{MeetingField, MeetingTimesCheck};
use crate::common::content::contains_dangerous_content;
use crate::common::FieldResult;
use crate::tasks::validators::{parse_control_datetime, validate_task_title};
use chrono::{Duration, Local, NaiveDateTime, Timelike};

// ============================================================================
// Reminder Validators
// ============================================================================

/// Reminder and meeting titles share the task-title rules.
pub fn validate_event_title(value: &str) -> FieldResult {
    validate_task_title(value)
}

/// Optional description for reminders and meetings.
pub fn validate_event_description(value: &str) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::valid_empty();
    }

    if trimmed.chars().count() > 500 {
        return FieldResult::invalid("Description must be less than 500 characters");
    }

    if contains_dangerous_content(trimmed) {
        return FieldResult::invalid("Description contains content that is not allowed");
    }

    FieldResult::valid(trimmed)
}

pub fn validate_reminder_date(value: &str) -> FieldResult {
    validate_reminder_date_at(value, Local::now().naive_local())
}

/// Past dates are a hard error; more than a year ahead is allowed but flagged.
pub fn validate_reminder_date_at(value: &str, now: NaiveDateTime) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::invalid("Reminder date is required");
    }

    let Some(reminder) = parse_control_datetime(trimmed) else {
        return FieldResult::invalid("Please enter a valid reminder date");
    };

    if reminder < now {
        return FieldResult::invalid("Reminder date cannot be in the past");
    }

    if reminder > now + Duration::days(365) {
        return FieldResult::valid_with_warning(
            reminder,
            "Reminder is more than a year away",
        );
    }

    FieldResult::valid(reminder)
}

/// Lead time in days before the reminder fires.
pub fn validate_days_before(value: &str) -> FieldResult {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return FieldResult::invalid("Days before is required");
    }

    let days: i64 = match trimmed.parse() {
        Ok(days) => days,
        Err(_) => return FieldResult::invalid("Days before must be a whole number"),
    };

    if !(1..=365).contains(&days) {
        return FieldResult::invalid("Days before must be between 1 and 365");
    }

    FieldResult::valid(days)
}

// ============================================================================
// Meeting Time Validators
// ============================================================================

// Business hours are 07:00 to 18:00 local
const BUSINESS_OPEN_HOUR: u32 = 7;
const BUSINESS_CLOSE_HOUR: u32 = 18;

pub fn validate_meeting_times(start: &str, end: &str) -> MeetingTimesCheck {
    validate_meeting_times_at(start, end, Local::now().naive_local())
}

/// Validate a meeting's start/end pair.
///
/// Hard rules run in a fixed order and the first failure wins: past calendar
/// date, past start today, start or end beyond a year out, end not after
/// start, duration over 8 hours. Only when every hard rule passes is the
/// soft business-hours warning considered; the start bound is checked before
/// the end bound and at most one warning is attached.
pub fn validate_meeting_times_at(start: &str, end: &str, now: NaiveDateTime) -> MeetingTimesCheck {
    let start_raw = start.trim();
    let end_raw = end.trim();

    if start_raw.is_empty() {
        return MeetingTimesCheck::invalid(MeetingField::StartTime, "Start time is required");
    }
    if end_raw.is_empty() {
        return MeetingTimesCheck::invalid(MeetingField::EndTime, "End time is required");
    }

    let Some(start_at) = parse_control_datetime(start_raw) else {
        return MeetingTimesCheck::invalid(
            MeetingField::StartTime,
            "Please enter a valid start time",
        );
    };
    let Some(end_at) = parse_control_datetime(end_raw) else {
        return MeetingTimesCheck::invalid(MeetingField::EndTime, "Please enter a valid end time");
    };

    // Date-only comparison first: a meeting later today is handled below
    if start_at.date() < now.date() {
        return MeetingTimesCheck::invalid(
            MeetingField::StartTime,
            "Meeting cannot be scheduled on a past date",
        );
    }

    if start_at.date() == now.date() && start_at < now {
        return MeetingTimesCheck::invalid(
            MeetingField::StartTime,
            "Meeting start time cannot be in the past",
        );
    }

    let horizon = now + Duration::days(365);

    if start_at > horizon {
        return MeetingTimesCheck::invalid(
            MeetingField::StartTime,
            "Meeting cannot start more than a year from now",
        );
    }

    if end_at > horizon {
        return MeetingTimesCheck::invalid(
            MeetingField::EndTime,
            "Meeting cannot end more than a year from now",
        );
    }

    if end_at <= start_at {
        return MeetingTimesCheck::invalid(
            MeetingField::EndTime,
            "Meeting end time must be after the start time",
        );
    }

    if end_at - start_at > Duration::hours(8) {
        return MeetingTimesCheck::invalid(
            MeetingField::EndTime,
            "Meeting cannot be longer than 8 hours",
        );
    }

    // Soft business-hours check; start takes precedence and only one
    // warning is ever attached
    if start_at.hour() < BUSINESS_OPEN_HOUR || start_at.hour() >= BUSINESS_CLOSE_HOUR {
        return MeetingTimesCheck::valid_with_warning(
            start_at,
            end_at,
            MeetingField::StartTime,
            "Meeting starts outside business hours (07:00-18:00)",
        );
    }

    let end_past_close = end_at.hour() > BUSINESS_CLOSE_HOUR
        || (end_at.hour() == BUSINESS_CLOSE_HOUR && (end_at.minute() > 0 || end_at.second() > 0));
    if end_past_close {
        return MeetingTimesCheck::valid_with_warning(
            start_at,
            end_at,
            MeetingField::EndTime,
            "Meeting ends outside business hours (07:00-18:00)",
        );
    }

    MeetingTimesCheck::valid(start_at, end_at)
}
