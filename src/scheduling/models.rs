// src/scheduling/models.rs

use chrono::NaiveDateTime;
use serde::Serialize;

/// The two slots the meeting-time pair validator reports against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MeetingField {
    StartTime,
    EndTime,
}

impl MeetingField {
    pub fn as_str(self) -> &'static str {
        match self {
            MeetingField::StartTime => "start_time",
            MeetingField::EndTime => "end_time",
        }
    }
}

/// Outcome of validating a meeting's start/end pair.
///
/// The pair is checked as one unit; an error or warning names the field slot
/// it belongs to. Hard rules run first and the first failure wins, so an
/// invalid check never carries a warning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingTimesCheck {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<(MeetingField, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<(MeetingField, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
}

impl MeetingTimesCheck {
    pub fn invalid(field: MeetingField, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some((field, message.into())),
            warning: None,
            start: None,
            end: None,
        }
    }

    pub fn valid(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            is_valid: true,
            error: None,
            warning: None,
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn valid_with_warning(
        start: NaiveDateTime,
        end: NaiveDateTime,
        field: MeetingField,
        warning: impl Into<String>,
    ) -> Self {
        Self {
            is_valid: true,
            error: None,
            warning: Some((field, warning.into())),
            start: Some(start),
            end: Some(end),
        }
    }
}
