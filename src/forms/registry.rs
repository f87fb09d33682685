// src/forms/registry.rs
//
// Static mapping from form type to the field validators that run for it.
// Dispatch is by enum, never by matching field-name strings inside the
// validators themselves.

use crate::comments::validators::{validate_comment, validate_hours};
use crate::common::{FieldResult, FormData, FormValidationResult};
use crate::scheduling::validators::{
    validate_days_before, validate_event_description, validate_event_title,
    validate_meeting_times_at, validate_reminder_date_at,
};
use crate::tasks::validators::{
    validate_due_date_at, validate_priority, validate_task_description, validate_task_title,
};
use crate::users::validators::{
    validate_email, validate_name, validate_password, validate_password_confirmation,
};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

// ============================================================================
// Form Types
// ============================================================================

/// The named forms the UI renders, each with a fixed field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormType {
    UserRegistration,
    TaskCreation,
    Comment,
    TimeLog,
    Reminder,
    Meeting,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form type: {0}")]
pub struct UnknownFormType(pub String);

impl FromStr for FormType {
    type Err = UnknownFormType;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "userRegistration" => Ok(FormType::UserRegistration),
            "taskCreation" => Ok(FormType::TaskCreation),
            "comment" => Ok(FormType::Comment),
            "timeLog" => Ok(FormType::TimeLog),
            "reminder" => Ok(FormType::Reminder),
            "meeting" => Ok(FormType::Meeting),
            other => Err(UnknownFormType(other.to_string())),
        }
    }
}

impl FormType {
    pub fn as_str(self) -> &'static str {
        match self {
            FormType::UserRegistration => "userRegistration",
            FormType::TaskCreation => "taskCreation",
            FormType::Comment => "comment",
            FormType::TimeLog => "timeLog",
            FormType::Reminder => "reminder",
            FormType::Meeting => "meeting",
        }
    }

    /// The fixed validator set for this form, in evaluation order.
    /// Order never affects the outcome; validators are independent.
    pub fn fields(self) -> &'static [FormField] {
        match self {
            FormType::UserRegistration => &[
                FormField::Name,
                FormField::Email,
                FormField::Password,
                FormField::PasswordConfirmation,
            ],
            FormType::TaskCreation => &[
                FormField::TaskTitle,
                FormField::TaskDescription,
                FormField::DueDate,
                FormField::Priority,
            ],
            FormType::Comment => &[FormField::Comment],
            FormType::TimeLog => &[FormField::Hours],
            FormType::Reminder => &[
                FormField::EventTitle,
                FormField::EventDescription,
                FormField::ReminderDate,
                FormField::DaysBefore,
            ],
            FormType::Meeting => &[
                FormField::EventTitle,
                FormField::EventDescription,
                FormField::MeetingTimes,
            ],
        }
    }

    /// Resolve the validator responsible for a field name within this form.
    pub fn field_for(self, name: &str) -> Option<FormField> {
        self.fields()
            .iter()
            .copied()
            .find(|field| field.handles(name))
    }
}

// ============================================================================
// Field Validators
// ============================================================================

/// One slot in a form's validator table. `title`/`description` bind to task
/// rules under `taskCreation` and to the looser event rules under
/// `reminder`/`meeting`; `MeetingTimes` owns both time slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
    PasswordConfirmation,
    TaskTitle,
    TaskDescription,
    DueDate,
    Priority,
    Comment,
    Hours,
    EventTitle,
    EventDescription,
    ReminderDate,
    DaysBefore,
    MeetingTimes,
}

impl FormField {
    /// The field name(s) this validator reports against.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            FormField::Name => &["name"],
            FormField::Email => &["email"],
            FormField::Password => &["password"],
            FormField::PasswordConfirmation => &["password_confirmation"],
            FormField::TaskTitle | FormField::EventTitle => &["title"],
            FormField::TaskDescription | FormField::EventDescription => &["description"],
            FormField::DueDate => &["due_date"],
            FormField::Priority => &["priority"],
            FormField::Comment => &["comment"],
            FormField::Hours => &["hours"],
            FormField::ReminderDate => &["reminder_date"],
            FormField::DaysBefore => &["days_before"],
            FormField::MeetingTimes => &["start_time", "end_time"],
        }
    }

    pub fn handles(self, name: &str) -> bool {
        self.names().contains(&name)
    }

    fn is_present_in(self, form: &FormData) -> bool {
        self.names().iter().any(|name| form.contains(name))
    }

    /// Run this validator against the snapshot, recording errors/warnings
    /// under the field name(s) it owns.
    pub fn apply(self, form: &FormData, now: NaiveDateTime, result: &mut FormValidationResult) {
        if let FormField::MeetingTimes = self {
            let check = validate_meeting_times_at(
                form.get_or_empty("start_time"),
                form.get_or_empty("end_time"),
                now,
            );
            if let Some((field, message)) = check.error {
                result.add_error(field.as_str(), message);
            }
            if let Some((field, warning)) = check.warning {
                result.add_warning(field.as_str(), warning);
            }
            return;
        }

        let name = self.names()[0];
        let outcome = self.run(form.get_or_empty(name), form, now);

        if !outcome.is_valid {
            result.add_error(name, outcome.message.unwrap_or_default());
        } else if let Some(warning) = outcome.warning {
            result.add_warning(name, warning);
        }
    }

    fn run(self, value: &str, form: &FormData, now: NaiveDateTime) -> FieldResult {
        match self {
            FormField::Name => validate_name(value),
            FormField::Email => validate_email(value),
            FormField::Password => validate_password(value),
            FormField::PasswordConfirmation => {
                validate_password_confirmation(value, form.get_or_empty("password"))
            }
            FormField::TaskTitle => validate_task_title(value),
            FormField::TaskDescription => validate_task_description(value),
            FormField::DueDate => validate_due_date_at(value, now),
            FormField::Priority => validate_priority(value),
            FormField::Comment => validate_comment(value),
            FormField::Hours => validate_hours(value),
            FormField::EventTitle => validate_event_title(value),
            FormField::EventDescription => validate_event_description(value),
            FormField::ReminderDate => validate_reminder_date_at(value, now),
            FormField::DaysBefore => validate_days_before(value),
            // The pair never routes through the single-value path
            FormField::MeetingTimes => FieldResult::valid_empty(),
        }
    }
}

// ============================================================================
// Form-Level Aggregation
// ============================================================================

pub fn validate_form(form: &FormData, form_type: FormType) -> FormValidationResult {
    validate_form_at(form, form_type, Local::now().naive_local())
}

/// Run every validator in the form's table against the snapshot.
///
/// Fields absent from the snapshot are skipped: a mounted form submits all
/// of its controls, so required-but-untouched fields arrive as empty
/// strings, while a partial snapshot only answers for the fields it carries.
/// The meeting pair runs when either bound is present.
pub fn validate_form_at(
    form: &FormData,
    form_type: FormType,
    now: NaiveDateTime,
) -> FormValidationResult {
    let mut result = FormValidationResult::new();

    for field in form_type.fields() {
        if !field.is_present_in(form) {
            continue;
        }
        field.apply(form, now, &mut result);
    }

    debug!(
        form_type = form_type.as_str(),
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated form"
    );

    result
}
