// src/lib.rs
//
// Work Hub client-side validation engine.
//
// Every validator is a pure function from raw form-control input to a
// `FieldResult`; form-level aggregation runs a fixed set of field validators
// per `FormType` and collects errors/warnings keyed by field name. The
// content guards in here are denylist heuristics for early feedback, not a
// security boundary; the server remains authoritative.

pub mod comments;
pub mod common;
pub mod forms;
pub mod scheduling;
pub mod tasks;
pub mod uploads;
pub mod users;

// Re-export the types callers wire into form components
pub use common::validation::{FieldResult, FieldValue, FormData, FormValidationResult};
pub use forms::registry::{validate_form, validate_form_at, FormField, FormType, UnknownFormType};
pub use forms::state::FormState;
pub use scheduling::models::{MeetingField, MeetingTimesCheck};
pub use uploads::validators::{validate_file_upload, FileUploadConfig};
