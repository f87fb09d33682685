// src/scheduling/mod.rs

pub mod models;
pub mod validators;


pub use models::{MeetingField, MeetingTimesCheck};
pub use validators::*;
