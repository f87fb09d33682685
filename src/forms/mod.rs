// src/forms/mod.rs

pub mod registry;
pub mod state;

#[cfg(test)]
mod tests;

pub use registry::{validate_form, validate_form_at, FormField, FormType, UnknownFormType};
pub use state::FormState;
