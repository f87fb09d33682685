// src/forms/state.rs
//
// Per-form error/warning state, owned by the form component that created it.
// Created fresh when a form mounts, dropped with it - there is no shared or
// global validation state.

use super::registry::{validate_form_at, FormField, FormType};
use crate::common::{FormData, FormValidationResult};
use chrono::{Local, NaiveDateTime};
use std::collections::HashMap;
use tracing::debug;

/// Live validation state for one mounted form.
#[derive(Debug, Clone)]
pub struct FormState {
    form_type: FormType,
    errors: HashMap<String, String>,
    warnings: HashMap<String, String>,
}

impl FormState {
    pub fn new(form_type: FormType) -> Self {
        Self {
            form_type,
            errors: HashMap::new(),
            warnings: HashMap::new(),
        }
    }

    pub fn form_type(&self) -> FormType {
        self.form_type
    }

    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    pub fn warnings(&self) -> &HashMap<String, String> {
        &self.warnings
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn warning(&self, field: &str) -> Option<&str> {
        self.warnings.get(field).map(String::as_str)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Validate a single field on change/blur and update the per-field maps.
    ///
    /// `value` is the freshest input for `field` and overrides whatever the
    /// snapshot holds for it; editing either meeting bound re-evaluates the
    /// whole pair. Returns the field's validity. An unknown field name for
    /// this form type clears any stale entries and counts as valid.
    pub fn validate_field(&mut self, field: &str, value: &str, form: &FormData) -> bool {
        self.validate_field_at(field, value, form, Local::now().naive_local())
    }

    pub fn validate_field_at(
        &mut self,
        field: &str,
        value: &str,
        form: &FormData,
        now: NaiveDateTime,
    ) -> bool {
        let Some(validator) = self.form_type.field_for(field) else {
            debug!(field, form_type = self.form_type.as_str(), "no validator for field");
            self.errors.remove(field);
            self.warnings.remove(field);
            return true;
        };

        // Freshest value wins over the snapshot entry for this field
        let mut merged = form.clone();
        merged.set(field, value);

        let mut scratch = FormValidationResult::new();
        validator.apply(&merged, now, &mut scratch);

        self.absorb(validator, &scratch);

        validator
            .names()
            .iter()
            .all(|name| !self.errors.contains_key(*name))
    }

    /// Validate the whole form before submission, replacing both maps.
    pub fn validate_form(&mut self, form: &FormData) -> bool {
        self.validate_form_at(form, Local::now().naive_local())
    }

    pub fn validate_form_at(&mut self, form: &FormData, now: NaiveDateTime) -> bool {
        let result = validate_form_at(form, self.form_type, now);
        let is_valid = result.is_valid;

        self.errors = result.errors;
        self.warnings = result.warnings;

        is_valid
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
        self.warnings.clear();
    }

    // Replace this validator's slots from a freshly computed result. A new
    // error evicts a stale warning for the same field and vice versa.
    fn absorb(&mut self, validator: FormField, scratch: &FormValidationResult) {
        for name in validator.names() {
            match scratch.errors.get(*name) {
                Some(message) => {
                    self.errors.insert((*name).to_string(), message.clone());
                    self.warnings.remove(*name);
                }
                None => {
                    self.errors.remove(*name);
                    match scratch.warnings.get(*name) {
                        Some(warning) => {
                            self.warnings.insert((*name).to_string(), warning.clone());
                        }
                        None => {
                            self.warnings.remove(*name);
                        }
                    }
                }
            }
        }
    }
}
