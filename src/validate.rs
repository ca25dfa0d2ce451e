//! Field validation for the application form.
//!
//! Validation is scoped to one step at a time and evaluates every field in
//! the step rather than stopping at the first failure, so each invalid field
//! can be flagged at once.

use regex::Regex;

use crate::models::{FieldKind, FieldSpec};

/// The entered value of a field, as seen by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text, email, phone, and textarea input
    Text(String),
    /// The chosen select option, if any
    Selected(Option<String>),
    /// Checkbox group check flags, parallel to the option list
    Checked(Vec<bool>),
}

impl FieldValue {
    fn is_blank(&self) -> bool {
        match self {
            Self::Text(text) => text.trim().is_empty(),
            Self::Selected(choice) => choice.is_none(),
            // A required group needs at least one box, not any specific one.
            Self::Checked(flags) => !flags.iter().any(|&checked| checked),
        }
    }
}

/// A validation failure for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Identifier of the failing field
    pub field_id: String,
    /// User-visible message
    pub message: String,
}

/// Validates one field against its spec.
///
/// Returns `None` when the field passes. Empty optional fields always pass;
/// format checks only apply to non-empty input.
#[must_use]
pub fn validate_field(spec: &FieldSpec, value: &FieldValue) -> Option<FieldError> {
    if spec.required && value.is_blank() {
        let message = match spec.kind {
            FieldKind::Checkboxes { .. } => "Check at least one option".to_string(),
            FieldKind::Select { .. } => "Choose an option".to_string(),
            _ => "This field is required".to_string(),
        };
        return Some(FieldError {
            field_id: spec.id.clone(),
            message,
        });
    }

    if let FieldValue::Text(text) = value {
        let text = text.trim();
        if !text.is_empty() {
            match spec.kind {
                FieldKind::Email => {
                    let email_regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
                    if !email_regex.is_match(text) {
                        return Some(FieldError {
                            field_id: spec.id.clone(),
                            message: "Please enter a valid email address".to_string(),
                        });
                    }
                }
                FieldKind::Phone => {
                    let phone_regex = Regex::new(r"^[\d\s\-\+\(\)]+$").unwrap();
                    if !phone_regex.is_match(text) {
                        return Some(FieldError {
                            field_id: spec.id.clone(),
                            message: "Please enter a valid phone number".to_string(),
                        });
                    }
                }
                _ => {}
            }
        }
    }

    None
}

/// Validates every field of a step. All fields are evaluated; the result
/// collects one error per failing field.
#[must_use]
pub fn validate_step(specs: &[FieldSpec], values: &[FieldValue]) -> Vec<FieldError> {
    specs
        .iter()
        .zip(values.iter())
        .filter_map(|(spec, value)| validate_field(spec, value))
        .collect()
}
