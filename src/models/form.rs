//! Application form definition and submission records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The kind of input a field accepts, which decides how it is edited and
/// validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Email address, checked against a simple user@host.tld shape
    Email,
    /// Phone number, digits with separators
    Phone,
    /// Multi-line free text
    Textarea,
    /// Pick exactly one option
    Select {
        /// Available options
        options: Vec<String>,
    },
    /// Toggle any number of options; "required" means at least one checked
    Checkboxes {
        /// Available options
        options: Vec<String>,
    },
}

/// One field of a form step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Stable identifier used in submission records
    pub id: String,
    /// Label shown next to the input
    pub label: String,
    /// Whether the field must be filled before the step can advance
    #[serde(default)]
    pub required: bool,
    /// Input kind
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// One step of the multi-step form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStep {
    /// Step title shown above the fields and on the progress marker
    pub title: String,
    /// Fields in display order
    pub fields: Vec<FieldSpec>,
}

/// The complete multi-step form definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationForm {
    /// Heading shown above the form
    pub heading: String,
    /// Steps in order
    pub steps: Vec<FormStep>,
}

impl Default for ApplicationForm {
    fn default() -> Self {
        Self {
            heading: "Join the team".to_string(),
            steps: vec![
                FormStep {
                    title: "About you".to_string(),
                    fields: vec![
                        FieldSpec {
                            id: "name".to_string(),
                            label: "Full name".to_string(),
                            required: true,
                            kind: FieldKind::Text,
                        },
                        FieldSpec {
                            id: "email".to_string(),
                            label: "Email".to_string(),
                            required: true,
                            kind: FieldKind::Email,
                        },
                        FieldSpec {
                            id: "phone".to_string(),
                            label: "Phone".to_string(),
                            required: false,
                            kind: FieldKind::Phone,
                        },
                    ],
                },
                FormStep {
                    title: "Role & skills".to_string(),
                    fields: vec![
                        FieldSpec {
                            id: "position".to_string(),
                            label: "Position".to_string(),
                            required: true,
                            kind: FieldKind::Select {
                                options: vec![
                                    "Project Manager".to_string(),
                                    "Interior Designer".to_string(),
                                    "Site Supervisor".to_string(),
                                    "Estimator".to_string(),
                                ],
                            },
                        },
                        FieldSpec {
                            id: "skills".to_string(),
                            label: "Relevant skills".to_string(),
                            required: true,
                            kind: FieldKind::Checkboxes {
                                options: vec![
                                    "AutoCAD / Revit".to_string(),
                                    "Cost estimating".to_string(),
                                    "Site management".to_string(),
                                    "Client relations".to_string(),
                                ],
                            },
                        },
                    ],
                },
                FormStep {
                    title: "Cover note".to_string(),
                    fields: vec![FieldSpec {
                        id: "note".to_string(),
                        label: "Why Meridian?".to_string(),
                        required: true,
                        kind: FieldKind::Textarea,
                    }],
                },
            ],
        }
    }
}

/// A completed application, as written to the submissions directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Record identifier
    pub id: uuid::Uuid,
    /// When the application was submitted
    pub submitted_at: DateTime<Utc>,
    /// Field id -> entered value. Checkbox groups join checked options
    /// with "; ".
    pub values: BTreeMap<String, String>,
}

impl Submission {
    /// Creates a submission record stamped with the current time.
    #[must_use]
    pub fn new(values: BTreeMap<String, String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        }
    }
}
