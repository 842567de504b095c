//! Form definitions backing the clinic routes.
//!
//! Every form validates in two steps: the `validator` derive covers the
//! declarative constraints, and explicit checks (date parsing, repository
//! lookups) append to the same [`FieldErrors`] mapping. Routes hand the
//! mapping to the templates verbatim.

use std::collections::BTreeMap;

use serde::Serialize;
use validator::{ValidationErrors, ValidationErrorsKind};

pub mod owner;
pub mod pet;
pub mod visit;

/// Ordered mapping from field name to one-or-more violation messages.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors = FieldErrors::new();
        for (field, kind) in errors.errors() {
            if let ValidationErrorsKind::Field(violations) = kind {
                for violation in violations {
                    let message = violation
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| violation.code.to_string());
                    field_errors.add(field.to_string(), message);
                }
            }
        }
        field_errors
    }
}
