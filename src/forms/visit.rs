use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::forms::FieldErrors;
use crate::forms::pet::DATE_FORMAT;

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Form data for recording a visit.
pub struct VisitForm {
    pub date: String,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub description: String,
}

impl VisitForm {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Future visit dates are accepted; only the format is checked.
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(validation_errors) => validation_errors.into(),
        };

        if self.parsed_date().is_none() {
            errors.add("date", "invalid date");
        }

        errors
    }
}
