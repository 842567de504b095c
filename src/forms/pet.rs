use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::pet::Pet;
use crate::forms::FieldErrors;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Form data for creating or updating a pet.
///
/// The birth date stays a string until validation so a malformed value
/// becomes a field error instead of a deserialization failure.
pub struct PetForm {
    #[validate(length(min = 1, message = "must not be blank"))]
    pub name: String,
    #[serde(rename(deserialize = "birthDate"))]
    pub birth_date: String,
    /// Pet type referenced by name, e.g. `cat`.
    #[serde(rename(deserialize = "type"))]
    pub pet_type: String,
}

impl PetForm {
    pub fn parsed_birth_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.birth_date, DATE_FORMAT).ok()
    }

    /// Field-level violations checkable without the repository. Birth dates
    /// in the future are rejected; type existence and per-owner name
    /// uniqueness are the service's responsibility.
    pub fn field_errors(&self, today: NaiveDate) -> FieldErrors {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(validation_errors) => validation_errors.into(),
        };

        match self.parsed_birth_date() {
            None => errors.add("birth_date", "invalid date"),
            Some(date) if date > today => errors.add("birth_date", "must not be in the future"),
            Some(_) => {}
        }

        errors
    }
}

impl From<&Pet> for PetForm {
    /// Pre-populate the edit form from a stored pet.
    fn from(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            birth_date: pet.birth_date.format(DATE_FORMAT).to_string(),
            pet_type: pet.pet_type.name.clone(),
        }
    }
}
