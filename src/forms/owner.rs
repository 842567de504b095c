use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::forms::FieldErrors;

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all(deserialize = "camelCase"))]
/// Form data for creating or updating an owner.
pub struct OwnerForm {
    #[validate(length(min = 1, message = "must not be blank"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub address: String,
    #[validate(length(min = 1, message = "must not be blank"))]
    pub city: String,
    #[validate(custom(function = validate_telephone))]
    pub telephone: String,
}

fn validate_telephone(telephone: &str) -> Result<(), ValidationError> {
    if telephone.len() == 10 && telephone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("telephone").with_message("must be a 10-digit number".into()))
    }
}

impl OwnerForm {
    pub fn field_errors(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(errors) => errors.into(),
        }
    }
}

impl From<&Owner> for OwnerForm {
    /// Pre-populate the edit form from a stored owner.
    fn from(owner: &Owner) -> Self {
        Self {
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            address: owner.address.clone(),
            city: owner.city.clone(),
            telephone: owner.telephone.clone(),
        }
    }
}

impl From<&OwnerForm> for NewOwner {
    fn from(form: &OwnerForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            address: form.address.clone(),
            city: form.city.clone(),
            telephone: form.telephone.clone(),
        }
    }
}

impl From<&OwnerForm> for UpdateOwner {
    fn from(form: &OwnerForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            address: form.address.clone(),
            city: form.city.clone(),
            telephone: form.telephone.clone(),
        }
    }
}
