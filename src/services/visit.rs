//! Visit use cases.
//!
//! Visit dates are accepted even when they lie in the future, matching the
//! long-standing clinic behavior (pet birth dates, in contrast, must be in
//! the past).

use crate::domain::pet::Pet;
use crate::domain::visit::{NewVisit, Visit};
use crate::dto::visit::VisitPageData;
use crate::forms::visit::VisitForm;
use crate::repository::{OwnerReader, PetReader, VisitReader, VisitWriter};
use crate::services::pet as pet_service;
use crate::services::{ServiceError, ServiceResult};

/// Loads the pet a new visit is being recorded for.
pub fn load_visit_target<R>(repo: &R, owner_id: i32, pet_id: i32) -> ServiceResult<Pet>
where
    R: OwnerReader + PetReader + ?Sized,
{
    repo.get_owner_by_id(owner_id)?
        .ok_or(ServiceError::NotFound)?;
    pet_service::get_pet(repo, owner_id, pet_id)
}

/// Loads the visit form page: the pet plus its previous visits.
pub fn load_visit_page<R>(repo: &R, owner_id: i32, pet_id: i32) -> ServiceResult<VisitPageData>
where
    R: OwnerReader + PetReader + VisitReader + ?Sized,
{
    let pet = load_visit_target(repo, owner_id, pet_id)?;
    let visits = repo.list_visits(pet_id)?;
    Ok(VisitPageData { pet, visits })
}

/// Validates the visit form and records a visit for the pet.
pub fn create_visit<R>(
    repo: &R,
    owner_id: i32,
    pet_id: i32,
    form: &VisitForm,
) -> ServiceResult<Visit>
where
    R: OwnerReader + PetReader + VisitWriter + ?Sized,
{
    load_visit_target(repo, owner_id, pet_id)?;

    let errors = form.field_errors();
    let Some(visit_date) = form.parsed_date() else {
        return Err(ServiceError::Validation(errors));
    };
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let new_visit = NewVisit {
        pet_id,
        visit_date,
        description: form.description.clone(),
    };

    Ok(repo.create_visit(&new_visit)?)
}
