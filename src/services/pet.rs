//! Pet use cases: create/update with type, birth-date and name checks.

use chrono::NaiveDate;

use crate::domain::pet::{NewPet, Pet, PetType, UpdatePet};
use crate::forms::FieldErrors;
use crate::forms::pet::PetForm;
use crate::repository::{OwnerReader, PetReader, PetWriter};
use crate::services::{ServiceError, ServiceResult};

/// Pet types offered by the create/edit forms.
pub fn list_pet_types<R>(repo: &R) -> ServiceResult<Vec<PetType>>
where
    R: PetReader + ?Sized,
{
    Ok(repo.list_pet_types()?)
}

/// Fetches a pet scoped to its owner or reports [`ServiceError::NotFound`].
pub fn get_pet<R>(repo: &R, owner_id: i32, pet_id: i32) -> ServiceResult<Pet>
where
    R: PetReader + ?Sized,
{
    let pet = repo.get_pet_by_id(pet_id)?.ok_or(ServiceError::NotFound)?;
    if pet.owner_id != owner_id {
        return Err(ServiceError::NotFound);
    }
    Ok(pet)
}

/// Repository-backed checks shared by create and update: the type must name
/// an existing pet type, and the name must be unique within the owner's pet
/// set (ignoring case). `exclude_pet_id` skips the record being edited.
fn check_pet_references<R>(
    repo: &R,
    owner_id: i32,
    form: &PetForm,
    exclude_pet_id: Option<i32>,
    errors: &mut FieldErrors,
) -> ServiceResult<Option<PetType>>
where
    R: PetReader + ?Sized,
{
    let pet_type = repo.get_pet_type_by_name(&form.pet_type)?;
    if pet_type.is_none() {
        errors.add("type", "unknown pet type");
    }

    if !form.name.is_empty() {
        let duplicate = repo.list_pets(owner_id)?.into_iter().any(|pet| {
            exclude_pet_id != Some(pet.id) && pet.name.eq_ignore_ascii_case(&form.name)
        });
        if duplicate {
            errors.add("name", "already in use");
        }
    }

    Ok(pet_type)
}

/// Validates the pet form and persists a new pet for the owner.
pub fn create_pet<R>(repo: &R, owner_id: i32, form: &PetForm, today: NaiveDate) -> ServiceResult<Pet>
where
    R: OwnerReader + PetReader + PetWriter + ?Sized,
{
    repo.get_owner_by_id(owner_id)?
        .ok_or(ServiceError::NotFound)?;

    let mut errors = form.field_errors(today);
    let pet_type = check_pet_references(repo, owner_id, form, None, &mut errors)?;

    let (Some(pet_type), Some(birth_date)) = (pet_type, form.parsed_birth_date()) else {
        return Err(ServiceError::Validation(errors));
    };
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let new_pet = NewPet {
        owner_id,
        type_id: pet_type.id,
        name: form.name.clone(),
        birth_date,
    };

    Ok(repo.create_pet(&new_pet)?)
}

/// Validates the pet form and applies it to an existing pet of the owner.
pub fn update_pet<R>(
    repo: &R,
    owner_id: i32,
    pet_id: i32,
    form: &PetForm,
    today: NaiveDate,
) -> ServiceResult<Pet>
where
    R: OwnerReader + PetReader + PetWriter + ?Sized,
{
    repo.get_owner_by_id(owner_id)?
        .ok_or(ServiceError::NotFound)?;
    get_pet(repo, owner_id, pet_id)?;

    let mut errors = form.field_errors(today);
    let pet_type = check_pet_references(repo, owner_id, form, Some(pet_id), &mut errors)?;

    let (Some(pet_type), Some(birth_date)) = (pet_type, form.parsed_birth_date()) else {
        return Err(ServiceError::Validation(errors));
    };
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    let updates = UpdatePet {
        type_id: pet_type.id,
        name: form.name.clone(),
        birth_date,
    };

    Ok(repo.update_pet(pet_id, &updates)?)
}
