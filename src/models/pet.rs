use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::pet::{
    NewPet as DomainNewPet, Pet as DomainPet, PetType as DomainPetType,
    UpdatePet as DomainUpdatePet,
};
use crate::models::owner::Owner;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::pets)]
#[diesel(belongs_to(Owner, foreign_key = owner_id))]
/// Diesel model for [`crate::domain::pet::Pet`].
pub struct Pet {
    pub id: i32,
    pub owner_id: i32,
    pub type_id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::pet_types)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pets)]
/// Insertable form of [`Pet`].
pub struct NewPet<'a> {
    pub owner_id: i32,
    pub type_id: i32,
    pub name: &'a str,
    pub birth_date: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::pets)]
/// Data used when updating a [`Pet`] record.
pub struct UpdatePet<'a> {
    pub type_id: i32,
    pub name: &'a str,
    pub birth_date: NaiveDate,
}

impl From<PetType> for DomainPetType {
    fn from(pet_type: PetType) -> Self {
        Self {
            id: pet_type.id,
            name: pet_type.name,
        }
    }
}

impl From<(Pet, PetType)> for DomainPet {
    fn from((pet, pet_type): (Pet, PetType)) -> Self {
        Self {
            id: pet.id,
            owner_id: pet.owner_id,
            name: pet.name,
            birth_date: pet.birth_date,
            pet_type: pet_type.into(),
        }
    }
}

impl<'a> From<&'a DomainNewPet> for NewPet<'a> {
    fn from(pet: &'a DomainNewPet) -> Self {
        Self {
            owner_id: pet.owner_id,
            type_id: pet.type_id,
            name: pet.name.as_str(),
            birth_date: pet.birth_date,
        }
    }
}

impl<'a> From<&'a DomainUpdatePet> for UpdatePet<'a> {
    fn from(pet: &'a DomainUpdatePet) -> Self {
        Self {
            type_id: pet.type_id,
            name: pet.name.as_str(),
            birth_date: pet.birth_date,
        }
    }
}
