//! Repository implementation for pets and pet types.

use diesel::prelude::*;

use crate::domain::pet::{NewPet, Pet, PetType, UpdatePet};
use crate::domain::visit::Visit;
use crate::models::pet::{
    NewPet as DbNewPet, Pet as DbPet, PetType as DbPetType, UpdatePet as DbUpdatePet,
};
use crate::models::visit::Visit as DbVisit;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PetReader, PetWriter};

impl PetReader for DieselRepository {
    fn get_pet_by_id(&self, pet_id: i32) -> RepositoryResult<Option<Pet>> {
        use crate::schema::{pet_types, pets};

        let mut conn = self.conn()?;
        let pet = pets::table
            .inner_join(pet_types::table)
            .filter(pets::id.eq(pet_id))
            .select((pets::all_columns, pet_types::all_columns))
            .first::<(DbPet, DbPetType)>(&mut conn)
            .optional()?;

        Ok(pet.map(Into::into))
    }

    fn list_pets(&self, owner_id: i32) -> RepositoryResult<Vec<Pet>> {
        use crate::schema::{pet_types, pets};

        let mut conn = self.conn()?;
        let pets = pets::table
            .inner_join(pet_types::table)
            .filter(pets::owner_id.eq(owner_id))
            .order(pets::name.asc())
            .select((pets::all_columns, pet_types::all_columns))
            .load::<(DbPet, DbPetType)>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(pets)
    }

    fn list_pets_with_visits(&self, owner_id: i32) -> RepositoryResult<Vec<(Pet, Vec<Visit>)>> {
        use crate::schema::visits;

        let pets = self.list_pets(owner_id)?;
        let pet_ids = pets.iter().map(|pet| pet.id).collect::<Vec<i32>>();

        let mut conn = self.conn()?;
        let visits = visits::table
            .filter(visits::pet_id.eq_any(pet_ids))
            .order(visits::visit_date.asc())
            .load::<DbVisit>(&mut conn)?
            .into_iter()
            .map(Visit::from)
            .collect::<Vec<_>>();

        let pets_with_visits = pets
            .into_iter()
            .map(|pet| {
                let pet_visits = visits
                    .iter()
                    .filter(|visit| visit.pet_id == pet.id)
                    .cloned()
                    .collect();
                (pet, pet_visits)
            })
            .collect();

        Ok(pets_with_visits)
    }

    fn list_pet_types(&self) -> RepositoryResult<Vec<PetType>> {
        use crate::schema::pet_types;

        let mut conn = self.conn()?;
        let types = pet_types::table
            .order(pet_types::name.asc())
            .load::<DbPetType>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(types)
    }

    fn get_pet_type_by_name(&self, name: &str) -> RepositoryResult<Option<PetType>> {
        use crate::schema::pet_types;

        let mut conn = self.conn()?;
        let pet_type = pet_types::table
            .filter(pet_types::name.eq(name))
            .first::<DbPetType>(&mut conn)
            .optional()?;

        Ok(pet_type.map(Into::into))
    }
}

impl PetWriter for DieselRepository {
    fn create_pet(&self, new_pet: &NewPet) -> RepositoryResult<Pet> {
        use crate::schema::{pet_types, pets};

        let mut conn = self.conn()?;
        let db_new_pet: DbNewPet = new_pet.into();

        let created = diesel::insert_into(pets::table)
            .values(&db_new_pet)
            .get_result::<DbPet>(&mut conn)?;

        let pet_type = pet_types::table
            .find(created.type_id)
            .first::<DbPetType>(&mut conn)?;

        Ok((created, pet_type).into())
    }

    fn update_pet(&self, pet_id: i32, updates: &UpdatePet) -> RepositoryResult<Pet> {
        use crate::schema::{pet_types, pets};

        let mut conn = self.conn()?;
        let db_updates: DbUpdatePet = updates.into();

        let updated = diesel::update(pets::table.find(pet_id))
            .set(&db_updates)
            .get_result::<DbPet>(&mut conn)?;

        let pet_type = pet_types::table
            .find(updated.type_id)
            .first::<DbPetType>(&mut conn)?;

        Ok((updated, pet_type).into())
    }
}
