//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::domain::pet::{NewPet, Pet, PetType, UpdatePet};
use crate::domain::vet::Vet;
use crate::domain::visit::{NewVisit, Visit};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    OwnerListQuery, OwnerReader, OwnerWriter, PetReader, PetWriter, VetListQuery, VetReader,
    VisitReader, VisitWriter,
};

mock! {
    pub Repository {}

    impl OwnerReader for Repository {
        fn get_owner_by_id(&self, owner_id: i32) -> RepositoryResult<Option<Owner>>;
        fn list_owners(&self, query: OwnerListQuery) -> RepositoryResult<(usize, Vec<Owner>)>;
    }

    impl OwnerWriter for Repository {
        fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner>;
        fn update_owner(&self, owner_id: i32, updates: &UpdateOwner) -> RepositoryResult<Owner>;
    }

    impl PetReader for Repository {
        fn get_pet_by_id(&self, pet_id: i32) -> RepositoryResult<Option<Pet>>;
        fn list_pets(&self, owner_id: i32) -> RepositoryResult<Vec<Pet>>;
        fn list_pets_with_visits(&self, owner_id: i32) -> RepositoryResult<Vec<(Pet, Vec<Visit>)>>;
        fn list_pet_types(&self) -> RepositoryResult<Vec<PetType>>;
        fn get_pet_type_by_name(&self, name: &str) -> RepositoryResult<Option<PetType>>;
    }

    impl PetWriter for Repository {
        fn create_pet(&self, new_pet: &NewPet) -> RepositoryResult<Pet>;
        fn update_pet(&self, pet_id: i32, updates: &UpdatePet) -> RepositoryResult<Pet>;
    }

    impl VisitReader for Repository {
        fn list_visits(&self, pet_id: i32) -> RepositoryResult<Vec<Visit>>;
    }

    impl VisitWriter for Repository {
        fn create_visit(&self, new_visit: &NewVisit) -> RepositoryResult<Visit>;
    }

    impl VetReader for Repository {
        fn list_vets(&self, query: VetListQuery) -> RepositoryResult<(usize, Vec<Vet>)>;
    }
}
