use crate::db::{DbConnection, DbPool, get_connection};
use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::domain::pet::{NewPet, Pet, PetType, UpdatePet};
use crate::domain::vet::Vet;
use crate::domain::visit::{NewVisit, Visit};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod owner;
pub mod pet;
pub mod vet;
pub mod visit;

/// Diesel-backed implementation of the repository traits below.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(get_connection(&self.pool)?)
    }
}

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        ((self.page.max(1) - 1) * self.per_page) as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

#[derive(Debug, Clone, Default)]
pub struct OwnerListQuery {
    /// Prefix the stored last name must start with, matched verbatim.
    pub last_name: Option<String>,
    pub pagination: Option<Pagination>,
}

impl OwnerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct VetListQuery {
    pub pagination: Option<Pagination>,
}

impl VetListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait OwnerReader {
    fn get_owner_by_id(&self, owner_id: i32) -> RepositoryResult<Option<Owner>>;
    fn list_owners(&self, query: OwnerListQuery) -> RepositoryResult<(usize, Vec<Owner>)>;
}

pub trait OwnerWriter {
    fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner>;
    fn update_owner(&self, owner_id: i32, updates: &UpdateOwner) -> RepositoryResult<Owner>;
}

pub trait PetReader {
    fn get_pet_by_id(&self, pet_id: i32) -> RepositoryResult<Option<Pet>>;
    fn list_pets(&self, owner_id: i32) -> RepositoryResult<Vec<Pet>>;
    fn list_pets_with_visits(&self, owner_id: i32) -> RepositoryResult<Vec<(Pet, Vec<Visit>)>>;
    fn list_pet_types(&self) -> RepositoryResult<Vec<PetType>>;
    fn get_pet_type_by_name(&self, name: &str) -> RepositoryResult<Option<PetType>>;
}

pub trait PetWriter {
    fn create_pet(&self, new_pet: &NewPet) -> RepositoryResult<Pet>;
    fn update_pet(&self, pet_id: i32, updates: &UpdatePet) -> RepositoryResult<Pet>;
}

pub trait VisitReader {
    fn list_visits(&self, pet_id: i32) -> RepositoryResult<Vec<Visit>>;
}

pub trait VisitWriter {
    fn create_visit(&self, new_visit: &NewVisit) -> RepositoryResult<Visit>;
}

pub trait VetReader {
    fn list_vets(&self, query: VetListQuery) -> RepositoryResult<(usize, Vec<Vet>)>;
}
