//! Service layer: request-scoped use cases expressed over the repository
//! traits so they stay testable without a database.

use thiserror::Error;

use crate::forms::FieldErrors;
use crate::repository::errors::RepositoryError;

pub mod owner;
pub mod pet;
pub mod vet;
pub mod visit;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced owner or pet does not exist.
    #[error("record not found")]
    NotFound,

    /// The submission was rejected; the mapping is rendered back verbatim.
    #[error("form validation failed")]
    Validation(FieldErrors),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
