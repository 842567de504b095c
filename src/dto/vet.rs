//! DTOs exposed by the vet API endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::vet::{Specialty, Vet};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecialtyDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VetDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialties: Vec<SpecialtyDto>,
}

/// Wire payload for `GET /vets`, serialized to JSON or XML as requested.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VetListPayload {
    #[serde(rename = "vetList")]
    pub vet_list: Vec<VetDto>,
}

impl From<Specialty> for SpecialtyDto {
    fn from(specialty: Specialty) -> Self {
        Self {
            id: specialty.id,
            name: specialty.name,
        }
    }
}

impl From<Vet> for VetDto {
    fn from(vet: Vet) -> Self {
        Self {
            id: vet.id,
            first_name: vet.first_name,
            last_name: vet.last_name,
            specialties: vet.specialties.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Vet>> for VetListPayload {
    fn from(vets: Vec<Vet>) -> Self {
        Self {
            vet_list: vets.into_iter().map(Into::into).collect(),
        }
    }
}
