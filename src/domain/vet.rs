use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Specialty {
    pub id: i32,
    pub name: String,
}

/// A veterinarian together with their specialties.
///
/// The specialty set is loaded eagerly; the list endpoints always render it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Vet {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub specialties: Vec<Specialty>,
}
