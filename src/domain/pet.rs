use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct PetType {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: i32,
    pub owner_id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
    pub pet_type: PetType,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewPet {
    pub owner_id: i32,
    pub type_id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdatePet {
    pub type_id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}
