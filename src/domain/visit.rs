use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Visit {
    pub id: i32,
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewVisit {
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: String,
}
