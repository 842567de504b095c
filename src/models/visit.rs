use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::visit::{NewVisit as DomainNewVisit, Visit as DomainVisit};
use crate::models::pet::Pet;

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(table_name = crate::schema::visits)]
#[diesel(belongs_to(Pet, foreign_key = pet_id))]
/// Diesel model for [`crate::domain::visit::Visit`].
pub struct Visit {
    pub id: i32,
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::visits)]
/// Insertable form of [`Visit`].
pub struct NewVisit<'a> {
    pub pet_id: i32,
    pub visit_date: NaiveDate,
    pub description: &'a str,
}

impl From<Visit> for DomainVisit {
    fn from(visit: Visit) -> Self {
        Self {
            id: visit.id,
            pet_id: visit.pet_id,
            visit_date: visit.visit_date,
            description: visit.description,
        }
    }
}

impl<'a> From<&'a DomainNewVisit> for NewVisit<'a> {
    fn from(visit: &'a DomainNewVisit) -> Self {
        Self {
            pet_id: visit.pet_id,
            visit_date: visit.visit_date,
            description: visit.description.as_str(),
        }
    }
}
