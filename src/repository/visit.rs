//! Repository implementation for pet visits.

use diesel::prelude::*;

use crate::domain::visit::{NewVisit, Visit};
use crate::models::visit::{NewVisit as DbNewVisit, Visit as DbVisit};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, VisitReader, VisitWriter};

impl VisitReader for DieselRepository {
    fn list_visits(&self, pet_id: i32) -> RepositoryResult<Vec<Visit>> {
        use crate::schema::visits;

        let mut conn = self.conn()?;
        let visits = visits::table
            .filter(visits::pet_id.eq(pet_id))
            .order(visits::visit_date.asc())
            .load::<DbVisit>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(visits)
    }
}

impl VisitWriter for DieselRepository {
    fn create_visit(&self, new_visit: &NewVisit) -> RepositoryResult<Visit> {
        use crate::schema::visits;

        let mut conn = self.conn()?;
        let db_new_visit: DbNewVisit = new_visit.into();

        let created = diesel::insert_into(visits::table)
            .values(&db_new_visit)
            .get_result::<DbVisit>(&mut conn)?;

        Ok(created.into())
    }
}
