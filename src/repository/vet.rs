//! Repository implementation for veterinarians.

use diesel::prelude::*;

use crate::domain::vet::Vet;
use crate::models::vet::{Specialty as DbSpecialty, Vet as DbVet};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, VetListQuery, VetReader};

impl VetReader for DieselRepository {
    fn list_vets(&self, query: VetListQuery) -> RepositoryResult<(usize, Vec<Vet>)> {
        use crate::schema::{specialties, vet_specialties, vets};

        let mut conn = self.conn()?;

        let total: i64 = vets::table.count().get_result(&mut conn)?;

        let mut vets_query = vets::table.order(vets::id.asc()).into_boxed();

        if let Some(pagination) = &query.pagination {
            vets_query = vets_query
                .limit(pagination.limit())
                .offset(pagination.offset());
        }

        let db_vets = vets_query.load::<DbVet>(&mut conn)?;
        let vet_ids = db_vets.iter().map(|vet| vet.id).collect::<Vec<i32>>();

        let vet_specialties = vet_specialties::table
            .inner_join(specialties::table)
            .filter(vet_specialties::vet_id.eq_any(vet_ids))
            .order(specialties::name.asc())
            .select((vet_specialties::vet_id, specialties::all_columns))
            .load::<(i32, DbSpecialty)>(&mut conn)?;

        let vets = db_vets
            .into_iter()
            .map(|vet| {
                let specialties = vet_specialties
                    .iter()
                    .filter(|(vet_id, _)| *vet_id == vet.id)
                    .map(|(_, specialty)| specialty.clone())
                    .collect::<Vec<_>>();
                vet.into_domain(specialties)
            })
            .collect();

        Ok((total as usize, vets))
    }
}
