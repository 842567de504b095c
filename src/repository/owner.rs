//! Repository implementation for pet owners.

use diesel::prelude::*;

use crate::domain::owner::{NewOwner, Owner, UpdateOwner};
use crate::models::owner::{
    NewOwner as DbNewOwner, Owner as DbOwner, UpdateOwner as DbUpdateOwner,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, OwnerListQuery, OwnerReader, OwnerWriter};

impl OwnerReader for DieselRepository {
    fn get_owner_by_id(&self, owner_id: i32) -> RepositoryResult<Option<Owner>> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let owner = owners::table
            .find(owner_id)
            .first::<DbOwner>(&mut conn)
            .optional()?;

        Ok(owner.map(Into::into))
    }

    fn list_owners(&self, query: OwnerListQuery) -> RepositoryResult<(usize, Vec<Owner>)> {
        use crate::schema::owners;

        let mut conn = self.conn()?;

        let mut total_query = owners::table.into_boxed();
        let mut items_query = owners::table.into_boxed();

        if let Some(prefix) = &query.last_name {
            let pattern = format!("{prefix}%");
            total_query = total_query.filter(owners::last_name.like(pattern.clone()));
            items_query = items_query.filter(owners::last_name.like(pattern));
        }

        let total: i64 = total_query.count().get_result(&mut conn)?;

        items_query = items_query.order((owners::last_name.asc(), owners::id.asc()));

        if let Some(pagination) = &query.pagination {
            items_query = items_query
                .limit(pagination.limit())
                .offset(pagination.offset());
        }

        let items = items_query
            .load::<DbOwner>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Owner>>();

        Ok((total as usize, items))
    }
}

impl OwnerWriter for DieselRepository {
    fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let db_new_owner: DbNewOwner = new_owner.into();

        let created = diesel::insert_into(owners::table)
            .values(&db_new_owner)
            .get_result::<DbOwner>(&mut conn)?;

        Ok(created.into())
    }

    fn update_owner(&self, owner_id: i32, updates: &UpdateOwner) -> RepositoryResult<Owner> {
        use crate::schema::owners;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateOwner = updates.into();

        let updated = diesel::update(owners::table.find(owner_id))
            .set(&db_updates)
            .get_result::<DbOwner>(&mut conn)?;

        Ok(updated.into())
    }
}
