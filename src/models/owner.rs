use diesel::prelude::*;

use crate::domain::owner::{
    NewOwner as DomainNewOwner, Owner as DomainOwner, UpdateOwner as DomainUpdateOwner,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::owners)]
/// Diesel model for [`crate::domain::owner::Owner`].
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::owners)]
/// Insertable form of [`Owner`].
pub struct NewOwner<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub telephone: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::owners)]
/// Data used when updating an [`Owner`] record.
pub struct UpdateOwner<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub telephone: &'a str,
}

impl From<Owner> for DomainOwner {
    fn from(owner: Owner) -> Self {
        Self {
            id: owner.id,
            first_name: owner.first_name,
            last_name: owner.last_name,
            address: owner.address,
            city: owner.city,
            telephone: owner.telephone,
        }
    }
}

impl<'a> From<&'a DomainNewOwner> for NewOwner<'a> {
    fn from(owner: &'a DomainNewOwner) -> Self {
        Self {
            first_name: owner.first_name.as_str(),
            last_name: owner.last_name.as_str(),
            address: owner.address.as_str(),
            city: owner.city.as_str(),
            telephone: owner.telephone.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateOwner> for UpdateOwner<'a> {
    fn from(owner: &'a DomainUpdateOwner) -> Self {
        Self {
            first_name: owner.first_name.as_str(),
            last_name: owner.last_name.as_str(),
            address: owner.address.as_str(),
            city: owner.city.as_str(),
            telephone: owner.telephone.as_str(),
        }
    }
}
