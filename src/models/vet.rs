use diesel::prelude::*;

use crate::domain::vet::{Specialty as DomainSpecialty, Vet as DomainVet};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::vets)]
/// Diesel model for [`crate::domain::vet::Vet`] without its specialties.
pub struct Vet {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::specialties)]
pub struct Specialty {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations, Insertable)]
#[diesel(table_name = crate::schema::vet_specialties)]
#[diesel(belongs_to(Vet, foreign_key = vet_id))]
#[diesel(belongs_to(Specialty, foreign_key = specialty_id))]
#[diesel(primary_key(vet_id, specialty_id))]
pub struct VetSpecialty {
    pub vet_id: i32,
    pub specialty_id: i32,
}

impl From<Specialty> for DomainSpecialty {
    fn from(specialty: Specialty) -> Self {
        Self {
            id: specialty.id,
            name: specialty.name,
        }
    }
}

impl Vet {
    /// Attach the loaded specialty rows to build the domain aggregate.
    pub fn into_domain(self, specialties: Vec<Specialty>) -> DomainVet {
        DomainVet {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            specialties: specialties.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vet_into_domain_carries_specialties() {
        let db_vet = Vet {
            id: 3,
            first_name: "Linda".to_string(),
            last_name: "Douglas".to_string(),
        };
        let specialties = vec![
            Specialty {
                id: 2,
                name: "surgery".to_string(),
            },
            Specialty {
                id: 3,
                name: "dentistry".to_string(),
            },
        ];

        let domain = db_vet.into_domain(specialties);
        assert_eq!(domain.last_name, "Douglas");
        assert_eq!(domain.specialties.len(), 2);
        assert_eq!(domain.specialties[0].name, "surgery");
    }

    #[test]
    fn vet_without_specialties() {
        let db_vet = Vet {
            id: 1,
            first_name: "James".to_string(),
            last_name: "Carter".to_string(),
        };
        let domain = db_vet.into_domain(Vec::new());
        assert!(domain.specialties.is_empty());
    }
}
