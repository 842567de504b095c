use chrono::NaiveDate;

use petclinic::domain::owner::{NewOwner, UpdateOwner};
use petclinic::domain::pet::NewPet;
use petclinic::domain::visit::NewVisit;
use petclinic::dto::owner::{FindOwnersQuery, OwnerSearchOutcome};
use petclinic::repository::{
    DieselRepository, OwnerListQuery, OwnerReader, OwnerWriter, PetReader, PetWriter, VetListQuery,
    VetReader, VisitReader, VisitWriter,
};
use petclinic::services::owner as owner_service;

mod common;

fn new_owner(first_name: &str, last_name: &str) -> NewOwner {
    NewOwner {
        first_name: first_name.into(),
        last_name: last_name.into(),
        address: "110 W. Liberty St.".into(),
        city: "Madison".into(),
        telephone: "6085551023".into(),
    }
}

#[test]
fn test_owner_repository_crud() {
    let test_db = common::TestDb::new("test_owner_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let franklin = repo.create_owner(&new_owner("George", "Franklin")).unwrap();
    let davis = repo.create_owner(&new_owner("Betty", "Davis")).unwrap();
    repo.create_owner(&new_owner("Harold", "Davis")).unwrap();

    let (total, items) = repo.list_owners(OwnerListQuery::new()).unwrap();
    assert_eq!(total, 3);
    assert_eq!(items.len(), 3);

    let fetched = repo.get_owner_by_id(franklin.id).unwrap().unwrap();
    assert_eq!(fetched.last_name, "Franklin");

    assert!(repo.get_owner_by_id(99999).unwrap().is_none());

    let (davis_total, davis_items) = repo
        .list_owners(OwnerListQuery::new().last_name("Davis"))
        .unwrap();
    assert_eq!(davis_total, 2);
    assert!(davis_items.iter().all(|owner| owner.last_name == "Davis"));

    let (prefix_total, _) = repo
        .list_owners(OwnerListQuery::new().last_name("Dav"))
        .unwrap();
    assert_eq!(prefix_total, 2);

    let (none_total, none_items) = repo
        .list_owners(OwnerListQuery::new().last_name("NonExistent"))
        .unwrap();
    assert_eq!(none_total, 0);
    assert!(none_items.is_empty());

    let updates = UpdateOwner {
        first_name: "Elizabeth".into(),
        last_name: davis.last_name.clone(),
        address: davis.address.clone(),
        city: davis.city.clone(),
        telephone: "6085551749".into(),
    };
    let updated = repo.update_owner(davis.id, &updates).unwrap();
    assert_eq!(updated.first_name, "Elizabeth");
    assert_eq!(updated.telephone, "6085551749");
}

#[test]
fn test_owner_repository_pagination() {
    let test_db = common::TestDb::new("test_owner_repository_pagination.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 0..7 {
        repo.create_owner(&new_owner(&format!("Jean{i}"), "Coleman"))
            .unwrap();
    }

    let (total, first_page) = repo
        .list_owners(OwnerListQuery::new().last_name("Coleman").paginate(1, 5))
        .unwrap();
    assert_eq!(total, 7);
    assert_eq!(first_page.len(), 5);

    let (_, second_page) = repo
        .list_owners(OwnerListQuery::new().last_name("Coleman").paginate(2, 5))
        .unwrap();
    assert_eq!(second_page.len(), 2);

    let (boundary_total, boundary_page) = repo
        .list_owners(OwnerListQuery::new().last_name("Coleman").paginate(999, 5))
        .unwrap();
    assert_eq!(boundary_total, 7);
    assert!(boundary_page.is_empty());
}

#[test]
fn test_pet_repository_crud() {
    let test_db = common::TestDb::new("test_pet_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let owner = repo.create_owner(&new_owner("George", "Franklin")).unwrap();

    let cat = repo.get_pet_type_by_name("cat").unwrap().unwrap();
    assert!(repo.get_pet_type_by_name("invalidtype").unwrap().is_none());

    let types = repo.list_pet_types().unwrap();
    assert_eq!(types.len(), 6);

    let leo = repo
        .create_pet(&NewPet {
            owner_id: owner.id,
            type_id: cat.id,
            name: "Leo".into(),
            birth_date: NaiveDate::from_ymd_opt(2020, 9, 7).unwrap(),
        })
        .unwrap();
    assert_eq!(leo.pet_type.name, "cat");

    let pets = repo.list_pets(owner.id).unwrap();
    assert_eq!(pets.len(), 1);
    assert_eq!(pets[0].name, "Leo");

    let fetched = repo.get_pet_by_id(leo.id).unwrap().unwrap();
    assert_eq!(fetched.owner_id, owner.id);
    assert!(repo.get_pet_by_id(99999).unwrap().is_none());
}

#[test]
fn test_visit_repository_crud() {
    let test_db = common::TestDb::new("test_visit_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let owner = repo.create_owner(&new_owner("George", "Franklin")).unwrap();
    let cat = repo.get_pet_type_by_name("cat").unwrap().unwrap();
    let pet = repo
        .create_pet(&NewPet {
            owner_id: owner.id,
            type_id: cat.id,
            name: "Leo".into(),
            birth_date: NaiveDate::from_ymd_opt(2020, 9, 7).unwrap(),
        })
        .unwrap();

    repo.create_visit(&NewVisit {
        pet_id: pet.id,
        visit_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        description: "rabies shot".into(),
    })
    .unwrap();
    repo.create_visit(&NewVisit {
        pet_id: pet.id,
        visit_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        description: "neutered".into(),
    })
    .unwrap();

    let visits = repo.list_visits(pet.id).unwrap();
    assert_eq!(visits.len(), 2);
    assert_eq!(visits[0].description, "rabies shot");

    let pets_with_visits = repo.list_pets_with_visits(owner.id).unwrap();
    assert_eq!(pets_with_visits.len(), 1);
    assert_eq!(pets_with_visits[0].1.len(), 2);
}

#[test]
fn test_vet_repository_list() {
    let test_db = common::TestDb::new("test_vet_repository_list.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    // reference data seeded by the migrations
    let (total, vets) = repo.list_vets(VetListQuery::new()).unwrap();
    assert_eq!(total, 6);
    assert_eq!(vets.len(), 6);

    let carter = vets.iter().find(|vet| vet.last_name == "Carter").unwrap();
    assert_eq!(carter.first_name, "James");
    assert!(carter.specialties.is_empty());

    let douglas = vets.iter().find(|vet| vet.last_name == "Douglas").unwrap();
    let names: Vec<&str> = douglas
        .specialties
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["dentistry", "surgery"]);

    let (paged_total, page) = repo
        .list_vets(VetListQuery::new().paginate(2, 5))
        .unwrap();
    assert_eq!(paged_total, 6);
    assert_eq!(page.len(), 1);
}

#[test]
fn test_search_resolver_against_database() {
    let test_db = common::TestDb::new("test_search_resolver_against_database.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let franklin = repo.create_owner(&new_owner("George", "Franklin")).unwrap();
    repo.create_owner(&new_owner("Betty", "Davis")).unwrap();
    repo.create_owner(&new_owner("Harold", "Davis")).unwrap();

    let outcome = owner_service::find_owners(
        &repo,
        FindOwnersQuery {
            last_name: Some("Franklin".into()),
            ..FindOwnersQuery::default()
        },
    )
    .unwrap();
    assert_eq!(
        outcome,
        OwnerSearchOutcome::SingleMatch {
            owner_id: franklin.id
        }
    );

    let outcome = owner_service::find_owners(
        &repo,
        FindOwnersQuery {
            last_name: Some("Davis".into()),
            ..FindOwnersQuery::default()
        },
    )
    .unwrap();
    match outcome {
        OwnerSearchOutcome::Matches(page) => {
            assert_eq!(page.total_items, 2);
            assert_eq!(page.page, 1);
        }
        other => panic!("expected matches, got {other:?}"),
    }

    let outcome = owner_service::find_owners(
        &repo,
        FindOwnersQuery {
            last_name: Some("NonExistentName".into()),
            ..FindOwnersQuery::default()
        },
    )
    .unwrap();
    assert_eq!(
        outcome,
        OwnerSearchOutcome::NoMatch {
            last_name: "NonExistentName".into()
        }
    );
}
