//! Owner use cases, including the search resolver backing `GET /owners`.

use crate::domain::owner::Owner;
use crate::dto::owner::{OwnerDetailPageData, PetWithVisits, TrimPolicy};
pub use crate::dto::owner::{FindOwnersQuery, OwnerSearchOutcome};
use crate::forms::owner::OwnerForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated, total_pages};
use crate::repository::{OwnerListQuery, OwnerReader, OwnerWriter, PetReader};
use crate::services::{ServiceError, ServiceResult};

fn build_list_query(last_name: &str, page: usize) -> OwnerListQuery {
    let mut query = OwnerListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if !last_name.is_empty() {
        query = query.last_name(last_name);
    }
    query
}

/// Resolves an owner search to its zero/one/many outcome.
///
/// An absent or zero page defaults to page 1. A page past the last one is
/// still answered with a valid, empty list page.
pub fn find_owners<R>(repo: &R, query: FindOwnersQuery) -> ServiceResult<OwnerSearchOutcome>
where
    R: OwnerReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let last_name = query.last_name.unwrap_or_default();
    let last_name = match query.trim {
        TrimPolicy::Trim => last_name.trim().to_string(),
        TrimPolicy::Preserve => last_name,
    };

    let (total, owners) = repo.list_owners(build_list_query(&last_name, page))?;

    match total {
        0 => Ok(OwnerSearchOutcome::NoMatch { last_name }),
        1 => {
            // The lone match can sit outside the requested page slice.
            let owner = match owners.into_iter().next() {
                Some(owner) => owner,
                None => repo
                    .list_owners(build_list_query(&last_name, 1))?
                    .1
                    .into_iter()
                    .next()
                    .ok_or(ServiceError::NotFound)?,
            };
            Ok(OwnerSearchOutcome::SingleMatch { owner_id: owner.id })
        }
        _ => Ok(OwnerSearchOutcome::Matches(Paginated::new(
            owners,
            page,
            total_pages(total, DEFAULT_ITEMS_PER_PAGE),
            total,
        ))),
    }
}

/// Fetches an owner or reports [`ServiceError::NotFound`].
pub fn get_owner<R>(repo: &R, owner_id: i32) -> ServiceResult<Owner>
where
    R: OwnerReader + ?Sized,
{
    repo.get_owner_by_id(owner_id)?.ok_or(ServiceError::NotFound)
}

/// Loads the owner detail page: the owner plus each pet with its visits.
pub fn get_owner_detail<R>(repo: &R, owner_id: i32) -> ServiceResult<OwnerDetailPageData>
where
    R: OwnerReader + PetReader + ?Sized,
{
    let owner = get_owner(repo, owner_id)?;
    let pets = repo
        .list_pets_with_visits(owner_id)?
        .into_iter()
        .map(|(pet, visits)| PetWithVisits { pet, visits })
        .collect();

    Ok(OwnerDetailPageData { owner, pets })
}

/// Validates the owner form and persists a new owner record.
pub fn create_owner<R>(repo: &R, form: &OwnerForm) -> ServiceResult<Owner>
where
    R: OwnerWriter + ?Sized,
{
    let errors = form.field_errors();
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    Ok(repo.create_owner(&form.into())?)
}

/// Validates the owner form and applies it to an existing owner.
pub fn update_owner<R>(repo: &R, owner_id: i32, form: &OwnerForm) -> ServiceResult<Owner>
where
    R: OwnerReader + OwnerWriter + ?Sized,
{
    get_owner(repo, owner_id)?;

    let errors = form.field_errors();
    if !errors.is_empty() {
        return Err(ServiceError::Validation(errors));
    }

    Ok(repo.update_owner(owner_id, &form.into())?)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::domain::owner::{NewOwner, UpdateOwner};
    use crate::repository::errors::RepositoryResult;

    #[derive(Default)]
    struct InMemoryRepo {
        owners: RefCell<Vec<Owner>>,
    }

    impl InMemoryRepo {
        fn with_owners(owners: Vec<Owner>) -> Self {
            Self {
                owners: RefCell::new(owners),
            }
        }
    }

    impl OwnerReader for InMemoryRepo {
        fn get_owner_by_id(&self, owner_id: i32) -> RepositoryResult<Option<Owner>> {
            Ok(self
                .owners
                .borrow()
                .iter()
                .find(|owner| owner.id == owner_id)
                .cloned())
        }

        fn list_owners(&self, query: OwnerListQuery) -> RepositoryResult<(usize, Vec<Owner>)> {
            let owners = self.owners.borrow();
            let mut matches: Vec<Owner> = owners
                .iter()
                .filter(|owner| {
                    query
                        .last_name
                        .as_deref()
                        .is_none_or(|prefix| owner.last_name.starts_with(prefix))
                })
                .cloned()
                .collect();
            matches.sort_by(|a, b| (&a.last_name, a.id).cmp(&(&b.last_name, b.id)));

            let total = matches.len();
            let items = match &query.pagination {
                Some(pagination) => matches
                    .into_iter()
                    .skip(pagination.offset() as usize)
                    .take(pagination.per_page)
                    .collect(),
                None => matches,
            };

            Ok((total, items))
        }
    }

    impl OwnerWriter for InMemoryRepo {
        fn create_owner(&self, new_owner: &NewOwner) -> RepositoryResult<Owner> {
            let mut owners = self.owners.borrow_mut();
            let id = owners.iter().map(|owner| owner.id).max().unwrap_or(0) + 1;
            let owner = Owner {
                id,
                first_name: new_owner.first_name.clone(),
                last_name: new_owner.last_name.clone(),
                address: new_owner.address.clone(),
                city: new_owner.city.clone(),
                telephone: new_owner.telephone.clone(),
            };
            owners.push(owner.clone());
            Ok(owner)
        }

        fn update_owner(&self, owner_id: i32, updates: &UpdateOwner) -> RepositoryResult<Owner> {
            let mut owners = self.owners.borrow_mut();
            let owner = owners
                .iter_mut()
                .find(|owner| owner.id == owner_id)
                .expect("update target must exist");
            owner.first_name = updates.first_name.clone();
            owner.last_name = updates.last_name.clone();
            owner.address = updates.address.clone();
            owner.city = updates.city.clone();
            owner.telephone = updates.telephone.clone();
            Ok(owner.clone())
        }
    }

    fn owner(id: i32, first_name: &str, last_name: &str) -> Owner {
        Owner {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address: "110 W. Liberty St.".to_string(),
            city: "Madison".to_string(),
            telephone: "6085551023".to_string(),
        }
    }

    fn query(last_name: &str) -> FindOwnersQuery {
        FindOwnersQuery {
            last_name: Some(last_name.to_string()),
            ..FindOwnersQuery::default()
        }
    }

    #[test]
    fn zero_matches_yield_no_match() {
        let repo = InMemoryRepo::with_owners(vec![owner(1, "George", "Franklin")]);

        let outcome = find_owners(&repo, query("NonExistentName")).unwrap();

        assert_eq!(
            outcome,
            OwnerSearchOutcome::NoMatch {
                last_name: "NonExistentName".to_string()
            }
        );
    }

    #[test]
    fn single_match_yields_redirect_target() {
        let repo = InMemoryRepo::with_owners(vec![
            owner(1, "George", "Franklin"),
            owner(2, "Betty", "Davis"),
        ]);

        let outcome = find_owners(&repo, query("Franklin")).unwrap();

        assert_eq!(outcome, OwnerSearchOutcome::SingleMatch { owner_id: 1 });
    }

    #[test]
    fn two_matches_yield_a_list_page() {
        let repo = InMemoryRepo::with_owners(vec![
            owner(1, "George", "Franklin"),
            owner(2, "Betty", "Davis"),
            owner(4, "Harold", "Davis"),
        ]);

        let outcome = find_owners(&repo, query("Davis")).unwrap();

        match outcome {
            OwnerSearchOutcome::Matches(page) => {
                assert_eq!(page.total_items, 2);
                assert_eq!(page.page, 1);
                assert_eq!(page.total_pages, 1);
                assert_eq!(page.items.len(), 2);
            }
            other => panic!("expected matches, got {other:?}"),
        }
    }

    #[test]
    fn empty_filter_lists_every_owner() {
        let repo = InMemoryRepo::with_owners(vec![
            owner(1, "George", "Franklin"),
            owner(2, "Betty", "Davis"),
        ]);

        let outcome = find_owners(&repo, FindOwnersQuery::default()).unwrap();

        match outcome {
            OwnerSearchOutcome::Matches(page) => assert_eq!(page.total_items, 2),
            other => panic!("expected matches, got {other:?}"),
        }
    }

    #[test]
    fn prefix_matches_are_included() {
        let repo = InMemoryRepo::with_owners(vec![
            owner(2, "Betty", "Davis"),
            owner(4, "Harold", "Davis"),
        ]);

        let outcome = find_owners(&repo, query("Dav")).unwrap();

        match outcome {
            OwnerSearchOutcome::Matches(page) => assert_eq!(page.total_items, 2),
            other => panic!("expected matches, got {other:?}"),
        }
    }

    #[test]
    fn page_beyond_range_returns_empty_slice() {
        let owners = (1..=7).map(|id| owner(id, "Jean", "Coleman")).collect();
        let repo = InMemoryRepo::with_owners(owners);

        let outcome = find_owners(
            &repo,
            FindOwnersQuery {
                last_name: Some("Coleman".to_string()),
                page: Some(999),
                ..FindOwnersQuery::default()
            },
        )
        .unwrap();

        match outcome {
            OwnerSearchOutcome::Matches(page) => {
                assert!(page.items.is_empty());
                assert_eq!(page.page, 999);
                assert_eq!(page.total_pages, 2);
                assert_eq!(page.total_items, 7);
            }
            other => panic!("expected matches, got {other:?}"),
        }
    }

    #[test]
    fn second_page_holds_the_remainder() {
        let owners = (1..=7).map(|id| owner(id, "Jean", "Coleman")).collect();
        let repo = InMemoryRepo::with_owners(owners);

        let outcome = find_owners(
            &repo,
            FindOwnersQuery {
                last_name: Some("Coleman".to_string()),
                page: Some(2),
                ..FindOwnersQuery::default()
            },
        )
        .unwrap();

        match outcome {
            OwnerSearchOutcome::Matches(page) => {
                assert_eq!(page.page, 2);
                assert_eq!(page.items.len(), 2);
            }
            other => panic!("expected matches, got {other:?}"),
        }
    }

    #[test]
    fn single_match_is_resolved_even_on_an_out_of_range_page() {
        let repo = InMemoryRepo::with_owners(vec![owner(1, "George", "Franklin")]);

        let outcome = find_owners(
            &repo,
            FindOwnersQuery {
                last_name: Some("Franklin".to_string()),
                page: Some(999),
                ..FindOwnersQuery::default()
            },
        )
        .unwrap();

        assert_eq!(outcome, OwnerSearchOutcome::SingleMatch { owner_id: 1 });
    }

    #[test]
    fn page_zero_is_clamped_to_one() {
        let repo = InMemoryRepo::with_owners(vec![
            owner(2, "Betty", "Davis"),
            owner(4, "Harold", "Davis"),
        ]);

        let outcome = find_owners(
            &repo,
            FindOwnersQuery {
                last_name: Some("Davis".to_string()),
                page: Some(0),
                ..FindOwnersQuery::default()
            },
        )
        .unwrap();

        match outcome {
            OwnerSearchOutcome::Matches(page) => assert_eq!(page.page, 1),
            other => panic!("expected matches, got {other:?}"),
        }
    }

    #[test]
    fn preserve_policy_passes_whitespace_through() {
        let repo = InMemoryRepo::with_owners(vec![
            owner(2, "Betty", "Davis"),
            owner(4, "Harold", "Davis"),
        ]);

        let outcome = find_owners(&repo, query("  Davis  ")).unwrap();

        assert_eq!(
            outcome,
            OwnerSearchOutcome::NoMatch {
                last_name: "  Davis  ".to_string()
            }
        );
    }

    #[test]
    fn trim_policy_strips_whitespace_before_matching() {
        let repo = InMemoryRepo::with_owners(vec![
            owner(2, "Betty", "Davis"),
            owner(4, "Harold", "Davis"),
        ]);

        let outcome = find_owners(
            &repo,
            FindOwnersQuery {
                last_name: Some("  Davis  ".to_string()),
                trim: TrimPolicy::Trim,
                ..FindOwnersQuery::default()
            },
        )
        .unwrap();

        match outcome {
            OwnerSearchOutcome::Matches(page) => assert_eq!(page.total_items, 2),
            other => panic!("expected matches, got {other:?}"),
        }
    }

    #[test]
    fn create_owner_round_trips_through_search() {
        let repo = InMemoryRepo::default();
        let form = OwnerForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            telephone: "1234567890".to_string(),
        };

        let created = create_owner(&repo, &form).unwrap();
        let outcome = find_owners(&repo, query("Doe")).unwrap();

        assert_eq!(
            outcome,
            OwnerSearchOutcome::SingleMatch {
                owner_id: created.id
            }
        );
    }

    #[test]
    fn create_owner_rejects_blank_first_name() {
        let repo = InMemoryRepo::default();
        let form = OwnerForm {
            first_name: String::new(),
            last_name: "Doe".to_string(),
            address: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            telephone: "1234567890".to_string(),
        };

        match create_owner(&repo, &form) {
            Err(ServiceError::Validation(errors)) => assert!(errors.contains("first_name")),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(repo.owners.borrow().is_empty());
    }

    #[test]
    fn update_owner_requires_an_existing_record() {
        let repo = InMemoryRepo::default();
        let form = OwnerForm {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            address: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            telephone: "1234567890".to_string(),
        };

        assert!(matches!(
            update_owner(&repo, 99999, &form),
            Err(ServiceError::NotFound)
        ));
    }

    #[test]
    fn update_owner_applies_changes() {
        let repo = InMemoryRepo::with_owners(vec![owner(1, "George", "Franklin")]);
        let form = OwnerForm {
            first_name: "UpdatedGeorge".to_string(),
            last_name: "UpdatedFranklin".to_string(),
            address: "456 Updated St".to_string(),
            city: "Updated City".to_string(),
            telephone: "9876543210".to_string(),
        };

        let updated = update_owner(&repo, 1, &form).unwrap();

        assert_eq!(updated.first_name, "UpdatedGeorge");
        assert_eq!(updated.last_name, "UpdatedFranklin");
    }
}
