//! Vet listing use cases.

use crate::domain::vet::Vet;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated, total_pages};
use crate::repository::{VetListQuery, VetReader};
use crate::services::ServiceResult;

/// One page of vets for the HTML list.
pub fn list_vets_page<R>(repo: &R, page: Option<usize>) -> ServiceResult<Paginated<Vet>>
where
    R: VetReader + ?Sized,
{
    let page = page.unwrap_or(1).max(1);
    let (total, vets) =
        repo.list_vets(VetListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE))?;

    Ok(Paginated::new(
        vets,
        page,
        total_pages(total, DEFAULT_ITEMS_PER_PAGE),
        total,
    ))
}

/// The full vet list for the JSON/XML endpoint.
pub fn list_all_vets<R>(repo: &R) -> ServiceResult<Vec<Vet>>
where
    R: VetReader + ?Sized,
{
    let (_total, vets) = repo.list_vets(VetListQuery::new())?;
    Ok(vets)
}
