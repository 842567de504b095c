use serde::Serialize;

use crate::domain::owner::Owner;
use crate::domain::pet::Pet;
use crate::domain::visit::Visit;
use crate::pagination::Paginated;

/// Whitespace policy applied to the last-name filter before querying.
///
/// The reference behavior passes the filter through verbatim, so `Preserve`
/// is the default; `Trim` is available behind configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimPolicy {
    #[default]
    Preserve,
    Trim,
}

/// Query parameters accepted by the owner search service.
#[derive(Debug, Default)]
pub struct FindOwnersQuery {
    /// Last-name prefix entered by the user, if any.
    pub last_name: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
    pub trim: TrimPolicy,
}

/// Zero/one/many classification of an owner search.
#[derive(Debug, Clone, PartialEq)]
pub enum OwnerSearchOutcome {
    /// Nothing matched; the find form is re-shown with an error on the
    /// filter input.
    NoMatch { last_name: String },
    /// Exactly one owner matched; callers redirect to its detail view.
    SingleMatch { owner_id: i32 },
    /// Two or more owners matched.
    Matches(Paginated<Owner>),
}

/// A pet with its visit history, as rendered on the owner detail page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PetWithVisits {
    pub pet: Pet,
    pub visits: Vec<Visit>,
}

/// Data required to render the owner detail template.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OwnerDetailPageData {
    pub owner: Owner,
    pub pets: Vec<PetWithVisits>,
}
