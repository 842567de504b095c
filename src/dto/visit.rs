use serde::Serialize;

use crate::domain::pet::Pet;
use crate::domain::visit::Visit;

/// Data required to render the visit form: the pet being seen plus its
/// previous visits.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VisitPageData {
    pub pet: Pet,
    pub visits: Vec<Visit>,
}
