use thiserror::Error;

use crate::catalog::ItineraryId;

/// Failures surfaced by catalog lookups and catalog validation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown itinerary {id:?}")]
    NotFound { id: String },
    #[error("itinerary {id} is malformed: {reason}")]
    Invalid { id: ItineraryId, reason: String },
}

impl CatalogError {
    pub fn not_found(id: impl Into<String>) -> Self {
        CatalogError::NotFound { id: id.into() }
    }
}
