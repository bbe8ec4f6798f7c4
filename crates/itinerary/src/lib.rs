//! Trip data and derived views for the bike expedition dashboard.
//!
//! - `catalog`: the three static routes and their lookup.
//! - `controller`: recomputes KPIs, chart, and map for a selection.
//! - `figure`: Plotly-compatible figure model.
//! - `session`: selection state with per-slot output bindings.

pub mod catalog;
pub mod controller;
pub mod figure;
pub mod session;
mod types;

pub use catalog::{Catalog, Itinerary, ItineraryId, Waypoint};
pub use controller::{DashboardUpdate, Kpi, Kpis, SelectionController};
pub use session::{OutputSlot, SelectionSession, SlotValue};
pub use types::CatalogError;
