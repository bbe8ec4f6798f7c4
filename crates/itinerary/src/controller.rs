//! Derives the dashboard outputs for a selected itinerary.
//!
//! Every selection change recomputes the whole output set from the catalog:
//! two KPIs, the per-day distance chart, and the route map. Nothing is cached
//! between calls and the catalog is only ever borrowed immutably, so the
//! result is a pure function of `(catalog, id)`.

use serde::Serialize;

use crate::{
    catalog::{Catalog, Itinerary, ItineraryId},
    figure::{BarTrace, Figure, LatLon, Layout, Mapbox, MapTrace, Margin, Marker, Title, Trace},
    types::CatalogError,
};

pub const CHART_TITLE: &str = "Nombre de KM parcourus par jour";
pub const TRANSPARENT: &str = "rgba(0,0,0,0)";
pub const MAP_STYLE: &str = "stamen-terrain";
pub const MAP_ZOOM: u8 = 5;
pub const MAP_CENTER: LatLon = LatLon {
    lat: 48.8588,
    lon: 2.2770,
};
pub const MARKER_SIZE: u32 = 10;

pub const TOTAL_DISTANCE_LABEL: &str = "🏅 Full km";
pub const DAY_COUNT_LABEL: &str = "📅 Number of days";

/// A single summary number with its caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Kpi {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Kpis {
    pub total_distance_km: Kpi,
    pub day_count: Kpi,
}

/// Everything the page refreshes after a selection change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardUpdate {
    pub itinerary: ItineraryId,
    /// Route color from the catalog. Informational: the map trace does not use it.
    pub color: &'static str,
    pub kpis: Kpis,
    pub chart: Figure,
    pub map: Figure,
}

#[derive(Clone, Copy, Debug)]
pub struct SelectionController<'a> {
    catalog: &'a Catalog,
}

impl<'a> SelectionController<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Handle a raw selection coming from the dropdown.
    pub fn on_selection_changed(&self, raw: &str) -> Result<DashboardUpdate, CatalogError> {
        let itinerary = self.catalog.get_itinerary(raw)?;
        Ok(derive_update(itinerary))
    }

    pub fn update_for(&self, id: ItineraryId) -> DashboardUpdate {
        derive_update(self.catalog.get(id))
    }
}

fn derive_update(itinerary: &Itinerary) -> DashboardUpdate {
    DashboardUpdate {
        itinerary: itinerary.id,
        color: itinerary.color,
        kpis: kpis(itinerary),
        chart: distance_chart(itinerary),
        map: route_map(itinerary),
    }
}

pub fn kpis(itinerary: &Itinerary) -> Kpis {
    Kpis {
        total_distance_km: Kpi {
            label: TOTAL_DISTANCE_LABEL,
            value: itinerary.total_distance_km(),
        },
        day_count: Kpi {
            label: DAY_COUNT_LABEL,
            value: itinerary.day_count() as u32,
        },
    }
}

/// Bar chart of kilometres per day.
pub fn distance_chart(itinerary: &Itinerary) -> Figure {
    Figure {
        data: vec![Trace::Bar(BarTrace {
            x: itinerary.day_labels.iter().map(|d| d.to_string()).collect(),
            y: itinerary.daily_distances.to_vec(),
        })],
        layout: Layout {
            title: Some(Title {
                text: CHART_TITLE.to_string(),
            }),
            paper_bgcolor: Some(TRANSPARENT),
            plot_bgcolor: Some(TRANSPARENT),
            ..Layout::default()
        },
    }
}

/// Connected markers through the waypoints in travel order.
pub fn route_map(itinerary: &Itinerary) -> Figure {
    let waypoints = itinerary.waypoints;
    Figure {
        data: vec![Trace::Scattermapbox(MapTrace {
            mode: "markers+lines",
            lat: waypoints.iter().map(|w| w.latitude).collect(),
            lon: waypoints.iter().map(|w| w.longitude).collect(),
            text: waypoints.iter().map(|w| w.city.to_string()).collect(),
            marker: Marker { size: MARKER_SIZE },
        })],
        layout: Layout {
            margin: Some(Margin::ZERO),
            mapbox: Some(Mapbox {
                style: MAP_STYLE,
                zoom: MAP_ZOOM,
                center: MAP_CENTER,
            }),
            ..Layout::default()
        },
    }
}
