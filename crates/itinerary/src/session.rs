//! Per-page selection state and the output bindings fed by it.
//!
//! A [`SelectionSession`] holds the currently chosen itinerary together with
//! the last successfully derived outputs. Output slots subscribe a handler
//! each; a selection change computes the update once and dispatches every
//! slot's value. Unknown ids leave both the selection and the bound outputs
//! untouched.

use std::fmt;

use tracing::warn;

use crate::{
    catalog::{Catalog, ItineraryId},
    controller::{DashboardUpdate, Kpi, SelectionController},
    figure::Figure,
    types::CatalogError,
};

/// Page element refreshed on every selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutputSlot {
    TotalDistance,
    DayCount,
    DistanceChart,
    RouteMap,
}

impl OutputSlot {
    pub const ALL: [OutputSlot; 4] = [
        OutputSlot::TotalDistance,
        OutputSlot::DayCount,
        OutputSlot::DistanceChart,
        OutputSlot::RouteMap,
    ];

    /// DOM id of the placeholder element.
    pub fn element_id(self) -> &'static str {
        match self {
            OutputSlot::TotalDistance => "kpi_1",
            OutputSlot::DayCount => "kpi_2",
            OutputSlot::DistanceChart => "histo-km",
            OutputSlot::RouteMap => "bike-map",
        }
    }
}

/// Value delivered to one slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlotValue<'a> {
    Kpi(&'a Kpi),
    Figure(&'a Figure),
}

impl DashboardUpdate {
    pub fn slot(&self, slot: OutputSlot) -> SlotValue<'_> {
        match slot {
            OutputSlot::TotalDistance => SlotValue::Kpi(&self.kpis.total_distance_km),
            OutputSlot::DayCount => SlotValue::Kpi(&self.kpis.day_count),
            OutputSlot::DistanceChart => SlotValue::Figure(&self.chart),
            OutputSlot::RouteMap => SlotValue::Figure(&self.map),
        }
    }
}

type SlotHandler<'h> = Box<dyn FnMut(SlotValue<'_>) + 'h>;

pub struct SelectionSession<'a, 'h> {
    controller: SelectionController<'a>,
    selected: ItineraryId,
    view: DashboardUpdate,
    handlers: Vec<(OutputSlot, SlotHandler<'h>)>,
}

impl<'a, 'h> SelectionSession<'a, 'h> {
    /// Start a session on the default itinerary.
    pub fn new(catalog: &'a Catalog) -> Self {
        let controller = SelectionController::new(catalog);
        let selected = ItineraryId::default();
        Self {
            controller,
            selected,
            view: controller.update_for(selected),
            handlers: Vec::new(),
        }
    }

    pub fn selected(&self) -> ItineraryId {
        self.selected
    }

    /// Outputs for the last valid selection.
    pub fn view(&self) -> &DashboardUpdate {
        &self.view
    }

    /// Register `handler` for `slot`. It is immediately fed the current value.
    pub fn subscribe<F>(&mut self, slot: OutputSlot, mut handler: F)
    where
        F: FnMut(SlotValue<'_>) + 'h,
    {
        handler(self.view.slot(slot));
        self.handlers.push((slot, Box::new(handler)));
    }

    /// Apply a selection coming from the dropdown.
    pub fn select(&mut self, raw: &str) -> Result<&DashboardUpdate, CatalogError> {
        let update = match self.controller.on_selection_changed(raw) {
            Ok(update) => update,
            Err(err) => {
                warn!(selection = raw, kept = %self.selected, "ignoring selection: {err}");
                return Err(err);
            }
        };
        self.selected = update.itinerary;
        self.view = update;
        for (slot, handler) in self.handlers.iter_mut() {
            handler(self.view.slot(*slot));
        }
        Ok(&self.view)
    }
}

impl fmt::Debug for SelectionSession<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionSession")
            .field("selected", &self.selected)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
