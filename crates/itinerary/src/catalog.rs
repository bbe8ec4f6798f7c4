//! Static catalog of the three expedition routes.
//!
//! The catalog is plain `'static` data: it is built at compile time, shared by
//! reference, and never mutated. Lookups by [`ItineraryId`] are exhaustive;
//! lookups by raw string go through [`Catalog::get_itinerary`] and fail with
//! [`CatalogError::NotFound`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::types::CatalogError;

/// Identifier of one of the predefined routes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ItineraryId {
    #[default]
    #[serde(rename = "it_1")]
    It1,
    #[serde(rename = "it_2")]
    It2,
    #[serde(rename = "it_3")]
    It3,
}

impl ItineraryId {
    /// Every identifier, in dropdown order.
    pub const ALL: [ItineraryId; 3] = [ItineraryId::It1, ItineraryId::It2, ItineraryId::It3];

    pub fn as_str(self) -> &'static str {
        match self {
            ItineraryId::It1 => "it_1",
            ItineraryId::It2 => "it_2",
            ItineraryId::It3 => "it_3",
        }
    }
}

impl fmt::Display for ItineraryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItineraryId {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        ItineraryId::ALL
            .into_iter()
            .find(|id| id.as_str() == raw)
            .ok_or_else(|| CatalogError::not_found(raw))
    }
}

/// A named point on a route.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Waypoint {
    pub city: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    const fn new(city: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            city,
            latitude,
            longitude,
        }
    }
}

/// A route with its per-day distance breakdown.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Itinerary {
    pub id: ItineraryId,
    pub display_name: &'static str,
    /// Stops in travel order.
    pub waypoints: &'static [Waypoint],
    /// Kilometres ridden each day.
    pub daily_distances: &'static [u32],
    pub day_labels: &'static [&'static str],
    pub color: &'static str,
}

impl Itinerary {
    pub fn total_distance_km(&self) -> u32 {
        self.daily_distances.iter().sum()
    }

    pub fn day_count(&self) -> usize {
        self.daily_distances.len()
    }

    /// Label shown in the selection dropdown, e.g. `Itineraire 2 : Paris - Compiegne - ...`.
    pub fn dropdown_label(&self) -> String {
        let cities: Vec<&str> = self.waypoints.iter().map(|w| w.city).collect();
        format!("{} : {}", self.display_name, cities.join(" - "))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.waypoints.len() < 2 {
            return Err(CatalogError::Invalid {
                id: self.id,
                reason: format!("needs at least 2 waypoints, has {}", self.waypoints.len()),
            });
        }
        if self.day_labels.len() != self.daily_distances.len() {
            return Err(CatalogError::Invalid {
                id: self.id,
                reason: format!(
                    "{} day labels for {} daily distances",
                    self.day_labels.len(),
                    self.daily_distances.len()
                ),
            });
        }
        Ok(())
    }
}

const PARIS: Waypoint = Waypoint::new("Paris", 48.8588377, 2.2770205);
const COMPIEGNE: Waypoint = Waypoint::new("Compiegne", 49.4005952, 2.8198382);
// Reims shares Compiegne's coordinates in the published trip sheet.
const REIMS: Waypoint = Waypoint::new("Reims", 49.4005952, 2.8198382);
const CHARLEVILLE_MEZIERES: Waypoint = Waypoint::new("Charleville-Mézières", 49.7801824, 4.6603386);
const CHARLEROI: Waypoint = Waypoint::new("Charleroi", 50.422914, 4.3575706);
const BRUXELLES: Waypoint = Waypoint::new("Bruxelles", 50.8549541, 4.3053506);
const ST_QUENTIN: Waypoint = Waypoint::new("St-Quentin", 49.8476282, 3.2440442);
const MONS: Waypoint = Waypoint::new("Mons", 50.445754, 3.8996656);
const MAUBEUGE: Waypoint = Waypoint::new("Maubeuge", 50.2834202, 3.9260861);

const FIVE_DAYS: &[&str] = &["J1", "J2", "J3", "J4", "J5"];
const FOUR_DAYS: &[&str] = &["J1", "J2", "J3", "J4"];

static BUILTIN: Catalog = Catalog {
    entries: [
        Itinerary {
            id: ItineraryId::It1,
            display_name: "Itineraire 1",
            waypoints: &[PARIS, COMPIEGNE, REIMS, CHARLEVILLE_MEZIERES, CHARLEROI, BRUXELLES],
            daily_distances: &[85, 100, 85, 90, 75],
            day_labels: FIVE_DAYS,
            color: "red",
        },
        Itinerary {
            id: ItineraryId::It2,
            display_name: "Itineraire 2",
            waypoints: &[PARIS, COMPIEGNE, ST_QUENTIN, MONS, BRUXELLES],
            daily_distances: &[85, 70, 95, 70],
            day_labels: FOUR_DAYS,
            color: "green",
        },
        Itinerary {
            id: ItineraryId::It3,
            display_name: "Itineraire 3",
            waypoints: &[PARIS, COMPIEGNE, ST_QUENTIN, MAUBEUGE, BRUXELLES],
            daily_distances: &[85, 70, 80, 90],
            day_labels: FOUR_DAYS,
            color: "yellow",
        },
    ],
};

/// Read-only mapping from [`ItineraryId`] to [`Itinerary`].
#[derive(Debug)]
pub struct Catalog {
    entries: [Itinerary; 3],
}

impl Catalog {
    /// The process-wide catalog.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn get(&self, id: ItineraryId) -> &Itinerary {
        match id {
            ItineraryId::It1 => &self.entries[0],
            ItineraryId::It2 => &self.entries[1],
            ItineraryId::It3 => &self.entries[2],
        }
    }

    /// Look up an itinerary by its wire identifier.
    pub fn get_itinerary(&self, raw: &str) -> Result<&Itinerary, CatalogError> {
        let id: ItineraryId = raw.parse()?;
        Ok(self.get(id))
    }

    /// Itineraries in dropdown order.
    pub fn iter(&self) -> impl Iterator<Item = &Itinerary> {
        ItineraryId::ALL.into_iter().map(|id| self.get(id))
    }

    /// Check the per-entry invariants; run once at startup.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for itinerary in self.iter() {
            itinerary.validate()?;
        }
        Ok(())
    }
}
