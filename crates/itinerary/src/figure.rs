//! Serializable subset of the Plotly figure schema.
//!
//! Figures are handed to `Plotly.react` in the browser unchanged, so field
//! names follow Plotly's JSON spelling.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Bar(BarTrace),
    Scattermapbox(MapTrace),
}

impl Trace {
    /// Number of plotted points.
    pub fn len(&self) -> usize {
        match self {
            Trace::Bar(bar) => bar.y.len(),
            Trace::Scattermapbox(map) => map.lat.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MapTrace {
    pub mode: &'static str,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    /// Hover text, one entry per point.
    pub text: Vec<String>,
    pub marker: Marker,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub size: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mapbox: Option<Mapbox>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub t: u32,
    pub b: u32,
    pub r: u32,
}

impl Margin {
    pub const ZERO: Margin = Margin {
        l: 0,
        t: 0,
        b: 0,
        r: 0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Mapbox {
    pub style: &'static str,
    pub zoom: u8,
    pub center: LatLon,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}
