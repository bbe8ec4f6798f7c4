//! Static page assembly.
//!
//! The dashboard page is rendered once at startup from the catalog. The
//! initial outputs for the default selection are written into the KPI slots
//! and embedded as JSON so the first paint needs no round trip; later
//! selections are fetched by the page script.

use std::fmt::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use itinerary::{Catalog, DashboardUpdate, Kpi, OutputSlot, SelectionSession, SlotValue};

use crate::{
    dashboard::assets::team_photo_url,
    html::dashboard::{DASHBOARD_SCRIPT, DASHBOARD_STYLE},
};

pub(crate) const PAGE_TITLE: &str = "Bike Expedition";
pub(crate) const HEADLINE: &str =
    "Bike expedition 🚴‍♀️ - Discover the Northern-East France with us !";
pub(crate) const MORE_INFO_URL: &str = "https://docs.google.com/spreadsheets/d/1fMUApe4lpArK-PGnJKkm4WZqVGBmL3o9OVT5d2t2bbY/edit#gid=0";
pub(crate) const TEAM: [&str; 7] = [
    "Gabriel", "Sophie", "Zhe", "Ines", "Romain", "Jordan", "Thibaud",
];
const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Dates the expedition runs, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TripWindow {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

impl TripWindow {
    pub(crate) fn expedition() -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(2020, 8, 24).context("invalid trip start date")?;
        let end = NaiveDate::from_ymd_opt(2020, 8, 28).context("invalid trip end date")?;
        Ok(Self { start, end })
    }

    pub(crate) fn caption(&self) -> String {
        format!(
            "From {} to {}, with our full team",
            self.start.format("%Y/%m/%d"),
            self.end.format("%Y/%m/%d")
        )
    }
}

/// Render the complete dashboard document.
pub(crate) fn render_page(catalog: &Catalog, window: &TripWindow) -> Result<String> {
    let session = SelectionSession::new(catalog);
    let mut page = String::with_capacity(8 * 1024);

    write!(
        page,
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width" />
  <title>{title}</title>
  <style>{style}</style>
  <script src="{plotly}" charset="utf-8"></script>
</head>
<body>
  <div class="header">
    <h1 class="header__text">{headline}</h1>
    <span>{caption}</span>
  </div>
  <section>
"#,
        title = escape(PAGE_TITLE),
        style = DASHBOARD_STYLE,
        plotly = PLOTLY_CDN,
        headline = escape(HEADLINE),
        caption = escape(&window.caption()),
    )?;

    render_team(&mut page)?;
    render_selector(&mut page, catalog, session.selected().as_str())?;
    render_slots(&mut page, session.view())?;

    let initial =
        serde_json::to_string(session.view()).context("failed to encode initial view")?;
    write!(
        page,
        r#"  </section>
  <script type="application/json" id="initial-selection">{initial}</script>
  <script>{script}</script>
</body>
</html>
"#,
        initial = initial.replace("</", "<\\/"),
        script = DASHBOARD_SCRIPT,
    )?;

    Ok(page)
}

fn render_team(page: &mut String) -> Result<()> {
    page.push_str("    <div id=\"platforms_links\">\n");
    for name in TEAM {
        writeln!(
            page,
            r#"      <div class="teammate"><img src="{src}" width="40" height="40" alt="{name}" /><span>{name}</span></div>"#,
            src = escape(&team_photo_url(name)),
            name = escape(name),
        )?;
    }
    page.push_str("    </div>\n");
    Ok(())
}

fn render_selector(page: &mut String, catalog: &Catalog, selected: &str) -> Result<()> {
    writeln!(
        page,
        r#"    <br />
    <p>Let's discover our multiple itineraries <a href="{url}">(More here)</a></p>
    <select id="itinerary-dropdown">"#,
        url = escape(MORE_INFO_URL),
    )?;
    for itinerary in catalog.iter() {
        let value = itinerary.id.as_str();
        let marker = if value == selected { " selected" } else { "" };
        writeln!(
            page,
            r#"      <option value="{value}"{marker}>{label}</option>"#,
            label = escape(&itinerary.dropdown_label()),
        )?;
    }
    page.push_str("    </select>\n");
    Ok(())
}

fn render_slots(page: &mut String, view: &DashboardUpdate) -> Result<()> {
    page.push_str("    <div id=\"kpis\">\n");
    for slot in [OutputSlot::TotalDistance, OutputSlot::DayCount] {
        if let SlotValue::Kpi(kpi) = view.slot(slot) {
            writeln!(
                page,
                r#"      <div id="{id}" class="mini_container">{body}</div>"#,
                id = slot.element_id(),
                body = kpi_html(kpi),
            )?;
        }
    }
    page.push_str("    </div>\n    <div id=\"graph_line\">\n");
    for slot in [OutputSlot::RouteMap, OutputSlot::DistanceChart] {
        writeln!(
            page,
            r#"      <div id="{id}" class="graph"></div>"#,
            id = slot.element_id()
        )?;
    }
    page.push_str("    </div>\n");
    Ok(())
}

fn kpi_html(kpi: &Kpi) -> String {
    format!(" {}<br />{}", escape(kpi.label), kpi.value)
}

/// Minimal HTML text/attribute escaping.
pub(crate) fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
