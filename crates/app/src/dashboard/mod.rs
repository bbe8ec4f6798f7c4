//! Web dashboard that serves the itinerary page and its selection API.
//!
//! The module is split into focused submodules:
//! - `config`: CLI configuration parsing.
//! - `server`: Actix Web routes and listener bootstrap.
//! - `view`: one-shot rendering of the page skeleton.
//! - `assets`: team photo lookup with placeholder fallback.
//! - `telemetry`: tracing subscriber and Prometheus recorder.

/// Re-export server settings so callers can configure runs without reaching
/// into submodules.
pub use config::{DashboardCliArgs, DashboardConfig};
/// Launch the dashboard with a ready-made configuration.
pub use server::run;

mod assets;
mod config;
mod server;
pub(crate) mod telemetry;
mod view;
