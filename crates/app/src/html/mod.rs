//! Embedded page assets served with the dashboard.
//!
//! The stylesheet and page script are kept as `&'static str` so they can be
//! bundled directly inside the binary without filesystem lookups.

pub mod dashboard;
