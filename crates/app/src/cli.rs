use anyhow::Result;
use clap::Parser;

use crate::dashboard::{self, DashboardCliArgs, DashboardConfig};

/// Parse the process arguments and serve the dashboard until shutdown.
pub fn run_from_env() -> Result<()> {
    let args = DashboardCliArgs::parse();
    let config = DashboardConfig::try_from(args)?;
    dashboard::run(config)
}
