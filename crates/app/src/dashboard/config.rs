//! Configuration parsing for the dashboard server.
//!
//! CLI arguments are translated once into a [`DashboardConfig`]; every option
//! has a default so a bare invocation serves on port 8050.

use std::{net::IpAddr, path::PathBuf};

use anyhow::{Result, bail};
use clap::Parser;

pub const DEFAULT_PORT: u16 = 8050;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Settings shared by the server and the asset loader.
pub struct DashboardConfig {
    /// Interface the listener binds to.
    pub bind: IpAddr,
    /// Listening port.
    pub port: u16,
    /// Directory holding `team/<name>.png` photos.
    pub assets_dir: PathBuf,
}

/// Command line accepted by the `bike-expedition` binary.
#[derive(Debug, Parser)]
#[command(name = "bike-expedition", about = "Bike expedition itinerary dashboard")]
pub struct DashboardCliArgs {
    /// Listening port.
    #[arg(long, env = "DASHBOARD_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Interface to bind.
    #[arg(long, default_value = "0.0.0.0", value_name = "ADDR")]
    pub bind: IpAddr,
    /// Static asset directory.
    #[arg(long = "assets-dir", default_value = "assets", value_name = "PATH")]
    pub assets_dir: PathBuf,
}

impl TryFrom<DashboardCliArgs> for DashboardConfig {
    type Error = anyhow::Error;

    fn try_from(args: DashboardCliArgs) -> Result<Self> {
        if args.port == 0 {
            bail!("--port must be between 1 and 65535");
        }
        if args.assets_dir.as_os_str().is_empty() {
            bail!("--assets-dir must not be empty");
        }
        Ok(Self {
            bind: args.bind,
            port: args.port,
            assets_dir: args.assets_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;

    fn parse(args: &[&str]) -> Result<DashboardConfig> {
        let argv = std::iter::once("bike-expedition").chain(args.iter().copied());
        let args = DashboardCliArgs::try_parse_from(argv)?;
        DashboardConfig::try_from(args)
    }

    #[test]
    fn defaults_serve_on_8050() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.bind, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn flags_override_defaults() {
        let config = parse(&[
            "--port",
            "9000",
            "--bind",
            "127.0.0.1",
            "--assets-dir",
            "/srv/assets",
        ])
        .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.bind, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.assets_dir, PathBuf::from("/srv/assets"));
    }

    #[test]
    fn rejects_port_zero() {
        assert!(parse(&["--port", "0"]).is_err());
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(parse(&["--verbose"]).is_err());
    }
}
