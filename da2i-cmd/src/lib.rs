//! Command implementations for the DA2i CLI.
//!
//! Each subcommand runs one of the page runtime's decisions on values copied
//! out of a rendered page, so markup problems can be checked without a
//! browser.

use std::path::Path;

use anyhow::Context;
use clap::Subcommand;
use da2i_core::DashboardConfig;

pub mod inspect;

#[derive(Subcommand)]
pub enum Command {
    /// Print the width charts are resized to
    Width {
        /// Rendered width of the dashboard container, in pixels
        #[arg(short = 'c', long)]
        container: f64,

        /// Viewport width (window.innerWidth), in pixels
        #[arg(short = 'v', long)]
        viewport: f64,
    },

    /// Print the path the URL synchronizer would push
    SyncPath {
        /// Text of the country name element
        #[arg(long)]
        country: String,

        /// Text of the path template element
        #[arg(short = 't', long)]
        template: String,

        /// Current location.pathname
        #[arg(long, default_value = "/")]
        current: String,
    },

    /// Show how a path is routed by the dashboard
    Route {
        /// URL path, e.g. /gender/Burkina+Faso/summary
        path: String,
    },

    /// Print the analytics commands sent on page load, one JSON array per line
    Analytics,
}

/// Load a JSON config file, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    let Some(path) = path else {
        return Ok(DashboardConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = DashboardConfig::from_json(&json)
        .with_context(|| format!("parsing config {}", path.display()))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn run(command: Command, config: &DashboardConfig) -> anyhow::Result<()> {
    let output = match command {
        Command::Width {
            container,
            viewport,
        } => inspect::width(container, viewport, config),
        Command::SyncPath {
            country,
            template,
            current,
        } => inspect::sync_path(&country, &template, &current, config),
        Command::Route { path } => inspect::route(&path),
        Command::Analytics => inspect::analytics(config)?,
    };
    println!("{output}");
    Ok(())
}
