//! Page runtime logic for the DA2i dashboard.
//!
//! The dashboard server renders Plotly charts and a handful of marker
//! elements; this crate decides what the browser should do with them on
//! every tick:
//!
//! - `layout`: resize charts to the dashboard container, keep the sidebar
//!   under the navbar
//! - `url_sync`: push a path naming the displayed country into history
//! - `analytics`: page-view commands for the analytics queue
//! - `driver` / `schedule`: the fixed-period polling loop over virtual time
//! - `route`: parse dashboard paths into section and country
//!
//! Everything touches the DOM through the [`page::Page`] trait, so the whole
//! crate builds and tests natively. `da2i-web` supplies the browser
//! implementation.
//!
//! # Usage
//!
//! ```rust
//! use da2i_core::route::{DashboardPath, Section};
//! use da2i_core::url_sync::rewrite_path;
//! use da2i_core::DashboardConfig;
//!
//! let config = DashboardConfig::default();
//! let path = rewrite_path("/connectivity/Germany/summary", "France", &config);
//! assert_eq!(path, "/connectivity/France/summary");
//! assert_eq!(DashboardPath::parse(&path).section, Section::Connectivity);
//! ```

pub mod analytics;
pub mod config;
pub mod driver;
pub mod error;
pub mod layout;
pub mod page;
pub mod route;
pub mod schedule;
pub mod url_sync;

pub use config::DashboardConfig;
pub use driver::{Driver, TickReport};
pub use error::{DashError, Result};
