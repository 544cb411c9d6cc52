//! Browser runtime for the DA2i dashboard.
//!
//! Loaded next to the server-rendered dashboard page. On DOM-ready it
//! installs page-view analytics, then resizes Plotly charts and keeps the
//! URL naming the displayed country, once immediately and every tick after.
//!
//! - `dom`: [`da2i_core::page::Page`] over `web-sys`
//! - `js_bridge`: Plotly and analytics-queue interop

pub mod dom;
pub mod js_bridge;

use std::cell::RefCell;
use std::rc::Rc;

use da2i_core::{DashboardConfig, Driver};
use dioxus_logger::tracing::{error, info, warn};
use gloo_timers::callback::Interval;
use js_sys::Reflect;
use wasm_bindgen::prelude::*;

use crate::dom::WebPage;

/// Global a page can set to override any config field.
const CONFIG_GLOBAL: &str = "__da2iConfig";

/// Forward `log` records (used by `da2i-core`) into `tracing`, which
/// `dioxus-logger` sends to the browser console. Fails if a logger is
/// already installed.
pub fn install_log_bridge() -> Result<(), log::SetLoggerError> {
    tracing_log::LogTracer::init()
}

#[wasm_bindgen(start)]
pub fn main() {
    let _ = install_log_bridge();
    let _ = dioxus_logger::init(dioxus_logger::tracing::Level::INFO);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("No document, dashboard runtime not started");
        return;
    };

    if document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(start);
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            warn!("Could not wait for DOMContentLoaded: {:#}", js_bridge::js_err(e));
        }
    } else {
        start();
    }
}

fn start() {
    if let Err(e) = run(read_config()) {
        error!("Dashboard runtime failed to start: {e:#}");
    }
}

/// Read `window.__da2iConfig`, falling back to defaults when absent or invalid.
fn read_config() -> DashboardConfig {
    let Some(window) = web_sys::window() else {
        return DashboardConfig::default();
    };
    let value = match Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return DashboardConfig::default(),
    };

    let json = match js_sys::JSON::stringify(&value) {
        Ok(json) => String::from(json),
        Err(e) => {
            warn!("Unreadable {CONFIG_GLOBAL}: {:#}", js_bridge::js_err(e));
            return DashboardConfig::default();
        }
    };
    DashboardConfig::from_json(&json).unwrap_or_else(|e| {
        warn!("Ignoring {CONFIG_GLOBAL}: {e}");
        DashboardConfig::default()
    })
}

/// Install analytics, run the first tick and start the interval. The
/// interval lives for the rest of the page.
pub fn run(config: DashboardConfig) -> anyhow::Result<()> {
    let mut page = WebPage::new()?;

    if let Err(e) = js_bridge::install_analytics(page.document(), &config) {
        warn!("Analytics not installed: {e:#}");
    }

    let mut driver = Driver::new(config);
    driver.start(&mut page, now_ms());
    let period = driver.config().tick_interval_ms;
    info!("Dashboard runtime started, ticking every {period}ms");

    let runtime = Rc::new(RefCell::new((driver, page)));
    Interval::new(period, move || {
        let mut guard = runtime.borrow_mut();
        let (driver, page) = &mut *guard;
        driver.advance_to(page, now_ms());
    })
    .forget();

    Ok(())
}

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
