//! Typed wrappers around the page's JS globals.
//!
//! Plotly is loaded by the dashboard server and reached through a
//! `wasm_bindgen` import. The analytics command queue needs a real JS
//! `arguments` object, so its installer is embedded as a small script and
//! evaluated once.

use anyhow::{anyhow, Context};
use da2i_core::analytics::AnalyticsCommand;
use da2i_core::DashboardConfig;
use dioxus_logger::tracing::info;
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlScriptElement};

static ANALYTICS_QUEUE_JS: &str = include_str!("../assets/js/analytics-queue.js");

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = relayout)]
    fn plotly_relayout(graph: &Element, update: &JsValue) -> Result<JsValue, JsValue>;
}

/// Convert a thrown JS value into an `anyhow` error.
pub fn js_err(value: JsValue) -> anyhow::Error {
    match value.as_string() {
        Some(message) => anyhow!(message),
        None => anyhow!("{:?}", value),
    }
}

/// Ask Plotly to lay out `graph` at `width` pixels.
pub fn relayout_width(graph: &Element, width: i64) -> anyhow::Result<()> {
    let update = Object::new();
    Reflect::set(
        &update,
        &JsValue::from_str("width"),
        &JsValue::from_f64(width as f64),
    )
    .map_err(js_err)?;
    plotly_relayout(graph, &update)
        .map(|_| ())
        .map_err(js_err)
        .context("Plotly.relayout failed")
}

/// Install the analytics command queue, start loading the analytics script
/// and push the page-load commands. The script loads asynchronously; a
/// network failure never surfaces here.
pub fn install_analytics(document: &Document, config: &DashboardConfig) -> anyhow::Result<()> {
    let installer: Function = js_sys::eval(ANALYTICS_QUEUE_JS)
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow!("analytics queue installer is not a function"))?;
    installer
        .call1(&JsValue::NULL, &JsValue::from_str(&config.analytics_global))
        .map_err(js_err)
        .context("installing analytics queue")?;

    load_script_async(document, &config.analytics_src)?;

    for command in da2i_core::analytics::bootstrap_commands(config) {
        send_analytics_command(&config.analytics_global, &command)?;
    }
    info!("Analytics installed for {}", config.tracking_id);
    Ok(())
}

/// Call the global queue function with the command's arguments.
pub fn send_analytics_command(global: &str, command: &AnalyticsCommand) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let queue: Function = Reflect::get(&window, &JsValue::from_str(global))
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow!("window.{global} is not a function"))?;

    let args = Array::new();
    for arg in command.to_args() {
        let json = serde_json::to_string(&arg)?;
        args.push(&js_sys::JSON::parse(&json).map_err(js_err)?);
    }
    queue.apply(&JsValue::NULL, &args).map_err(js_err)?;
    Ok(())
}

/// Insert an async `<script>` before the first script on the page, or into
/// `<head>` when there is none.
fn load_script_async(document: &Document, src: &str) -> anyhow::Result<()> {
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not a script"))?;
    script.set_async(true);
    script.set_src(src);

    let first = document.get_elements_by_tag_name("script").item(0);
    match first.as_ref().and_then(|s| s.parent_node().map(|p| (s, p))) {
        Some((first, parent)) => {
            parent
                .insert_before(&script, Some(first.as_ref()))
                .map_err(js_err)?;
        }
        None => {
            let head = document.head().ok_or_else(|| anyhow!("document has no <head>"))?;
            head.append_child(&script).map_err(js_err)?;
        }
    }
    Ok(())
}
