//! `Page` over the live browser DOM.

use anyhow::anyhow;
use da2i_core::config::Selectors;
use da2i_core::page::Page;
use dioxus_logger::tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

use crate::js_bridge;

pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("not running in a browser window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("window has no document"))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn html_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn charts(&self, selectors: &Selectors) -> Vec<Element> {
        let collection = self
            .document
            .get_elements_by_class_name(&selectors.chart_widget);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }
}

impl Page for WebPage {
    fn container_width(&self, selectors: &Selectors) -> Option<f64> {
        self.document
            .get_elements_by_class_name(&selectors.dashboard_container)
            .item(0)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| f64::from(el.offset_width()))
    }

    fn viewport_width(&self) -> Option<f64> {
        self.window.inner_width().ok().and_then(|w| w.as_f64())
    }

    fn chart_widths(&self, selectors: &Selectors) -> Vec<f64> {
        self.charts(selectors)
            .into_iter()
            .map(|el| match el.dyn_into::<HtmlElement>() {
                Ok(html) => f64::from(html.offset_width()),
                Err(el) => f64::from(el.client_width()),
            })
            .collect()
    }

    fn relayout_chart(&mut self, selectors: &Selectors, index: usize, width: i64) {
        let Some(graph) = self.charts(selectors).into_iter().nth(index) else {
            return;
        };
        if let Err(e) = js_bridge::relayout_width(&graph, width) {
            warn!("Chart {index} relayout failed: {e:#}");
        }
    }

    fn country_icon_src(&self, selectors: &Selectors) -> Option<String> {
        let el = self.document.get_element_by_id(&selectors.country_icon)?;
        match el.dyn_into::<HtmlImageElement>() {
            Ok(img) => Some(img.src()),
            Err(el) => el.get_attribute("src"),
        }
    }

    fn navbar_height(&self, selectors: &Selectors) -> Option<f64> {
        self.html_by_id(&selectors.navbar)
            .map(|el| f64::from(el.offset_height()))
    }

    fn set_sidebar_top(&mut self, selectors: &Selectors, top_px: f64) -> bool {
        let Some(sidebar) = self.html_by_id(&selectors.sidebar) else {
            return false;
        };
        if let Err(e) = sidebar
            .style()
            .set_property("top", &format!("{top_px}px"))
        {
            warn!("Setting sidebar offset failed: {:#}", js_bridge::js_err(e));
            return false;
        }
        true
    }

    fn text_by_id(&self, id: &str) -> Option<String> {
        self.document.get_element_by_id(id)?.text_content()
    }

    fn current_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn push_path(&mut self, path: &str) {
        let result = self
            .window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)));
        if let Err(e) = result {
            warn!("pushState to {path} failed: {:#}", js_bridge::js_err(e));
        }
    }
}
