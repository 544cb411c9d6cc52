//! The DOM surface the runtime touches each tick.
//!
//! The browser build implements [`Page`] over `web-sys`; tests implement it
//! over plain vectors. Every read returns `Option` because any element can be
//! absent while the dashboard server is still rendering.

use crate::config::Selectors;

pub trait Page {
    /// Rendered width of the first dashboard container.
    fn container_width(&self, selectors: &Selectors) -> Option<f64>;

    /// `window.innerWidth`.
    fn viewport_width(&self) -> Option<f64>;

    /// Rendered widths of every chart widget, in DOM order.
    fn chart_widths(&self, selectors: &Selectors) -> Vec<f64>;

    /// Ask the charting library to lay out the chart at `index` at `width` pixels.
    fn relayout_chart(&mut self, selectors: &Selectors, index: usize, width: i64);

    /// Image source of the country indicator.
    fn country_icon_src(&self, selectors: &Selectors) -> Option<String>;

    fn navbar_height(&self, selectors: &Selectors) -> Option<f64>;

    /// Set the sidebar's `top` style. Returns false when the sidebar is absent.
    fn set_sidebar_top(&mut self, selectors: &Selectors, top_px: f64) -> bool;

    /// Text content of the element with the given id.
    fn text_by_id(&self, id: &str) -> Option<String>;

    /// `location.pathname`.
    fn current_path(&self) -> String;

    /// `history.pushState` without navigation.
    fn push_path(&mut self, path: &str);
}
