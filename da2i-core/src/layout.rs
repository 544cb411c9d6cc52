//! Chart resizing.
//!
//! Plotly charts rendered by the dashboard server do not follow their
//! container when the viewport changes, so each tick compares every chart's
//! rendered width against a target derived from the dashboard container and
//! asks Plotly to relayout the ones that are off.

use std::collections::HashMap;

use log::{debug, info};

use crate::config::DashboardConfig;
use crate::page::Page;

/// Round to the nearest pixel with halves going up, as browsers round
/// (`-100.5` becomes `-100`).
fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Target chart width: container width minus a tenth (by default) of the
/// viewport, rounded to the nearest pixel.
pub fn target_width(container_width: f64, viewport_width: f64, divisor: u32) -> i64 {
    round_half_up(container_width - viewport_width / f64::from(divisor))
}

/// Last width recorded for each chart, keyed by the chart's DOM position.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResizeCache {
    widths: HashMap<usize, i64>,
}

impl ResizeCache {
    pub fn get(&self, index: usize) -> Option<i64> {
        self.widths.get(&index).copied()
    }

    pub fn record(&mut self, index: usize, width: i64) {
        self.widths.insert(index, width);
    }

    pub fn clear(&mut self) {
        self.widths.clear();
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

/// Resizer state carried between ticks.
#[derive(Debug, Default, Clone)]
pub struct ResizeState {
    pub cache: ResizeCache,
    /// Country indicator source seen on the previous tick
    pub last_country_src: Option<String>,
}

/// What one resizer pass did.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResizeReport {
    /// Target width, if the container and viewport could be measured
    pub target: Option<i64>,
    /// Indices of the charts that were relaid out
    pub relaid_out: Vec<usize>,
    pub cache_cleared: bool,
    pub sidebar_top: Option<f64>,
}

/// Run one resizer pass against `page`.
pub fn handle_resize<P: Page>(
    page: &mut P,
    state: &mut ResizeState,
    config: &DashboardConfig,
) -> ResizeReport {
    let selectors = &config.selectors;
    let mut report = ResizeReport::default();

    if let Some(src) = page.country_icon_src(selectors) {
        if state.last_country_src.as_deref() != Some(src.as_str()) {
            if !state.cache.is_empty() {
                info!("Country indicator changed to {src}, clearing resize cache");
            }
            state.cache.clear();
            report.cache_cleared = true;
        }
        state.last_country_src = Some(src);
    }

    if let Some(height) = page.navbar_height(selectors) {
        if page.set_sidebar_top(selectors, height) {
            report.sidebar_top = Some(height);
        }
    }

    let (Some(container), Some(viewport)) =
        (page.container_width(selectors), page.viewport_width())
    else {
        return report;
    };
    let target = target_width(container, viewport, config.width_divisor);
    report.target = Some(target);

    for (index, width) in page.chart_widths(selectors).into_iter().enumerate() {
        let current = round_half_up(width);
        if current == target || state.cache.get(index) == Some(current) {
            continue;
        }
        debug!("Relayout chart {index}: {current}px -> {target}px");
        state.cache.record(index, current);
        page.relayout_chart(selectors, index, target);
        report.relaid_out.push(index);
    }

    report
}
