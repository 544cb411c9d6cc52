//! Runtime configuration.
//!
//! Every identifier and constant the page runtime depends on lives here, so a
//! page can override any of them with a partial JSON object. Missing fields
//! fall back to the defaults the DA2i dashboard ships with.

use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

/// Default analytics tracking id.
pub const DEFAULT_TRACKING_ID: &str = "UA-163732445-1";
/// Default analytics loader script.
pub const DEFAULT_ANALYTICS_SRC: &str = "//www.google-analytics.com/analytics.js";
/// Section written into the URL when the template's first segment is too short.
pub const DEFAULT_SECTION: &str = "connectivity";

/// DOM names the runtime reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Class of the element bounding the charts (first match is used)
    pub dashboard_container: String,
    /// Class shared by every Plotly chart widget
    pub chart_widget: String,
    /// Id of the `<img>` showing the selected country
    pub country_icon: String,
    pub sidebar: String,
    pub navbar: String,
    /// Id of the element whose text is the displayed country name
    pub country_name: String,
    /// Id of the element whose text is the path template
    pub path_template: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            dashboard_container: "dashboard-container".to_string(),
            chart_widget: "js-plotly-plot".to_string(),
            country_icon: "country-icon".to_string(),
            sidebar: "sidebar".to_string(),
            navbar: "navbar".to_string(),
            country_name: "countrynameWrap".to_string(),
            path_template: "pathnameWrap".to_string(),
        }
    }
}

/// Configuration for the dashboard page runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub tracking_id: String,
    pub cookie_domain: String,
    pub anonymize_ip: bool,
    pub analytics_src: String,
    /// Name of the global command queue function installed on `window`
    pub analytics_global: String,
    /// Period between ticks, in milliseconds
    pub tick_interval_ms: u32,
    /// Chart target width is the container width minus viewport width / divisor
    pub width_divisor: u32,
    /// Country names shorter than this are treated as "not yet loaded"
    pub min_country_len: usize,
    /// First path segments shorter than this are replaced by `default_section`
    pub min_section_len: usize,
    pub default_section: String,
    pub selectors: Selectors,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            tracking_id: DEFAULT_TRACKING_ID.to_string(),
            cookie_domain: "auto".to_string(),
            anonymize_ip: true,
            analytics_src: DEFAULT_ANALYTICS_SRC.to_string(),
            analytics_global: "ga".to_string(),
            tick_interval_ms: 1000,
            width_divisor: 10,
            min_country_len: 5,
            min_section_len: 5,
            default_section: DEFAULT_SECTION.to_string(),
            selectors: Selectors::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would stall the schedule or break the width math.
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(invalid("tick_interval_ms", "must be greater than zero"));
        }
        if self.width_divisor == 0 {
            return Err(invalid("width_divisor", "must be greater than zero"));
        }
        if self.default_section.is_empty() {
            return Err(invalid("default_section", "must not be empty"));
        }
        if self.analytics_global.is_empty() {
            return Err(invalid("analytics_global", "must not be empty"));
        }

        let s = &self.selectors;
        let names = [
            ("selectors.dashboard_container", &s.dashboard_container),
            ("selectors.chart_widget", &s.chart_widget),
            ("selectors.country_icon", &s.country_icon),
            ("selectors.sidebar", &s.sidebar),
            ("selectors.navbar", &s.navbar),
            ("selectors.country_name", &s.country_name),
            ("selectors.path_template", &s.path_template),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(invalid(field, "must not be empty"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &str) -> DashError {
    DashError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard() {
        let config = DashboardConfig::default();
        assert_eq!(config.tracking_id, "UA-163732445-1");
        assert_eq!(config.tick_interval_ms, 1000);
        assert_eq!(config.width_divisor, 10);
        assert_eq!(config.min_country_len, 5);
        assert_eq!(config.default_section, "connectivity");
        assert_eq!(config.selectors.chart_widget, "js-plotly-plot");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{"tracking_id": "UA-1-1", "selectors": {"navbar": "top-bar"}}"#;
        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.tracking_id, "UA-1-1");
        assert_eq!(config.selectors.navbar, "top-bar");
        assert_eq!(config.selectors.sidebar, "sidebar");
        assert_eq!(config.tick_interval_ms, 1000);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = DashboardConfig::from_json(r#"{"tick_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(
            err,
            DashError::InvalidConfig {
                field: "tick_interval_ms",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_selector_rejected() {
        let err = DashboardConfig::from_json(r#"{"selectors": {"sidebar": " "}}"#).unwrap_err();
        assert!(err.to_string().contains("selectors.sidebar"));
    }

    #[test]
    fn test_malformed_json() {
        let err = DashboardConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, DashError::ConfigParse(_)));
    }
}
