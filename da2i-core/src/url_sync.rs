//! Keep the browser URL in step with the displayed country.
//!
//! The dashboard server renders the selected country name and a path
//! template into hidden elements. When the visible URL does not mention that
//! country yet, a new path is built from the template and pushed into history
//! so the page can be bookmarked or shared.

use log::{debug, info};

use crate::config::DashboardConfig;
use crate::page::Page;
use crate::route::{decode_separators, encode_separators, DashboardPath};

/// What one synchronizer pass did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlSync {
    /// Country or template element is not on the page
    MissingElements,
    /// Country name is too short to be a loaded value
    NotReady,
    /// The current path already names the country
    AlreadyCurrent,
    Pushed(String),
}

/// Whether `path` already names `country`, ignoring case, reading `+` as a
/// space and percent-decoding the path.
pub fn path_mentions_country(path: &str, country: &str) -> bool {
    let path = decode_separators(path).to_lowercase();
    let country = decode_separators(country).to_lowercase();
    path.contains(&country)
}

/// Build the path for `country` from the server's path template.
pub fn rewrite_path(template: &str, country: &str, config: &DashboardConfig) -> String {
    let mut segments: Vec<String> = template.split('/').map(str::to_string).collect();
    if segments.len() < 3 {
        segments.resize(3, String::new());
    }
    if segments[1].chars().count() < config.min_section_len {
        segments[1] = config.default_section.clone();
    }
    segments[2] = encode_separators(country);
    segments.join("/")
}

/// Decide what the URL should become for the given page text, without
/// touching the page.
pub fn plan_sync(country: &str, template: &str, current: &str, config: &DashboardConfig) -> UrlSync {
    if country.chars().count() < config.min_country_len {
        return UrlSync::NotReady;
    }
    if path_mentions_country(current, country) {
        debug!("Path {current} already names {country}");
        return UrlSync::AlreadyCurrent;
    }
    UrlSync::Pushed(rewrite_path(template, country, config))
}

/// Run one synchronizer pass against `page`.
pub fn sync_url<P: Page>(page: &mut P, config: &DashboardConfig) -> UrlSync {
    let selectors = &config.selectors;
    let (Some(country), Some(template)) = (
        page.text_by_id(&selectors.country_name),
        page.text_by_id(&selectors.path_template),
    ) else {
        return UrlSync::MissingElements;
    };

    let outcome = plan_sync(&country, &template, &page.current_path(), config);
    if let UrlSync::Pushed(path) = &outcome {
        let route = DashboardPath::parse(path);
        info!("Updating url to {path} ({} / {country})", route.section);
        page.push_path(path);
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::FakePage;

    #[test]
    fn test_pushes_country_path() {
        let config = DashboardConfig::default();
        let mut page = FakePage::dashboard(&[]).with_country("France", "/connectivity/Germany/summary");
        page.path = "/connectivity/Germany/summary".to_string();

        let outcome = sync_url(&mut page, &config);
        assert_eq!(
            outcome,
            UrlSync::Pushed("/connectivity/France/summary".to_string())
        );
        assert_eq!(page.pushes, vec!["/connectivity/France/summary".to_string()]);

        // Next tick sees the pushed path and leaves it alone
        assert_eq!(sync_url(&mut page, &config), UrlSync::AlreadyCurrent);
        assert_eq!(page.pushes.len(), 1);
    }

    #[test]
    fn test_short_country_not_ready() {
        let config = DashboardConfig::default();
        let mut page = FakePage::dashboard(&[]).with_country("Chad", "/connectivity/Germany");
        assert_eq!(sync_url(&mut page, &config), UrlSync::NotReady);
        assert!(page.pushes.is_empty());
    }

    #[test]
    fn test_missing_elements() {
        let config = DashboardConfig::default();
        let mut page = FakePage::dashboard(&[]);
        assert_eq!(sync_url(&mut page, &config), UrlSync::MissingElements);
    }

    #[test]
    fn test_short_section_replaced() {
        let config = DashboardConfig::default();
        assert_eq!(
            rewrite_path("/abc/Germany/summary", "France", &config),
            "/connectivity/France/summary"
        );
        assert_eq!(
            rewrite_path("/gender/Germany", "France", &config),
            "/gender/France"
        );
    }

    #[test]
    fn test_short_template_padded() {
        let config = DashboardConfig::default();
        assert_eq!(rewrite_path("/", "France", &config), "/connectivity/France");
        assert_eq!(rewrite_path("", "France", &config), "/connectivity/France");
    }

    #[test]
    fn test_multi_word_country() {
        let config = DashboardConfig::default();
        assert_eq!(
            rewrite_path("/freedom/Germany/summary", "Papua New Guinea", &config),
            "/freedom/Papua+New+Guinea/summary"
        );

        let mut page = FakePage::dashboard(&[]).with_country("Burkina Faso", "/connectivity/Mali");
        page.path = "/connectivity/Burkina+Faso".to_string();
        assert_eq!(sync_url(&mut page, &config), UrlSync::AlreadyCurrent);
    }

    #[test]
    fn test_plan_without_page() {
        let config = DashboardConfig::default();
        assert_eq!(
            plan_sync("France", "/about/Germany", "/about/Germany", &config),
            UrlSync::Pushed("/about/France".to_string())
        );
        assert_eq!(
            plan_sync("France", "/about/Germany", "/about/france", &config),
            UrlSync::AlreadyCurrent
        );
        assert_eq!(plan_sync("", "/about/Germany", "/", &config), UrlSync::NotReady);
    }

    #[test]
    fn test_non_ascii_country_pushed_once() {
        let config = DashboardConfig::default();
        let mut page = FakePage::dashboard(&[]).with_country("Côte d'Ivoire", "/connectivity/Ghana");

        assert_eq!(
            sync_url(&mut page, &config),
            UrlSync::Pushed("/connectivity/Côte+d'Ivoire".to_string())
        );
        // The browser reports the pushed path percent-encoded
        assert_eq!(page.path, "/connectivity/C%C3%B4te+d'Ivoire");
        assert_eq!(sync_url(&mut page, &config), UrlSync::AlreadyCurrent);
        assert_eq!(page.pushes.len(), 1);
    }

    #[test]
    fn test_mentions_ignores_case_and_separators() {
        assert!(path_mentions_country("/connectivity/FRANCE/summary", "France"));
        assert!(path_mentions_country("/connectivity/United%20States", "United States"));
        assert!(path_mentions_country("/connectivity/R%C3%A9union", "Réunion"));
        assert!(!path_mentions_country("/connectivity/Germany", "France"));
    }
}
