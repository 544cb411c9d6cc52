use da2i_core::analytics::bootstrap_commands;
use da2i_core::layout::target_width;
use da2i_core::route::DashboardPath;
use da2i_core::url_sync::{plan_sync, UrlSync};
use da2i_core::DashboardConfig;

pub fn width(container: f64, viewport: f64, config: &DashboardConfig) -> String {
    target_width(container, viewport, config.width_divisor).to_string()
}

pub fn sync_path(country: &str, template: &str, current: &str, config: &DashboardConfig) -> String {
    match plan_sync(country, template, current, config) {
        UrlSync::Pushed(path) => path,
        UrlSync::AlreadyCurrent => format!("unchanged: {current} already names {country}"),
        UrlSync::NotReady => format!(
            "unchanged: country name {country:?} is shorter than {} characters",
            config.min_country_len
        ),
        UrlSync::MissingElements => "unchanged: page elements missing".to_string(),
    }
}

pub fn route(path: &str) -> String {
    let parsed = DashboardPath::parse(path);
    let mut lines = vec![format!("section: {}", parsed.section)];
    if let Some(country) = parsed.country {
        lines.push(format!("country: {country}"));
    }
    if !parsed.rest.is_empty() {
        lines.push(format!("rest:    {}", parsed.rest.join("/")));
    }
    lines.join("\n")
}

pub fn analytics(config: &DashboardConfig) -> anyhow::Result<String> {
    let lines = bootstrap_commands(config)
        .iter()
        .map(|command| serde_json::to_string(&command.to_args()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}
