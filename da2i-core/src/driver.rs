//! The polling loop: one resize pass and one URL pass per tick.

use crate::config::DashboardConfig;
use crate::layout::{handle_resize, ResizeReport, ResizeState};
use crate::page::Page;
use crate::schedule::IntervalSchedule;
use crate::url_sync::{sync_url, UrlSync};

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub resize: ResizeReport,
    pub url: UrlSync,
}

/// Owns the state carried between ticks.
#[derive(Debug, Clone)]
pub struct Driver {
    config: DashboardConfig,
    state: ResizeState,
    schedule: IntervalSchedule,
    ticks: u64,
}

impl Driver {
    pub fn new(config: DashboardConfig) -> Self {
        let schedule = IntervalSchedule::new(u64::from(config.tick_interval_ms));
        Self {
            config,
            state: ResizeState::default(),
            schedule,
            ticks: 0,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn state(&self) -> &ResizeState {
        &self.state
    }

    /// Total ticks run since construction.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run the first tick right away and start the period at `now_ms`.
    pub fn start<P: Page>(&mut self, page: &mut P, now_ms: u64) -> TickReport {
        let report = self.tick(page);
        self.schedule.arm(now_ms);
        report
    }

    /// Run every tick that has come due by `now_ms`. Returns how many ran.
    pub fn advance_to<P: Page>(&mut self, page: &mut P, now_ms: u64) -> u32 {
        let due = self.schedule.take_due(now_ms);
        for _ in 0..due {
            self.tick(page);
        }
        due
    }

    pub fn tick<P: Page>(&mut self, page: &mut P) -> TickReport {
        self.ticks += 1;
        let resize = handle_resize(page, &mut self.state, &self.config);
        let url = sync_url(page, &self.config);
        TickReport { resize, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::fake::FakePage;

    #[test]
    fn test_start_runs_immediately() {
        let mut driver = Driver::new(DashboardConfig::default());
        let mut page = FakePage::dashboard(&[900.0])
            .with_country("France", "/connectivity/Germany/summary");

        let report = driver.start(&mut page, 5_000);
        assert_eq!(driver.ticks(), 1);
        assert_eq!(report.resize.relaid_out, vec![0]);
        assert_eq!(
            report.url,
            UrlSync::Pushed("/connectivity/France/summary".to_string())
        );
    }

    #[test]
    fn test_virtual_time_drives_ticks() {
        let mut driver = Driver::new(DashboardConfig::default());
        let mut page = FakePage::dashboard(&[]);

        driver.start(&mut page, 0);
        assert_eq!(driver.advance_to(&mut page, 999), 0);
        assert_eq!(driver.advance_to(&mut page, 1000), 1);
        assert_eq!(driver.advance_to(&mut page, 4000), 3);
        assert_eq!(driver.ticks(), 5);
    }

    #[test]
    fn test_no_ticks_before_start() {
        let mut driver = Driver::new(DashboardConfig::default());
        let mut page = FakePage::dashboard(&[]);
        assert_eq!(driver.advance_to(&mut page, 10_000), 0);
        assert_eq!(driver.ticks(), 0);
    }

    #[test]
    fn test_country_switch_between_ticks() {
        let mut driver = Driver::new(DashboardConfig::default());
        let mut page = FakePage::dashboard(&[900.0, 800.0])
            .with_country("France", "/connectivity/France/summary");
        page.country_icon_src = Some("fr.png".to_string());

        driver.start(&mut page, 0);
        assert_eq!(page.relayouts.len(), 2);
        assert_eq!(driver.state().cache.len(), 2);

        // Plotly did not change the widths; nothing happens on the next tick
        driver.advance_to(&mut page, 1000);
        assert_eq!(page.relayouts.len(), 2);

        // Server renders Germany: cache cleared, charts resized, url pushed
        page.country_icon_src = Some("de.png".to_string());
        page.texts
            .insert("countrynameWrap".to_string(), "Germany".to_string());
        page.texts.insert(
            "pathnameWrap".to_string(),
            "/connectivity/France/summary".to_string(),
        );
        driver.advance_to(&mut page, 2000);
        assert_eq!(page.relayouts.len(), 4);
        assert_eq!(driver.state().last_country_src.as_deref(), Some("de.png"));
        assert_eq!(
            page.pushes.last().map(String::as_str),
            Some("/connectivity/Germany/summary")
        );
    }

    #[test]
    fn test_custom_interval() {
        let config = DashboardConfig {
            tick_interval_ms: 250,
            ..Default::default()
        };
        let mut driver = Driver::new(config);
        assert_eq!(driver.config().tick_interval_ms, 250);
        let mut page = FakePage::dashboard(&[]);
        driver.start(&mut page, 0);
        assert_eq!(driver.advance_to(&mut page, 1000), 4);
    }
}
