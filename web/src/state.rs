//! Application state shared by every invocation.

use advent::{Calendar, Clock, Config, ContentDir, Result};
use chrono::Datelike;
use tracing::info;

use crate::static_files::StaticDir;

/// Immutable state built once at startup.
pub struct AppState {
    pub calendar: Calendar,
    pub clock: Box<dyn Clock>,
    pub statics: Option<StaticDir>,
    /// Stage prefix, empty when requests arrive at the root.
    pub base_path: String,
}

impl AppState {
    /// Build the calendar and open the content and static roots.
    pub fn from_config(config: &Config, clock: Box<dyn Clock>) -> Result<Self> {
        let loader = ContentDir::open(&config.content_dir, config.calendar.days);
        let calendar = Calendar::build(&config.calendar, &loader, clock.now())?;
        let statics = config.static_dir.as_ref().and_then(StaticDir::open);

        info!(
            "Calendar ready: {} days, content from {}, static serving {}",
            calendar.len(),
            config.content_dir.display(),
            if statics.is_some() { "on" } else { "off" }
        );

        Ok(Self {
            calendar,
            clock,
            statics,
            base_path: config.base_path.clone().unwrap_or_default(),
        })
    }

    /// Year shown in page titles.
    pub fn year(&self) -> i32 {
        self.calendar
            .days()
            .first()
            .map(|day| day.date.year())
            .unwrap_or_default()
    }
}
