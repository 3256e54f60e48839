//! Configuration management for the calendar site.

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::{Datelike, Local};

use crate::calendar::{CalendarSettings, DEFAULT_PLACEHOLDER};
use crate::{Error, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Day count, start date and placeholder text
    pub calendar: CalendarSettings,
    /// Directory holding `day{n}.txt` files
    pub content_dir: PathBuf,
    /// Directory served under `/static/`, if any
    pub static_dir: Option<PathBuf>,
    /// API Gateway stage prefix, e.g. `/prod`
    pub base_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let year = parse_var(&lookup, "CALENDAR_YEAR", Local::now().year())?;
        let days = parse_var(&lookup, "CALENDAR_DAYS", 12u32)?;
        let start_month = parse_var(&lookup, "CALENDAR_START_MONTH", 12u32)?;
        let start_day = parse_var(&lookup, "CALENDAR_START_DAY", 13u32)?;
        let placeholder = lookup("CALENDAR_PLACEHOLDER")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

        let calendar = CalendarSettings {
            year,
            days,
            start_month,
            start_day,
            placeholder,
        };
        calendar.validate()?;

        let content_dir = lookup("CONTENT_DIR")
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| "content".to_string());

        // An explicitly empty STATIC_DIR turns static serving off.
        let static_dir = match lookup("STATIC_DIR") {
            Some(dir) if dir.is_empty() => None,
            Some(dir) => Some(PathBuf::from(dir)),
            None => Some(PathBuf::from("static")),
        };

        Ok(Self {
            calendar,
            content_dir: PathBuf::from(content_dir),
            static_dir,
            base_path: lookup("BASE_PATH").and_then(|p| normalize_base_path(&p)),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| Error::Config(format!("{} has invalid value '{}': {}", key, raw, e))),
        _ => Ok(default),
    }
}

/// Turn `prod`, `/prod/` or `/prod` into `/prod`; `/` and empty mean no prefix.
fn normalize_base_path(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.calendar.year, Local::now().year());
        assert_eq!(config.calendar.days, 12);
        assert_eq!(config.calendar.start_month, 12);
        assert_eq!(config.calendar.start_day, 13);
        assert_eq!(config.calendar.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.content_dir, PathBuf::from("content"));
        assert_eq!(config.static_dir, Some(PathBuf::from("static")));
        assert_eq!(config.base_path, None);
    }

    #[test]
    fn test_twenty_five_day_calendar() {
        let config = Config::from_lookup(lookup_from(&[
            ("CALENDAR_YEAR", "2024"),
            ("CALENDAR_DAYS", "25"),
            ("CALENDAR_START_DAY", "1"),
            ("CALENDAR_PLACEHOLDER", "Happy Advent!"),
        ]))
        .unwrap();

        assert_eq!(config.calendar.year, 2024);
        assert_eq!(config.calendar.days, 25);
        assert_eq!(config.calendar.start_day, 1);
        assert_eq!(config.calendar.placeholder, "Happy Advent!");
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        let err = Config::from_lookup(lookup_from(&[("CALENDAR_DAYS", "twelve")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("CALENDAR_DAYS"));
    }

    #[test]
    fn test_rejects_zero_days() {
        let err = Config::from_lookup(lookup_from(&[("CALENDAR_DAYS", "0")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_impossible_start_date() {
        let err = Config::from_lookup(lookup_from(&[
            ("CALENDAR_START_MONTH", "2"),
            ("CALENDAR_START_DAY", "30"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_static_dir_disables_static_serving() {
        let config = Config::from_lookup(lookup_from(&[("STATIC_DIR", "")])).unwrap();
        assert_eq!(config.static_dir, None);
    }

    #[test]
    fn test_base_path_normalization() {
        assert_eq!(normalize_base_path("prod"), Some("/prod".to_string()));
        assert_eq!(normalize_base_path("/prod/"), Some("/prod".to_string()));
        assert_eq!(normalize_base_path("/"), None);
        assert_eq!(normalize_base_path(""), None);
    }
}
