//! Shared library for the advent calendar site.
//!
//! This crate owns the calendar model, the unlock gate and the content loader.
//! The HTTP handler in the `web` crate only composes these pieces.

pub mod calendar;
pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod models;

pub use calendar::{Calendar, CalendarSettings, Day, DEFAULT_PLACEHOLDER};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use content::{ContentDir, ContentError, ContentLoader, ContentSource};
pub use error::{Error, Result};
pub use models::{ApiResponse, DayView};
