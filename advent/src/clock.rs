//! Source of "now" for the unlock gate.

use chrono::{Local, NaiveDateTime};

/// Provides the current local wall-clock time.
///
/// Unlock dates are calendar dates without a zone, so the gate compares
/// against local time, matching how a visitor reads "December 13th".
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the system's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
