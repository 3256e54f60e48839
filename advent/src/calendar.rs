//! Calendar model and the unlock gate.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info, warn};

use crate::content::{ContentLoader, ContentSource};
use crate::models::DayView;
use crate::{Error, Result};

/// Text shown for days without a content file.
pub const DEFAULT_PLACEHOLDER: &str = "Merry Christmas! 🎄";

/// Shape of a calendar: how many days, when it starts, and the placeholder text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSettings {
    pub year: i32,
    pub days: u32,
    pub start_month: u32,
    pub start_day: u32,
    pub placeholder: String,
}

impl CalendarSettings {
    /// Upper bound on the day count.
    pub const MAX_DAYS: u32 = 366;

    /// Twelve days from December 13th to Christmas Eve.
    pub fn twelve_days(year: i32) -> Self {
        Self {
            year,
            days: 12,
            start_month: 12,
            start_day: 13,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Twenty-five days from December 1st to Christmas Day.
    pub fn twenty_five_days(year: i32) -> Self {
        Self {
            year,
            days: 25,
            start_month: 12,
            start_day: 1,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }

    /// Date of day 1.
    pub fn start_date(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.start_month, self.start_day).ok_or_else(|| {
            Error::Config(format!(
                "start date {}-{:02}-{:02} does not exist",
                self.year, self.start_month, self.start_day
            ))
        })
    }

    /// Date of day `number`; day N falls N - 1 days after the start.
    pub fn date_of(&self, number: u32) -> Result<NaiveDate> {
        let offset = number
            .checked_sub(1)
            .ok_or_else(|| Error::Validation(format!("invalid day number: {}", number)))?;
        self.start_date()?
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| Error::Config(format!("date of day {} is out of range", number)))
    }

    /// Check that every day of the calendar has a date.
    pub fn validate(&self) -> Result<()> {
        if self.days == 0 || self.days > Self::MAX_DAYS {
            return Err(Error::Config(format!(
                "day count must be between 1 and {}, got {}",
                Self::MAX_DAYS,
                self.days
            )));
        }
        self.date_of(self.days)?;
        Ok(())
    }
}

/// One slot in the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub number: u32,
    pub date: NaiveDate,
    /// Unlock state when the calendar was built.
    pub unlocked: bool,
    pub content: String,
    pub source: ContentSource,
}

impl Day {
    /// The instant the day opens: local midnight of its date.
    pub fn unlocks_at(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }

    pub fn is_unlocked_at(&self, now: NaiveDateTime) -> bool {
        now >= self.unlocks_at()
    }

    /// Render-ready view at `now`, with content withheld while locked.
    pub fn view_at(&self, now: NaiveDateTime) -> DayView {
        let unlocked = self.is_unlocked_at(now);
        DayView {
            number: self.number,
            date: self.date,
            unlocked,
            content: unlocked.then(|| self.content.clone()),
        }
    }
}

/// Fixed, ordered list of days. Day `n` lives at index `n - 1`.
#[derive(Debug, Clone)]
pub struct Calendar {
    days: Vec<Day>,
}

impl Calendar {
    /// Build the calendar, loading every day's content up front.
    ///
    /// Content problems never fail the build: the day gets placeholder text
    /// and the problem is logged.
    pub fn build(
        settings: &CalendarSettings,
        loader: &dyn ContentLoader,
        now: NaiveDateTime,
    ) -> Result<Self> {
        settings.validate()?;

        let mut days = Vec::with_capacity(settings.days as usize);
        for number in 1..=settings.days {
            let date = settings.date_of(number)?;

            let (content, source) = match loader.load(number) {
                Ok(Some(text)) => (text, ContentSource::File),
                Ok(None) => {
                    debug!("No content for day {}, using placeholder", number);
                    (settings.placeholder.clone(), ContentSource::Placeholder)
                }
                Err(e) => {
                    warn!("Content for day {} unusable, using placeholder: {}", number, e);
                    (settings.placeholder.clone(), ContentSource::Fallback)
                }
            };

            let mut day = Day {
                number,
                date,
                unlocked: false,
                content,
                source,
            };
            day.unlocked = day.is_unlocked_at(now);
            days.push(day);
        }

        info!(
            "Built calendar for {}: {} days from {}",
            settings.year,
            days.len(),
            days[0].date
        );

        Ok(Self { days })
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Day by its 1-based number.
    pub fn day(&self, number: u32) -> Option<&Day> {
        number
            .checked_sub(1)
            .and_then(|index| self.days.get(index as usize))
    }

    /// Parse a day number from a path segment, checking it is in `1..=N`.
    pub fn parse_day_number(&self, raw: &str) -> Result<u32> {
        raw.parse::<u32>()
            .ok()
            .filter(|number| self.day(*number).is_some())
            .ok_or_else(|| Error::Validation("Invalid day number".to_string()))
    }

    /// Views of every day at `now`, locked content redacted.
    pub fn views_at(&self, now: NaiveDateTime) -> Vec<DayView> {
        self.days.iter().map(|day| day.view_at(now)).collect()
    }

    /// Open day `number` at `now`, enforcing the bounds check and the unlock gate.
    pub fn open_day(&self, number: u32, now: NaiveDateTime) -> Result<DayView> {
        let day = self
            .day(number)
            .ok_or_else(|| Error::Validation("Invalid day number".to_string()))?;

        if !day.is_unlocked_at(now) {
            return Err(Error::AccessDenied(
                "This day is not yet unlocked".to_string(),
            ));
        }

        Ok(day.view_at(now))
    }
}
