//! Calendar facts for a locale: which day a week starts on.

pub mod locale_id;
pub mod timezone;
pub mod week_data;

use chrono_tz::Tz;
use serde::Serialize;

use crate::{DowResult, Weekday};
pub use locale_id::{LocaleId, ResolvedLocale};
pub use timezone::{parse_timezone, resolve_timezone};

/// Calendar information derived from a locale and timezone.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct LocaleCalendarInfo {
    locale: String,
    region: Option<String>,
    first_day: Weekday,
}

impl LocaleCalendarInfo {
    pub fn new(locale: String, region: Option<String>, first_day: Weekday) -> Self {
        LocaleCalendarInfo {
            locale,
            region,
            first_day,
        }
    }

    /// Name of the locale data the facts were derived from.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    pub fn first_day_ordinal(&self) -> u8 {
        self.first_day.ordinal()
    }
}

/// Source of per-locale calendar facts.
pub trait CalendarFacts {
    fn calendar_info(&self, locale: &str, timezone: Tz) -> DowResult<LocaleCalendarInfo>;
}

/// Calendar facts backed by CLDR week data keyed by region.
///
/// A `fw` keyword on the locale takes precedence over the region. The
/// timezone does not influence the first day of week.
#[derive(Clone, Copy, Debug, Default)]
pub struct WeekData;

impl CalendarFacts for WeekData {
    fn calendar_info(&self, locale: &str, _timezone: Tz) -> DowResult<LocaleCalendarInfo> {
        let resolved = LocaleId::parse(locale)?.resolve()?;

        let first_day = match resolved.first_day() {
            Some(day) => day,
            None => week_data::first_day_for_region(resolved.region()),
        };

        Ok(LocaleCalendarInfo::new(
            resolved.name().to_owned(),
            resolved.region().map(str::to_owned),
            first_day,
        ))
    }
}
