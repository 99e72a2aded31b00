//! dayofweek produces the seven days of the week as localized labels, in the
//! order a locale's calendar lists them.
//!
//! A week starts on the locale's first day of week (Sunday in the United
//! States, Monday in most of Europe, Saturday in much of the Middle East)
//! unless a first day is given explicitly. Each day carries a language
//! independent ordinal, 1 for Sunday through 7 for Saturday, and a label
//! rendered with a CLDR style weekday pattern such as `eeee` or `EEE`.
//!
//! The basic example of how to use:
//! ```
//! use dayofweek::{Ambient, WeekdayLabeler};
//!
//! let labeler = WeekdayLabeler::with_ambient(Ambient::default());
//! let labels = labeler
//!     .compute_ordered_labels(Some("en_US"), None, Some(2), None)
//!     .unwrap();
//!
//! assert_eq!(labels.ordinals(), vec![2, 3, 4, 5, 6, 7, 1]);
//! assert_eq!(labels.labels()[0], "Monday");
//! ```
//! Locales are given as POSIX names (`fr_FR.UTF-8`) or BCP 47 tags
//! (`fr-FR`). The first day of week may also be requested through the
//! locale itself, either as `fr-FR-u-fw-sun` or `fr_FR@fw=sun`.
//!
//! Calendar facts and formatting are behind the [`CalendarFacts`] and
//! [`DateFormats`] traits so either can be replaced.
pub mod calendar;
pub mod format;
mod labeler;
mod options;
mod types;

pub use calendar::{CalendarFacts, LocaleCalendarInfo, WeekData};
pub use format::{DateFormats, DateFormatter, FormatterConfig, LocalizedDateFormats};
pub use labeler::{compute_ordered_labels, WeekdayLabeler};
pub use options::{Ambient, DayOfWeekOptions, ResolvedDayOfWeek, DEFAULT_LABEL_FORMAT};
pub use types::{DowError, DowResult, OrderedWeekdayLabels, WeekIter, Weekday, WeekdayLabel};

// Some re-exports to allow a consistent use of serde
pub use serde;
pub use serde_json;

#[cfg(test)]
mod tests;
