//! Declarative options of a day-of-week choice list and their resolved form.
//!
//! Options are plain data, typically deserialized from configuration:
//! ```
//! use dayofweek::{DayOfWeekOptions, WeekdayLabeler, Ambient};
//!
//! let options: DayOfWeekOptions =
//!     serde_json::from_str(r#"{"locale": "en_US", "firstdow": 2}"#).unwrap();
//! let resolved = WeekdayLabeler::with_ambient(Ambient::default())
//!     .resolve(&options)
//!     .unwrap();
//!
//! assert_eq!(resolved.choices()[0], ("monday".to_owned(), "Monday".to_owned()));
//! ```

mod ambient;

use serde::{Deserialize, Serialize, Serializer};

use crate::{OrderedWeekdayLabels, Weekday};
pub use ambient::Ambient;

/// Pattern used when no label format is given: the full standalone name.
pub const DEFAULT_LABEL_FORMAT: &str = "eeee";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DayOfWeekOptions {
    /// Defaults to the ambient locale.
    #[serde(default)]
    pub locale: Option<String>,
    /// IANA zone name; defaults to the ambient timezone.
    #[serde(default)]
    pub timezone: Option<String>,
    /// First day of week, 1 (Sunday) to 7 (Saturday); defaults to the
    /// locale's first day.
    #[serde(default)]
    pub firstdow: Option<u8>,
    #[serde(default)]
    pub label_format: Option<String>,
}

impl DayOfWeekOptions {
    pub fn new() -> Self {
        DayOfWeekOptions::default()
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_owned());
        self
    }

    pub fn timezone(mut self, timezone: &str) -> Self {
        self.timezone = Some(timezone.to_owned());
        self
    }

    pub fn firstdow(mut self, firstdow: u8) -> Self {
        self.firstdow = Some(firstdow);
        self
    }

    pub fn label_format(mut self, label_format: &str) -> Self {
        self.label_format = Some(label_format.to_owned());
        self
    }
}

/// Options with every default applied, plus the computed choices.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedDayOfWeek {
    locale: String,
    timezone: String,
    firstdow: u8,
    label_format: String,
    #[serde(serialize_with = "serialize_choices")]
    choices: Vec<(String, String)>,
    #[serde(skip)]
    labels: OrderedWeekdayLabels,
}

impl ResolvedDayOfWeek {
    pub(crate) fn new(
        locale: String,
        timezone: String,
        first_day: Weekday,
        label_format: String,
        labels: OrderedWeekdayLabels,
    ) -> Self {
        ResolvedDayOfWeek {
            locale,
            timezone,
            firstdow: first_day.ordinal(),
            label_format,
            choices: labels.clone().into_choices(),
            labels,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }

    pub fn firstdow(&self) -> u8 {
        self.firstdow
    }

    pub fn label_format(&self) -> &str {
        &self.label_format
    }

    /// `(weekday key, label)` pairs in display order.
    pub fn choices(&self) -> &[(String, String)] {
        &self.choices
    }

    pub fn labels(&self) -> &OrderedWeekdayLabels {
        &self.labels
    }

    pub fn into_labels(self) -> OrderedWeekdayLabels {
        self.labels
    }
}

// an ordered JSON object, like the choice arrays the options came from
fn serialize_choices<S>(choices: &Vec<(String, String)>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(choices.iter().map(|(key, label)| (key, label)))
}
