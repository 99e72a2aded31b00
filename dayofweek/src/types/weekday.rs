use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::dow_error::{DowError, DowResult};

/// A day of the week with a fixed, language independent ordinal.
///
/// Ordinals follow the calendar library convention, not ISO 8601:
/// Sunday is 1 and Saturday is 7.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// All weekdays in ordinal order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn from_ordinal(ordinal: u8) -> DowResult<Weekday> {
        match ordinal {
            1..=7 => Ok(Weekday::ALL[(ordinal - 1) as usize]),
            _ => Err(DowError::argument(&format!(
                "weekday ordinal must be within 1..=7, got {}",
                ordinal
            ))),
        }
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The day after this one, wrapping Saturday back to Sunday.
    pub fn succ(self) -> Weekday {
        // ordinal is 1-based, so the modulo has to be shifted by one
        Weekday::ALL[(self.ordinal() % 7) as usize]
    }

    /// Number of days from `start` to this day going forward, in `0..7`.
    pub fn days_since(self, start: Weekday) -> u8 {
        (7 + self.ordinal() - start.ordinal()) % 7
    }

    /// Stable lowercase English key, used as the choice key.
    pub fn key(self) -> &'static str {
        use Weekday::*;

        match self {
            Sunday => "sunday",
            Monday => "monday",
            Tuesday => "tuesday",
            Wednesday => "wednesday",
            Thursday => "thursday",
            Friday => "friday",
            Saturday => "saturday",
        }
    }

    /// Seven days starting at `self`, each appearing once.
    pub fn week_from(self) -> WeekIter {
        WeekIter {
            next: self,
            remaining: 7,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Weekday {
    type Err = DowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        Weekday::ALL
            .iter()
            .copied()
            .find(|day| lower.len() >= 3 && day.key().starts_with(&lower))
            .ok_or_else(|| DowError::argument(&format!("unknown weekday '{}'", s)))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        Weekday::ALL[value.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(value: Weekday) -> Self {
        use Weekday::*;

        match value {
            Sunday => chrono::Weekday::Sun,
            Monday => chrono::Weekday::Mon,
            Tuesday => chrono::Weekday::Tue,
            Wednesday => chrono::Weekday::Wed,
            Thursday => chrono::Weekday::Thu,
            Friday => chrono::Weekday::Fri,
            Saturday => chrono::Weekday::Sat,
        }
    }
}

pub struct WeekIter {
    next: Weekday,
    remaining: u8,
}

impl Iterator for WeekIter {
    type Item = Weekday;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let day = self.next;
        self.next = day.succ();
        self.remaining -= 1;
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for WeekIter {}
