use serde::Serialize;

use super::weekday::Weekday;

/// One rendered day of the week.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WeekdayLabel {
    weekday: Weekday,
    ordinal: u8,
    label: String,
}

impl WeekdayLabel {
    pub fn new(weekday: Weekday, label: String) -> Self {
        WeekdayLabel {
            weekday,
            ordinal: weekday.ordinal(),
            label,
        }
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Seven weekday labels in calendar order, starting at the first day of the
/// week they were computed for.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct OrderedWeekdayLabels {
    entries: Vec<WeekdayLabel>,
}

impl OrderedWeekdayLabels {
    pub(crate) fn from_entries(entries: Vec<WeekdayLabel>) -> Self {
        debug_assert_eq!(entries.len(), 7);
        OrderedWeekdayLabels { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_day(&self) -> Option<Weekday> {
        self.entries.first().map(|e| e.weekday)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WeekdayLabel> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[WeekdayLabel] {
        &self.entries
    }

    pub fn ordinals(&self) -> Vec<u8> {
        self.entries.iter().map(|e| e.ordinal).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn label_for(&self, weekday: Weekday) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.weekday == weekday)
            .map(|e| e.label.as_str())
    }

    /// Ordered `(key, label)` pairs keyed by the English weekday key.
    pub fn into_choices(self) -> Vec<(String, String)> {
        self.entries
            .into_iter()
            .map(|e| (e.weekday.key().to_owned(), e.label))
            .collect()
    }
}

impl IntoIterator for OrderedWeekdayLabels {
    type Item = WeekdayLabel;
    type IntoIter = std::vec::IntoIter<WeekdayLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a OrderedWeekdayLabels {
    type Item = &'a WeekdayLabel;
    type IntoIter = std::slice::Iter<'a, WeekdayLabel>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
