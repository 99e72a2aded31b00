use chrono::{Datelike, Days, NaiveDate};
use tracing::{debug, instrument};

use crate::{
    calendar::{resolve_timezone, timezone::local_noon, CalendarFacts, WeekData},
    format::{DateFormats, DateFormatter, FormatterConfig, LocalizedDateFormats},
    options::{Ambient, DayOfWeekOptions, ResolvedDayOfWeek, DEFAULT_LABEL_FORMAT},
    DowError, DowResult, OrderedWeekdayLabels, Weekday, WeekdayLabel,
};

/// Produces weekday labels in the order a locale's calendar lists them.
///
/// Generic over the source of calendar facts and the date formatter, both
/// of which default to the locale data bundled with chrono.
#[derive(Clone, Debug)]
pub struct WeekdayLabeler<C = WeekData, F = LocalizedDateFormats> {
    calendar: C,
    formats: F,
    ambient: Ambient,
}

impl WeekdayLabeler {
    /// A labeler using the process environment for defaults.
    pub fn new() -> Self {
        WeekdayLabeler::with_ambient(Ambient::from_env())
    }

    pub fn with_ambient(ambient: Ambient) -> Self {
        WeekdayLabeler::with_providers(WeekData, LocalizedDateFormats, ambient)
    }
}

impl Default for WeekdayLabeler {
    fn default() -> Self {
        WeekdayLabeler::new()
    }
}

impl<C, F> WeekdayLabeler<C, F>
where
    C: CalendarFacts,
    F: DateFormats,
{
    pub fn with_providers(calendar: C, formats: F, ambient: Ambient) -> Self {
        WeekdayLabeler {
            calendar,
            formats,
            ambient,
        }
    }

    pub fn ambient(&self) -> &Ambient {
        &self.ambient
    }

    /// Labels for all seven days, starting at the first day of week.
    ///
    /// Absent arguments fall back to the ambient locale and timezone, the
    /// locale's own first day of week and the full weekday name pattern.
    pub fn compute_ordered_labels(
        &self,
        locale: Option<&str>,
        timezone: Option<&str>,
        first_day_of_week: Option<u8>,
        label_format: Option<&str>,
    ) -> DowResult<OrderedWeekdayLabels> {
        let options = DayOfWeekOptions {
            locale: locale.map(str::to_owned),
            timezone: timezone.map(str::to_owned),
            firstdow: first_day_of_week,
            label_format: label_format.map(str::to_owned),
        };

        Ok(self.resolve(&options)?.into_labels())
    }

    /// Applies every default to `options` and computes the labels.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve(&self, options: &DayOfWeekOptions) -> DowResult<ResolvedDayOfWeek> {
        let explicit_first_day = options.firstdow.map(Weekday::from_ordinal).transpose()?;

        let locale = options
            .locale
            .as_deref()
            .unwrap_or_else(|| self.ambient.locale());
        let timezone = resolve_timezone(options.timezone.as_deref(), self.ambient.timezone())?;

        let first_day = match explicit_first_day {
            Some(day) => day,
            None => {
                let info = self.calendar.calendar_info(locale, timezone)?;
                debug!(
                    locale = info.locale(),
                    region = info.region(),
                    first_day = %info.first_day(),
                    "first day of week from calendar facts"
                );
                info.first_day()
            }
        };

        let label_format = options
            .label_format
            .as_deref()
            .unwrap_or(DEFAULT_LABEL_FORMAT);

        let formatter = self.formats.formatter(&FormatterConfig {
            locale,
            timezone,
            pattern: label_format,
            first_day,
        })?;

        let labels = render_week(&formatter, first_day, timezone)?;

        Ok(ResolvedDayOfWeek::new(
            locale.to_owned(),
            timezone.name().to_owned(),
            first_day,
            label_format.to_owned(),
            labels,
        ))
    }
}

/// Computes labels with the default providers and the process environment.
pub fn compute_ordered_labels(
    locale: Option<&str>,
    timezone: Option<&str>,
    first_day_of_week: Option<u8>,
    label_format: Option<&str>,
) -> DowResult<OrderedWeekdayLabels> {
    WeekdayLabeler::new().compute_ordered_labels(locale, timezone, first_day_of_week, label_format)
}

fn render_week<T: DateFormatter>(
    formatter: &T,
    first_day: Weekday,
    timezone: chrono_tz::Tz,
) -> DowResult<OrderedWeekdayLabels> {
    let mut entries = Vec::with_capacity(7);

    for day in first_day.week_from() {
        let at = local_noon(reference_date(day)?, timezone)?;
        debug_assert_eq!(Weekday::from(at.weekday()), day);

        entries.push(WeekdayLabel::new(day, formatter.format(&at)?));
    }

    Ok(OrderedWeekdayLabels::from_entries(entries))
}

/// A date falling on `day`, counted from a Sunday anchor.
fn reference_date(day: Weekday) -> DowResult<NaiveDate> {
    NaiveDate::from_ymd_opt(2006, 1, 1)
        .and_then(|sunday| sunday.checked_add_days(Days::new(u64::from(day.ordinal() - 1))))
        .ok_or_else(|| DowError::argument("reference date out of range"))
}

#[cfg(test)]
mod test {
    use super::reference_date;
    use crate::Weekday;
    use chrono::Datelike;

    #[test]
    fn test_reference_dates() {
        for day in Weekday::ALL {
            let date = reference_date(day).unwrap();
            assert_eq!(Weekday::from(date.weekday()), day);
        }
    }
}
