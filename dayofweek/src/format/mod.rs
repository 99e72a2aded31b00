//! Rendering of a date as a weekday label.

pub mod pattern;

use std::fmt::Write;

use chrono::{DateTime, Datelike, Locale};
use chrono_tz::Tz;

use crate::{calendar::LocaleId, DowError, DowResult, Weekday};
pub use pattern::{NameWidth, PatternItem, WeekdayPattern};

/// Everything a formatter is configured with.
#[derive(Clone, Copy, Debug)]
pub struct FormatterConfig<'a> {
    pub locale: &'a str,
    pub timezone: Tz,
    pub pattern: &'a str,
    /// Anchors local day numbers (`e`, `c`).
    pub first_day: Weekday,
}

/// Renders an instant with a fixed configuration.
pub trait DateFormatter {
    fn format(&self, at: &DateTime<Tz>) -> DowResult<String>;
}

/// Source of configured formatters.
pub trait DateFormats {
    type Formatter: DateFormatter;

    fn formatter(&self, config: &FormatterConfig<'_>) -> DowResult<Self::Formatter>;
}

/// Formatters backed by chrono's localized names.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalizedDateFormats;

impl DateFormats for LocalizedDateFormats {
    type Formatter = LocalizedFormatter;

    fn formatter(&self, config: &FormatterConfig<'_>) -> DowResult<LocalizedFormatter> {
        let locale = LocaleId::parse(config.locale)?.resolve()?.locale();
        let pattern = WeekdayPattern::parse(config.pattern)?;

        Ok(LocalizedFormatter {
            locale,
            timezone: config.timezone,
            pattern,
            first_day: config.first_day,
        })
    }
}

#[derive(Clone, Debug)]
pub struct LocalizedFormatter {
    locale: Locale,
    timezone: Tz,
    pattern: WeekdayPattern,
    first_day: Weekday,
}

impl LocalizedFormatter {
    fn strftime(&self, at: &DateTime<Tz>, spec: &str) -> DowResult<String> {
        let mut out = String::new();
        write!(out, "{}", at.format_localized(spec, self.locale))
            .map_err(|_| DowError::format(&format!("unable to render '{}'", spec)))?;
        Ok(out)
    }

    fn name(&self, at: &DateTime<Tz>, width: NameWidth) -> DowResult<String> {
        match width {
            NameWidth::Wide => self.strftime(at, "%A"),
            NameWidth::Abbreviated => self.strftime(at, "%a"),
            NameWidth::Narrow => Ok(self.strftime(at, "%a")?.chars().take(1).collect()),
            NameWidth::Short => Ok(self.strftime(at, "%a")?.chars().take(2).collect()),
        }
    }
}

impl DateFormatter for LocalizedFormatter {
    fn format(&self, at: &DateTime<Tz>) -> DowResult<String> {
        let at = at.with_timezone(&self.timezone);
        let mut label = String::new();

        for item in self.pattern.items() {
            match item {
                PatternItem::Literal(text) => label.push_str(text),
                PatternItem::Name(width) => label.push_str(&self.name(&at, *width)?),
                PatternItem::LocalNumber { padded } => {
                    let number = Weekday::from(at.weekday()).days_since(self.first_day) + 1;
                    if *padded {
                        label.push_str(&format!("{:02}", number));
                    } else {
                        label.push_str(&number.to_string());
                    }
                }
            }
        }

        Ok(label)
    }
}

#[cfg(test)]
mod test {
    use super::{DateFormats, DateFormatter, FormatterConfig, LocalizedDateFormats};
    use crate::{calendar::timezone::local_noon, Weekday};
    use chrono::NaiveDate;
    use chrono_tz::Tz;
    use std::collections::HashSet;
    use test_case::test_case;

    fn render(locale: &str, pattern: &str, first_day: Weekday) -> String {
        let config = FormatterConfig {
            locale,
            timezone: Tz::UTC,
            pattern,
            first_day,
        };
        let formatter = LocalizedDateFormats.formatter(&config).unwrap();
        // a Tuesday
        let at = local_noon(NaiveDate::from_ymd_opt(2006, 1, 3).unwrap(), Tz::UTC).unwrap();

        formatter.format(&at).unwrap()
    }

    #[test_case("en_US", "EEEE", "Tuesday"; "english wide")]
    #[test_case("en_US", "EEE", "Tue"; "english abbreviated")]
    #[test_case("en_US", "EEEEE", "T"; "english narrow")]
    #[test_case("en_US", "EEEEEE", "Tu"; "english short")]
    #[test_case("fr_FR", "EEEE", "mardi"; "french wide")]
    #[test_case("de_DE", "cccc", "Dienstag"; "german standalone")]
    #[test_case("en_US", "'day' e", "day 3"; "local number from sunday")]
    fn test_render(locale: &str, pattern: &str, expected: &str) {
        assert_eq!(render(locale, pattern, Weekday::Sunday), expected);
    }

    #[test_case("ar_EG"; "arabic")]
    #[test_case("zh_CN"; "chinese")]
    #[test_case("ja_JP"; "japanese")]
    #[test_case("en_US"; "english")]
    fn test_narrow_names_are_distinct(locale: &str) {
        let config = FormatterConfig {
            locale,
            timezone: Tz::UTC,
            pattern: "EEEEE",
            first_day: Weekday::Sunday,
        };
        let formatter = LocalizedDateFormats.formatter(&config).unwrap();

        let names: HashSet<String> = (1..=7)
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(2006, 1, day).unwrap();
                formatter.format(&local_noon(date, Tz::UTC).unwrap()).unwrap()
            })
            .collect();

        // English repeats S and T, every other locale here has distinct initials
        let expected = if locale == "en_US" { 5 } else { 7 };
        assert_eq!(names.len(), expected);
    }

    #[test]
    fn test_local_number_follows_first_day() {
        assert_eq!(render("en_US", "ee", Weekday::Monday), "02");
        assert_eq!(render("en_US", "e", Weekday::Tuesday), "1");
        assert_eq!(render("en_US", "e", Weekday::Wednesday), "7");
    }

    #[test]
    fn test_formats_in_configured_timezone() {
        let config = FormatterConfig {
            locale: "en_US",
            timezone: Tz::Pacific__Kiritimati,
            pattern: "EEEE",
            first_day: Weekday::Sunday,
        };
        let formatter = LocalizedDateFormats.formatter(&config).unwrap();
        // Tuesday 23:00 UTC is already Wednesday at UTC+14
        let at = local_noon(NaiveDate::from_ymd_opt(2006, 1, 3).unwrap(), Tz::UTC).unwrap()
            + chrono::Duration::hours(11);

        assert_eq!(formatter.format(&at).unwrap(), "Wednesday");
    }

    #[test]
    fn test_invalid_pattern() {
        let config = FormatterConfig {
            locale: "en_US",
            timezone: Tz::UTC,
            pattern: "dd/MM",
            first_day: Weekday::Sunday,
        };

        let err = LocalizedDateFormats.formatter(&config).unwrap_err();
        assert_eq!(err.type_string(), "FORMAT");
    }

    #[test]
    fn test_unknown_locale() {
        let config = FormatterConfig {
            locale: "zz_ZZ",
            timezone: Tz::UTC,
            pattern: "EEEE",
            first_day: Weekday::Sunday,
        };

        let err = LocalizedDateFormats.formatter(&config).unwrap_err();
        assert_eq!(err.type_string(), "LOCALE_RESOLUTION");
    }
}
