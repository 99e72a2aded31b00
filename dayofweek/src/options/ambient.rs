use std::env;

use chrono_tz::Tz;

use crate::calendar::parse_timezone;

pub const FALLBACK_LOCALE: &str = "en_US";

/// Process-wide defaults used when a locale or timezone is not given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ambient {
    locale: String,
    timezone: Tz,
}

impl Ambient {
    pub fn new(locale: &str, timezone: Tz) -> Ambient {
        Ambient {
            locale: locale.to_owned(),
            timezone,
        }
    }

    /// Reads `LC_ALL`, `LC_TIME`, `LANG` and `TZ` from the environment.
    pub fn from_env() -> Ambient {
        Ambient::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars<F>(var: F) -> Ambient
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|name| var(*name))
            .find(|value| !value.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_LOCALE.to_owned());

        let timezone = match var("TZ").filter(|tz| !tz.trim().is_empty()) {
            Some(name) => match parse_timezone(&name) {
                Ok(tz) => tz,
                Err(err) => {
                    tracing::warn!(tz = %name, error = %err, "ignoring TZ, using UTC");
                    Tz::UTC
                }
            },
            None => Tz::UTC,
        };

        Ambient { locale, timezone }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Default for Ambient {
    fn default() -> Self {
        Ambient::new(FALLBACK_LOCALE, Tz::UTC)
    }
}

#[cfg(test)]
mod test {
    use super::Ambient;
    use chrono_tz::Tz;
    use std::collections::HashMap;

    fn ambient(vars: &[(&str, &str)]) -> Ambient {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Ambient::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_empty_environment() {
        assert_eq!(ambient(&[]), Ambient::default());
    }

    #[test]
    fn test_locale_precedence() {
        let a = ambient(&[("LANG", "de_DE.UTF-8"), ("LC_TIME", "fr_FR.UTF-8")]);
        assert_eq!(a.locale(), "fr_FR.UTF-8");

        let a = ambient(&[("LANG", "de_DE.UTF-8"), ("LC_ALL", "ja_JP"), ("LC_TIME", "")]);
        assert_eq!(a.locale(), "ja_JP");

        let a = ambient(&[("LANG", "de_DE.UTF-8"), ("LC_ALL", " ")]);
        assert_eq!(a.locale(), "de_DE.UTF-8");
    }

    #[test]
    fn test_timezone() {
        assert_eq!(ambient(&[("TZ", ":Europe/Berlin")]).timezone(), Tz::Europe__Berlin);
        assert_eq!(ambient(&[("TZ", "Nowhere/Special")]).timezone(), Tz::UTC);
    }
}
