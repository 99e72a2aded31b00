use std::str::FromStr;

use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::Tz;

use crate::{DowError, DowResult};

/// Parses an IANA zone name, falling back to `default` when absent.
pub fn resolve_timezone(timezone: Option<&str>, default: Tz) -> DowResult<Tz> {
    match timezone {
        None => Ok(default),
        Some(name) => parse_timezone(name),
    }
}

pub fn parse_timezone(name: &str) -> DowResult<Tz> {
    let name = name.trim().trim_start_matches(':');

    Tz::from_str(name).map_err(|_| DowError::argument(&format!("unknown timezone '{}'", name)))
}

/// `date` at local noon in `tz`.
///
/// Noon is never skipped by a transition on the dates used for labels, but
/// the earliest instant is taken should it ever be ambiguous.
pub fn local_noon(date: NaiveDate, tz: Tz) -> DowResult<DateTime<Tz>> {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| DowError::argument("invalid reference time"))?;

    tz.from_local_datetime(&noon)
        .earliest()
        .ok_or_else(|| DowError::argument(&format!("{} does not exist in {}", noon, tz.name())))
}
