use chrono::Locale;
use regex::Regex;
use std::sync::OnceLock;

use crate::{DowError, DowResult, Weekday};

const LIKELY_LOCALES: &[(&str, &str)] = &[
    ("ar", "ar_EG"),
    ("ca", "ca_ES"),
    ("cs", "cs_CZ"),
    ("da", "da_DK"),
    ("de", "de_DE"),
    ("el", "el_GR"),
    ("en", "en_US"),
    ("es", "es_ES"),
    ("et", "et_EE"),
    ("eu", "eu_ES"),
    ("fa", "fa_IR"),
    ("ga", "ga_IE"),
    ("gl", "gl_ES"),
    ("he", "he_IL"),
    ("hi", "hi_IN"),
    ("ja", "ja_JP"),
    ("ko", "ko_KR"),
    ("nb", "nb_NO"),
    ("pt", "pt_BR"),
    ("sl", "sl_SI"),
    ("sq", "sq_AL"),
    ("sr", "sr_RS"),
    ("sv", "sv_SE"),
    ("uk", "uk_UA"),
    ("vi", "vi_VN"),
    ("zh", "zh_CN"),
];

fn locale_regex() -> &'static Regex {
    static LOCALE_RE: OnceLock<Regex> = OnceLock::new();

    LOCALE_RE.get_or_init(|| {
        Regex::new(r"(?i)^([a-z]{2,3})(?:-([a-z]{4}))?(?:-([a-z]{2}|[0-9]{3}))?(?:-[a-z0-9]{1,8})*$")
            .expect("locale regex is valid")
    })
}

/// A parsed, not yet resolved, locale identifier.
///
/// Accepts POSIX names (`fr_FR.UTF-8@euro`), BCP 47 tags (`fr-FR-u-fw-sun`),
/// ICU keyword syntax (`fr_FR@fw=sun`) and bare languages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocaleId {
    language: String,
    region: Option<String>,
    modifier: Option<String>,
    first_day: Option<Weekday>,
    posix: bool,
}

/// A locale identifier mapped onto available locale data.
#[derive(Clone, Debug)]
pub struct ResolvedLocale {
    locale: Locale,
    name: String,
    region: Option<String>,
    first_day: Option<Weekday>,
}

impl LocaleId {
    pub fn parse(source: &str) -> DowResult<LocaleId> {
        let trimmed = source.trim();
        if trimmed.is_empty() {
            return Err(DowError::locale("empty locale identifier"));
        }

        let mut first_day = None;
        let mut modifier = None;

        let (base, keywords) = match trimmed.split_once('@') {
            Some((base, keywords)) => (base, Some(keywords)),
            None => (trimmed, None),
        };

        if let Some(keywords) = keywords {
            for keyword in keywords.split(';').filter(|k| !k.is_empty()) {
                match keyword.split_once('=') {
                    Some((key, value)) if key.trim().eq_ignore_ascii_case("fw") => {
                        first_day = Some(parse_first_day(value.trim(), source)?);
                    }
                    Some(_) => {}
                    None => modifier = Some(keyword.to_ascii_lowercase()),
                }
            }
        }

        // encoding is irrelevant for weekday names
        let base = base.split('.').next().unwrap_or(base).replace('_', "-");
        let lower = base.to_ascii_lowercase();

        let mut tag_end = lower.len();
        if let Some(idx) = lower.find("-x-") {
            tag_end = idx;
        }
        if let Some(idx) = lower[..tag_end].find("-u-") {
            if let Some(day) = unicode_extension_first_day(&lower[idx + 3..tag_end], source)? {
                first_day = Some(day);
            }
            tag_end = idx;
        }
        let base = &base[..tag_end];

        if base.eq_ignore_ascii_case("c") || base.eq_ignore_ascii_case("posix") {
            return Ok(LocaleId {
                language: "POSIX".to_owned(),
                region: None,
                modifier: None,
                first_day,
                posix: true,
            });
        }

        let caps = locale_regex()
            .captures(base)
            .ok_or_else(|| DowError::locale(&format!("malformed locale identifier '{}'", source)))?;

        Ok(LocaleId {
            language: caps[1].to_ascii_lowercase(),
            region: caps.get(3).map(|m| m.as_str().to_ascii_uppercase()),
            modifier,
            first_day,
            posix: false,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// First day of week requested through the locale's `fw` keyword.
    pub fn first_day(&self) -> Option<Weekday> {
        self.first_day
    }

    /// Locale data names to try, most specific first.
    pub fn candidates(&self) -> Vec<String> {
        if self.posix {
            return vec!["POSIX".to_owned()];
        }

        let mut candidates = Vec::new();
        let lang = &self.language;

        if let Some(region) = &self.region {
            if let Some(modifier) = &self.modifier {
                candidates.push(format!("{}_{}_{}", lang, region, modifier));
            }
            candidates.push(format!("{}_{}", lang, region));
        }

        if let Some((_, likely)) = LIKELY_LOCALES.iter().find(|(l, _)| *l == lang.as_str()) {
            candidates.push((*likely).to_owned());
        }
        candidates.push(format!("{}_{}", lang, lang.to_ascii_uppercase()));

        let mut seen = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !seen.contains(&candidate) {
                seen.push(candidate);
            }
        }
        seen
    }

    pub fn resolve(&self) -> DowResult<ResolvedLocale> {
        for candidate in self.candidates() {
            match Locale::try_from(candidate.as_str()) {
                Ok(locale) => {
                    tracing::trace!(candidate = %candidate, "resolved locale data");
                    // the requested region wins over the one of the data we fell back to
                    let region = self.region.clone().or_else(|| data_region(&candidate));
                    return Ok(ResolvedLocale {
                        locale,
                        name: candidate,
                        region,
                        first_day: self.first_day,
                    });
                }
                Err(_) => tracing::trace!(candidate = %candidate, "no locale data"),
            }
        }

        Err(DowError::locale(&format!(
            "no locale data for '{}'",
            self.display_name()
        )))
    }

    fn display_name(&self) -> String {
        match &self.region {
            Some(region) => format!("{}_{}", self.language, region),
            None => self.language.clone(),
        }
    }
}

impl ResolvedLocale {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Canonical name of the locale data, e.g. `fr_FR`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Region used for calendar facts; `None` for POSIX.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn first_day(&self) -> Option<Weekday> {
        self.first_day
    }
}

fn data_region(name: &str) -> Option<String> {
    name.split('_')
        .nth(1)
        .filter(|r| r.len() == 2 || r.len() == 3)
        .map(str::to_owned)
}

fn parse_first_day(value: &str, source: &str) -> DowResult<Weekday> {
    match value.to_ascii_lowercase().as_str() {
        "sun" => Ok(Weekday::Sunday),
        "mon" => Ok(Weekday::Monday),
        "tue" => Ok(Weekday::Tuesday),
        "wed" => Ok(Weekday::Wednesday),
        "thu" => Ok(Weekday::Thursday),
        "fri" => Ok(Weekday::Friday),
        "sat" => Ok(Weekday::Saturday),
        _ => Err(DowError::locale(&format!(
            "unknown first day of week '{}' in '{}'",
            value, source
        ))),
    }
}

fn unicode_extension_first_day(extension: &str, source: &str) -> DowResult<Option<Weekday>> {
    let mut key: Option<&str> = None;

    for subtag in extension.split('-') {
        if subtag.len() == 2 {
            key = Some(subtag);
        } else if key == Some("fw") {
            return parse_first_day(subtag, source).map(Some);
        }
    }

    if key == Some("fw") {
        return Err(DowError::locale(&format!(
            "missing first day of week value in '{}'",
            source
        )));
    }
    Ok(None)
}

#[cfg(test)]
mod test {
    use super::LocaleId;
    use crate::Weekday;
    use test_case::test_case;

    #[test_case("fr_FR", "fr", Some("FR"); "posix")]
    #[test_case("fr-fr", "fr", Some("FR"); "bcp47 lowercase")]
    #[test_case("de_DE.UTF-8", "de", Some("DE"); "encoding")]
    #[test_case("zh-Hant-TW", "zh", Some("TW"); "script")]
    #[test_case("es-419", "es", Some("419"); "numeric region")]
    #[test_case("EN", "en", None; "bare language")]
    fn test_parse(source: &str, language: &str, region: Option<&str>) {
        let id = LocaleId::parse(source).unwrap();

        assert_eq!(id.language(), language);
        assert_eq!(id.region(), region);
        assert_eq!(id.first_day(), None);
    }

    #[test_case("en-US-u-fw-mon", Weekday::Monday; "bcp47 extension")]
    #[test_case("en-US-u-ca-gregory-fw-sat", Weekday::Saturday; "after another key")]
    #[test_case("fr_FR@fw=sun", Weekday::Sunday; "icu keyword")]
    #[test_case("fr_FR@calendar=gregorian;fw=wed", Weekday::Wednesday; "icu keyword list")]
    fn test_parse_first_day(source: &str, expected: Weekday) {
        assert_eq!(LocaleId::parse(source).unwrap().first_day(), Some(expected));
    }

    #[test_case(""; "empty")]
    #[test_case("not a locale"; "spaces")]
    #[test_case("fr_FR@fw=xyz"; "bad fw keyword")]
    #[test_case("en-US-u-fw"; "missing fw value")]
    fn test_parse_errors(source: &str) {
        let err = LocaleId::parse(source).unwrap_err();

        assert_eq!(err.type_string(), "LOCALE_RESOLUTION");
    }

    #[test]
    fn test_candidates() {
        let id = LocaleId::parse("sr_RS@latin").unwrap();

        assert_eq!(
            id.candidates(),
            vec![
                "sr_RS_latin".to_owned(),
                "sr_RS".to_owned(),
                "sr_SR".to_owned()
            ]
        );

        let id = LocaleId::parse("en").unwrap();
        assert_eq!(id.candidates(), vec!["en_US".to_owned(), "en_EN".to_owned()]);

        let id = LocaleId::parse("C").unwrap();
        assert_eq!(id.candidates(), vec!["POSIX".to_owned()]);
    }

    #[test]
    fn test_resolve() {
        let resolved = LocaleId::parse("fr-FR").unwrap().resolve().unwrap();

        assert_eq!(resolved.name(), "fr_FR");
        assert_eq!(resolved.region(), Some("FR"));

        let resolved = LocaleId::parse("ja").unwrap().resolve().unwrap();
        assert_eq!(resolved.name(), "ja_JP");

        assert_eq!(resolved.region(), Some("JP"));

        let resolved = LocaleId::parse("POSIX").unwrap().resolve().unwrap();
        assert_eq!(resolved.region(), None);

        let resolved = LocaleId::parse("es-419").unwrap().resolve().unwrap();
        assert_eq!(resolved.name(), "es_ES");
        assert_eq!(resolved.region(), Some("419"));
    }

    #[test]
    fn test_resolve_unknown() {
        let err = LocaleId::parse("xx_QQ").unwrap().resolve().unwrap_err();

        assert_eq!(err.type_string(), "LOCALE_RESOLUTION");
    }
}
