use crate::Weekday;

// CLDR supplemental weekData, firstDay. Regions not listed start on Monday.
const SUNDAY_FIRST: &[&str] = &[
    "AG", "AS", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT",
    "GU", "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO",
    "MT", "MX", "MZ", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PT", "PY", "SA", "SG", "SV",
    "TH", "TT", "TW", "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];

const SATURDAY_FIRST: &[&str] = &[
    "AE", "AF", "BH", "DJ", "DZ", "EG", "IQ", "IR", "JO", "KW", "LY", "OM", "QA", "SD", "SY",
];

const FRIDAY_FIRST: &[&str] = &["MV"];

/// First day of the week customary in `region`.
///
/// `None` stands for the world region (`001`), which starts on Monday.
pub fn first_day_for_region(region: Option<&str>) -> Weekday {
    let Some(region) = region else {
        return Weekday::Monday;
    };

    if SUNDAY_FIRST.contains(&region) {
        Weekday::Sunday
    } else if SATURDAY_FIRST.contains(&region) {
        Weekday::Saturday
    } else if FRIDAY_FIRST.contains(&region) {
        Weekday::Friday
    } else {
        Weekday::Monday
    }
}
