use crate::{Ambient, WeekdayLabeler, Weekday};
use chrono_tz::Tz;
use proptest::prelude::*;

const LOCALES: &[&str] = &["en_US", "en_GB", "fr_FR", "de_DE", "ja_JP", "ar_EG", "C"];
const PATTERNS: &[&str] = &["eeee", "EEE", "EEEEE", "cccccc", "ee"];
const ZONES: &[&str] = &["UTC", "Pacific/Kiritimati", "Pacific/Pago_Pago", "Asia/Kolkata"];

proptest! {
    #[test]
    fn test_week_is_a_permutation(
        first in 1u8..=7,
        locale in prop::sample::select(LOCALES),
        pattern in prop::sample::select(PATTERNS),
        zone in prop::sample::select(ZONES),
    ) {
        let labeler = WeekdayLabeler::with_ambient(Ambient::new("en_US", Tz::UTC));
        let labels = labeler
            .compute_ordered_labels(Some(locale), Some(zone), Some(first), Some(pattern))
            .unwrap();

        prop_assert_eq!(labels.len(), 7);
        prop_assert_eq!(labels.ordinals()[0], first);

        let mut expected = Weekday::from_ordinal(first).unwrap();
        for entry in labels.iter() {
            prop_assert_eq!(entry.weekday(), expected);
            prop_assert!(!entry.label().is_empty());
            expected = expected.succ();
        }
    }

    #[test]
    fn test_timezone_does_not_change_labels(
        first in 1u8..=7,
        zone in prop::sample::select(ZONES),
    ) {
        let labeler = WeekdayLabeler::with_ambient(Ambient::new("en_US", Tz::UTC));
        let utc = labeler
            .compute_ordered_labels(Some("en_US"), Some("UTC"), Some(first), None)
            .unwrap();
        let zoned = labeler
            .compute_ordered_labels(Some("en_US"), Some(zone), Some(first), None)
            .unwrap();

        prop_assert_eq!(utc, zoned);
    }
}
