//! Week-window derivation: which seven days the calendar shows, and in what
//! order the weekday headers rotate.

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone};

/// Canonical Sunday-first weekday names, matching `Date.getDay()` numbering.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// The seven weekday names rotated so index 0 is today's weekday.
pub fn ordered_weekdays<Tz: TimeZone>(now: &DateTime<Tz>) -> [&'static str; 7] {
    let shift = now.date_naive().weekday().num_days_from_sunday() as usize;
    std::array::from_fn(|i| WEEKDAY_NAMES[(i + shift) % 7])
}

/// The dates `[today, today+1, .., today+6]` in the viewer's zone.
///
/// Date-only arithmetic: stepping calendar days sidesteps DST transitions
/// that 24h-of-seconds stepping would trip over.
pub fn next_week_dates<Tz: TimeZone>(now: &DateTime<Tz>) -> Vec<NaiveDate> {
    let today = now.date_naive();
    (0..7)
        .filter_map(|i| today.checked_add_days(Days::new(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn friday_evening() -> DateTime<FixedOffset> {
        // Friday 2025-02-28 20:00 at UTC−6.
        DateTime::from_timestamp(1_740_794_400, 0)
            .unwrap()
            .with_timezone(&FixedOffset::west_opt(6 * 3600).unwrap())
    }

    #[test]
    fn test_rotation_starts_at_today() {
        let days = ordered_weekdays(&friday_evening());
        assert_eq!(days[0], "Friday");
        assert_eq!(
            days,
            ["Friday", "Saturday", "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday"]
        );
    }

    #[test]
    fn test_rotation_is_a_permutation() {
        let days = ordered_weekdays(&friday_evening());
        let mut sorted = days.to_vec();
        sorted.sort_unstable();
        let mut canon = WEEKDAY_NAMES.to_vec();
        canon.sort_unstable();
        assert_eq!(sorted, canon);
    }

    #[test]
    fn test_week_window_crosses_month_boundary() {
        let dates: Vec<String> = next_week_dates(&friday_evening())
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(
            dates,
            [
                "2025-02-28",
                "2025-03-01",
                "2025-03-02",
                "2025-03-03",
                "2025-03-04",
                "2025-03-05",
                "2025-03-06",
            ]
        );
    }

    #[test]
    fn test_week_window_strictly_increasing() {
        let dates = next_week_dates(&friday_evening());
        assert_eq!(dates.len(), 7);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }
}
