//! Airing-time helpers: local-date bucketing keys and countdown strings.
//!
//! Every function takes its clock input explicitly. The calendar bug this
//! module exists to prevent is UTC-truncated bucketing: an episode airing at
//! 04:00 UTC on March 1st airs on February 28th for a viewer at UTC−6, and
//! must land in the February bucket.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};

/// Convert a UNIX-seconds airing instant to the viewer's local calendar date.
///
/// Returns `None` only for instants outside chrono's representable range.
pub fn local_airing_date<Tz: TimeZone>(airing_at: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::from_timestamp(airing_at, 0).map(|utc| utc.with_timezone(tz).date_naive())
}

/// Render an airing instant as a `yyyy-MM-dd` local date string.
pub fn format_local_date<Tz: TimeZone>(airing_at: i64, tz: &Tz) -> Option<String> {
    local_airing_date(airing_at, tz).map(|d| d.format("%Y-%m-%d").to_string())
}

/// Full English weekday name for a calendar date.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "Sunday",
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
    }
}

/// Countdown string for an upcoming airing instant.
///
/// The day-granularity cutover is `hours > 24`, so an episode exactly one day
/// away renders as `"24h 0m left"`. Long-standing display behavior; keep it.
pub fn time_until(airing_at: i64, now_ts: i64) -> String {
    let secs = airing_at - now_ts;
    if secs < 0 {
        return "Aired".into();
    }

    let minutes = secs / 60;
    let hours = secs / 3600;
    if hours > 24 {
        let days = hours / 24;
        format!("{days}d left")
    } else if hours >= 1 {
        let m = minutes % 60;
        format!("{hours}h {m}m left")
    } else {
        format!("{minutes}m left")
    }
}

/// "Ago"-style counterpart of [`time_until`] for a past airing instant.
/// Future instants clamp to zero.
pub fn time_since(aired_at: i64, now_ts: i64) -> String {
    let secs = (now_ts - aired_at).max(0);

    let minutes = secs / 60;
    let hours = secs / 3600;
    if hours > 24 {
        let days = hours / 24;
        format!("{days}d ago")
    } else if hours >= 1 {
        let m = minutes % 60;
        format!("{hours}h {m}m ago")
    } else {
        format!("{minutes}m ago")
    }
}

/// How close an airing instant is. Purely categorical; any color or glyph
/// mapping belongs to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiringUrgency {
    Past,
    Imminent,
    Soon,
    Later,
}

pub fn urgency(airing_at: i64, now_ts: i64) -> AiringUrgency {
    let secs = airing_at - now_ts;
    if secs < 0 {
        AiringUrgency::Past
    } else if secs < 3600 {
        AiringUrgency::Imminent
    } else if secs < 86_400 {
        AiringUrgency::Soon
    } else {
        AiringUrgency::Later
    }
}
