//! The airing calendar itself: bucketing a user's list by local airing date.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use crate::airtime::local_airing_date;
use crate::models::ListEntry;

/// Entries grouped by local airing date. `BTreeMap` keeps keys in
/// chronological order, which consumers iterating the map rely on.
pub type DateBuckets = BTreeMap<NaiveDate, Vec<ListEntry>>;

/// Whether a show's next airing falls on the same local weekday as "now".
///
/// This is a heuristic for "airs on a 7-day cadence, so today has an episode
/// too". A biweekly show on today's weekday is misclassified; the calendar
/// accepts that rather than inspecting episode history.
pub fn is_weekly_show<Tz: TimeZone>(airing_at: i64, now: &DateTime<Tz>) -> bool {
    let tz = now.timezone();
    match local_airing_date(airing_at, &tz) {
        Some(date) => date.weekday() == now.date_naive().weekday(),
        None => false,
    }
}

/// Group list entries into per-day calendar buckets.
///
/// Only entries being watched with a known next episode participate;
/// everything else is silently dropped. A weekly show whose next airing is
/// on a later date but within the next six whole days is additionally placed
/// on today's card (as a copy, deduplicated by entry id), so "airs every
/// Friday" shows stay visible on Fridays even after today's episode is out.
///
/// Pure and never fails: `None` input yields an empty map, and the result is
/// fully determined by `entries` and `now` (timezone included).
pub fn group_shows_by_airing_date<Tz: TimeZone>(
    entries: Option<&[ListEntry]>,
    now: &DateTime<Tz>,
) -> DateBuckets {
    let mut buckets = DateBuckets::new();
    let Some(entries) = entries else {
        return buckets;
    };

    let tz = now.timezone();
    let today = now.date_naive();
    let now_ts = now.timestamp();

    let mut scheduled: Vec<(&ListEntry, i64, NaiveDate)> = Vec::new();
    for entry in entries {
        let Some(slot) = entry.airing_slot() else {
            continue;
        };
        let Some(date) = local_airing_date(slot.airing_at, &tz) else {
            continue;
        };
        buckets.entry(date).or_default().push(entry.clone());
        scheduled.push((entry, slot.airing_at, date));
    }

    // Weekly pass. The window check floors the raw-seconds difference into
    // whole days: a show airing next week on today's weekday, at an hour
    // earlier than now's, is 6 whole days away and belongs on today's card.
    for (entry, airing_at, date) in scheduled {
        if date == today || !is_weekly_show(airing_at, now) {
            continue;
        }
        let whole_days = (airing_at - now_ts).div_euclid(86_400);
        if !(0..=6).contains(&whole_days) {
            continue;
        }
        let today_bucket = buckets.entry(today).or_default();
        if today_bucket.iter().any(|e| e.id == entry.id) {
            continue;
        }
        today_bucket.push(entry.clone());
    }

    for bucket in buckets.values_mut() {
        // Tie-break on the id rendered as a string, not numerically, so the
        // ordering matches what list consumers have always seen.
        bucket.sort_by(|a, b| {
            airing_ts(a)
                .cmp(&airing_ts(b))
                .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
        });
    }

    tracing::debug!(
        days = buckets.len(),
        shows = buckets.values().map(Vec::len).sum::<usize>(),
        "grouped airing calendar"
    );
    buckets
}

fn airing_ts(entry: &ListEntry) -> i64 {
    entry
        .airing_slot()
        .map(|slot| slot.airing_at)
        .unwrap_or(i64::MAX)
}
