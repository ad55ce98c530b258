//! Plain-text rendering of the airing calendar. Pure string building so the
//! output can be asserted in tests without a terminal.

use chrono::{DateTime, NaiveDate, TimeZone};

use hiyori_core::airtime::{self, AiringUrgency};
use hiyori_core::models::ListEntry;
use hiyori_core::schedule::DateBuckets;
use hiyori_core::{display, week};

/// Render the full 7-day calendar, today first.
pub fn render_week<Tz: TimeZone>(
    buckets: &DateBuckets,
    now: &DateTime<Tz>,
    countdowns: bool,
) -> String {
    let dates = week::next_week_dates(now);
    let names = week::ordered_weekdays(now);

    let mut out = String::new();
    for (i, (date, name)) in dates.iter().zip(names).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&render_day(*date, buckets, now, name, i == 0, countdowns));
    }
    out
}

/// Render a single day's card.
pub fn render_day<Tz: TimeZone>(
    date: NaiveDate,
    buckets: &DateBuckets,
    now: &DateTime<Tz>,
    weekday: &str,
    is_today: bool,
    countdowns: bool,
) -> String {
    let suffix = if is_today { "  (today)" } else { "" };
    let mut out = format!("{weekday}, {}{suffix}\n", date.format("%Y-%m-%d"));

    match buckets.get(&date).map(Vec::as_slice) {
        None | Some([]) => out.push_str("  nothing airing\n"),
        Some(entries) => {
            for entry in entries {
                out.push_str(&entry_line(entry, now, is_today, countdowns));
                out.push('\n');
            }
        }
    }
    out
}

fn entry_line<Tz: TimeZone>(
    entry: &ListEntry,
    now: &DateTime<Tz>,
    today_card: bool,
    countdowns: bool,
) -> String {
    let title = entry
        .media
        .as_ref()
        .map(|m| m.title.preferred())
        .unwrap_or("Unknown");
    let Some(slot) = entry.airing_slot() else {
        // Bucketed entries always carry a slot; belt and braces for direct calls.
        return format!("    {title}");
    };

    let now_ts = now.timestamp();
    let mark = urgency_mark(airtime::urgency(slot.airing_at, now_ts));

    let mut line = format!("  {mark} {title}");
    if today_card {
        let ep = display::resolve_episode_display(slot.airing_at, slot.episode, now);
        if ep.show_previous {
            line.push_str(&format!(" · Ep {}", ep.display_episode));
            if countdowns {
                line.push_str(&format!(
                    " ({})",
                    airtime::time_since(ep.previous_airing_at, now_ts)
                ));
                line.push_str(&format!(
                    " · Ep {} {}",
                    slot.episode,
                    airtime::time_until(slot.airing_at, now_ts)
                ));
            }
            return line;
        }
    }

    line.push_str(&format!(" · Ep {}", slot.episode));
    if countdowns {
        line.push_str(&format!(" ({})", airtime::time_until(slot.airing_at, now_ts)));
    }
    line
}

fn urgency_mark(urgency: AiringUrgency) -> char {
    match urgency {
        AiringUrgency::Past => '✓',
        AiringUrgency::Imminent => '!',
        AiringUrgency::Soon => '•',
        AiringUrgency::Later => '◦',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use hiyori_core::models::{Media, MediaTitle, NextAiringEpisode, WatchStatus};
    use hiyori_core::schedule::group_shows_by_airing_date;

    // Friday 2025-02-28 20:00 at UTC−6.
    const NOW: i64 = 1_740_794_400;
    // Friday 2025-02-28 22:00 local.
    const TONIGHT: i64 = 1_740_801_600;
    // Monday 2025-03-03 21:00 local.
    const MONDAY: i64 = 1_741_057_200;

    fn now() -> DateTime<FixedOffset> {
        DateTime::from_timestamp(NOW, 0)
            .unwrap()
            .with_timezone(&FixedOffset::west_opt(6 * 3600).unwrap())
    }

    fn entry(id: u64, title: &str, airing_at: i64, episode: i32) -> ListEntry {
        ListEntry {
            id,
            status: WatchStatus::Current,
            progress: episode as u32 - 1,
            media: Some(Media {
                id,
                title: MediaTitle {
                    romaji: Some(title.into()),
                    english: None,
                    native: None,
                },
                cover_image: None,
                genres: vec![],
                episodes: Some(24),
                status: Some("RELEASING".into()),
                next_airing_episode: Some(NextAiringEpisode {
                    airing_at,
                    episode,
                    time_until_airing: airing_at - NOW,
                }),
            }),
        }
    }

    #[test]
    fn test_week_view_headers_and_lines() {
        let entries = vec![
            entry(1, "Sousou no Frieren", TONIGHT, 8),
            entry(2, "Dandadan", MONDAY, 5),
        ];
        let buckets = group_shows_by_airing_date(Some(&entries), &now());
        let out = render_week(&buckets, &now(), true);

        assert!(out.starts_with("Friday, 2025-02-28  (today)\n"));
        assert!(out.contains("Monday, 2025-03-03\n"));
        // Today's card shows the watchable (previous) episode plus countdown.
        assert!(out.contains("• Sousou no Frieren · Ep 7 (6d ago) · Ep 8 2h 0m left"));
        // A midweek show keeps its anticipated episode.
        assert!(out.contains("◦ Dandadan · Ep 5 (3d left)"));
        assert!(out.contains("nothing airing"));
    }

    #[test]
    fn test_day_view_without_countdowns() {
        let entries = vec![entry(1, "Sousou no Frieren", TONIGHT, 8)];
        let buckets = group_shows_by_airing_date(Some(&entries), &now());
        let date = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
        let out = render_day(date, &buckets, &now(), "Friday", true, false);

        assert_eq!(out, "Friday, 2025-02-28  (today)\n  • Sousou no Frieren · Ep 7\n");
    }

    #[test]
    fn test_empty_day_card() {
        let buckets = DateBuckets::new();
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let out = render_day(date, &buckets, &now(), "Tuesday", false, true);
        assert_eq!(out, "Tuesday, 2025-03-04\n  nothing airing\n");
    }
}
