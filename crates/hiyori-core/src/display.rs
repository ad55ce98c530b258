//! Per-entry episode display decisions.

use chrono::{DateTime, TimeZone};

use crate::airtime::local_airing_date;
use crate::schedule::is_weekly_show;

const WEEK_SECONDS: i64 = 7 * 24 * 3600;

/// Which episode number a calendar card shows, and whether the previously
/// aired episode is the one in focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeDisplay {
    /// True when the show airs today (or is a weekly show), so the episode
    /// the viewer can actually watch is the one before the anticipated one.
    pub show_previous: bool,
    /// Episode number to present. Unclamped: an episode-1 premiere airing
    /// today resolves to 0, and callers decide how to render that.
    pub display_episode: i32,
    /// Approximate airing instant of the previous episode: exactly seven
    /// days before the next one, not looked up from schedule history.
    pub previous_airing_at: i64,
}

/// Decide between the anticipated episode and the previously aired one.
pub fn resolve_episode_display<Tz: TimeZone>(
    airing_at: i64,
    episode: i32,
    now: &DateTime<Tz>,
) -> EpisodeDisplay {
    let tz = now.timezone();
    let is_today = local_airing_date(airing_at, &tz) == Some(now.date_naive());
    let show_previous = is_today || is_weekly_show(airing_at, now);

    EpisodeDisplay {
        show_previous,
        display_episode: if show_previous { episode - 1 } else { episode },
        previous_airing_at: airing_at - WEEK_SECONDS,
    }
}
