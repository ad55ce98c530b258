//! Domain logic for the hiyori airing calendar.
//!
//! Everything here is synchronous and pure: the clock is always an explicit
//! `DateTime<Tz>` parameter, and the timezone of that value is the timezone
//! all calendar bucketing happens in.

pub mod airtime;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod schedule;
pub mod week;

pub use airtime::{
    format_local_date, local_airing_date, time_since, time_until, urgency, AiringUrgency,
};
pub use display::{resolve_episode_display, EpisodeDisplay};
pub use error::HiyoriError;
pub use models::{ListEntry, Media, MediaTitle, NextAiringEpisode, WatchStatus};
pub use schedule::{group_shows_by_airing_date, is_weekly_show, DateBuckets};
pub use week::{next_week_dates, ordered_weekdays};
