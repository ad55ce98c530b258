use serde::{Deserialize, Serialize};

/// User's watch status for a list entry, as AniList reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WatchStatus {
    Current,
    Planning,
    Completed,
    Dropped,
    Paused,
    Repeating,
}

impl WatchStatus {
    /// Parse an AniList `MediaListStatus` value.
    pub fn from_api_str(s: &str) -> Option<Self> {
        match s {
            "CURRENT" => Some(Self::Current),
            "PLANNING" => Some(Self::Planning),
            "COMPLETED" => Some(Self::Completed),
            "DROPPED" => Some(Self::Dropped),
            "PAUSED" => Some(Self::Paused),
            "REPEATING" => Some(Self::Repeating),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "Watching",
            Self::Planning => "Planning",
            Self::Completed => "Completed",
            Self::Dropped => "Dropped",
            Self::Paused => "Paused",
            Self::Repeating => "Rewatching",
        }
    }
}

impl std::fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single title with language variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

impl MediaTitle {
    /// Returns the best available display title.
    pub fn preferred(&self) -> &str {
        self.romaji
            .as_deref()
            .or(self.english.as_deref())
            .or(self.native.as_deref())
            .unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverImage {
    pub large: Option<String>,
    pub medium: Option<String>,
}

/// Schedule pointer for the next episode of a releasing show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NextAiringEpisode {
    /// Scheduled release instant, UNIX seconds (UTC).
    pub airing_at: i64,
    /// 1-based number of the episode being anticipated.
    pub episode: i32,
    /// Seconds from fetch time to `airing_at`. Snapshot only; goes stale.
    pub time_until_airing: i64,
}

/// Show metadata attached to a list entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Media {
    pub id: u64,
    pub title: MediaTitle,
    pub cover_image: Option<CoverImage>,
    pub genres: Vec<String>,
    pub episodes: Option<u32>,
    pub status: Option<String>,
    pub next_airing_episode: Option<NextAiringEpisode>,
}

/// A user's relationship to one media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: u64,
    pub status: WatchStatus,
    pub progress: u32,
    pub media: Option<Media>,
}

impl ListEntry {
    /// Narrow to the next-airing schedule, present only for entries the
    /// calendar cares about: currently watched, with a known next episode.
    pub fn airing_slot(&self) -> Option<&NextAiringEpisode> {
        if self.status != WatchStatus::Current {
            return None;
        }
        self.media.as_ref()?.next_airing_episode.as_ref()
    }
}
