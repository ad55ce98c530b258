use serde::Deserialize;

use hiyori_core::models::{
    CoverImage, ListEntry, Media, MediaTitle, NextAiringEpisode, WatchStatus,
};

// ── GraphQL response wrappers ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: T,
}

// ── User list query ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct MediaListCollectionResponse {
    #[serde(rename = "MediaListCollection")]
    pub media_list_collection: MediaListCollection,
}

#[derive(Debug, Deserialize)]
pub struct MediaListCollection {
    pub lists: Vec<MediaListGroup>,
}

#[derive(Debug, Deserialize)]
pub struct MediaListGroup {
    pub entries: Vec<RawListEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RawListEntry {
    pub id: u64,
    pub status: Option<String>,
    #[serde(default)]
    pub progress: u32,
    pub media: Option<RawMedia>,
}

#[derive(Debug, Deserialize)]
pub struct RawMedia {
    pub id: u64,
    pub title: Option<RawTitle>,
    pub episodes: Option<u32>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<RawCoverImage>,
    pub genres: Option<Vec<String>>,
    pub status: Option<String>,
    #[serde(rename = "nextAiringEpisode")]
    pub next_airing_episode: Option<RawAiringEpisode>,
}

#[derive(Debug, Deserialize)]
pub struct RawTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawCoverImage {
    pub large: Option<String>,
    pub medium: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawAiringEpisode {
    #[serde(rename = "airingAt")]
    pub airing_at: i64,
    #[serde(rename = "timeUntilAiring")]
    pub time_until_airing: i64,
    pub episode: i32,
}

// ── Viewer query ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ViewerResponse {
    #[serde(rename = "Viewer")]
    pub viewer: Viewer,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub id: u64,
    pub name: String,
}

// ── Conversions ──────────────────────────────────────────────────

impl RawListEntry {
    /// Convert into the core model. Entries with a missing or unrecognized
    /// status are dropped rather than failing the whole fetch.
    pub fn into_list_entry(self) -> Option<ListEntry> {
        let status = WatchStatus::from_api_str(self.status.as_deref()?)?;
        Some(ListEntry {
            id: self.id,
            status,
            progress: self.progress,
            media: self.media.map(RawMedia::into_media),
        })
    }
}

impl RawMedia {
    fn into_media(self) -> Media {
        Media {
            id: self.id,
            title: self
                .title
                .map(|t| MediaTitle {
                    romaji: t.romaji,
                    english: t.english,
                    native: t.native,
                })
                .unwrap_or_default(),
            cover_image: self.cover_image.map(|c| CoverImage {
                large: c.large,
                medium: c.medium,
            }),
            genres: self.genres.unwrap_or_default(),
            episodes: self.episodes,
            status: self.status,
            next_airing_episode: self.next_airing_episode.map(|a| NextAiringEpisode {
                airing_at: a.airing_at,
                episode: a.episode,
                time_until_airing: a.time_until_airing,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_user_list_response() {
        let json = r#"{
            "data": {
                "MediaListCollection": {
                    "lists": [
                        {
                            "entries": [
                                {
                                    "id": 401234,
                                    "status": "CURRENT",
                                    "progress": 7,
                                    "media": {
                                        "id": 154587,
                                        "title": {
                                            "romaji": "Sousou no Frieren",
                                            "english": "Frieren: Beyond Journey's End",
                                            "native": "葬送のフリーレン"
                                        },
                                        "episodes": 28,
                                        "coverImage": { "large": "https://s4.anilist.co/file/anilistcdn/media/anime/cover/large/154587.jpg" },
                                        "genres": ["Adventure", "Drama", "Fantasy"],
                                        "status": "RELEASING",
                                        "nextAiringEpisode": {
                                            "airingAt": 1740801600,
                                            "timeUntilAiring": 7200,
                                            "episode": 8
                                        }
                                    }
                                }
                            ]
                        }
                    ]
                }
            }
        }"#;

        let resp: GraphQLResponse<MediaListCollectionResponse> =
            serde_json::from_str(json).unwrap();
        let entry = resp
            .data
            .media_list_collection
            .lists
            .into_iter()
            .next()
            .unwrap()
            .entries
            .into_iter()
            .next()
            .unwrap()
            .into_list_entry()
            .unwrap();

        assert_eq!(entry.id, 401234);
        assert_eq!(entry.status, WatchStatus::Current);
        assert_eq!(entry.progress, 7);

        let media = entry.media.unwrap();
        assert_eq!(media.title.preferred(), "Sousou no Frieren");
        assert_eq!(media.episodes, Some(28));

        let airing = media.next_airing_episode.unwrap();
        assert_eq!(airing.airing_at, 1_740_801_600);
        assert_eq!(airing.episode, 8);
    }

    #[test]
    fn test_deserialize_minimal_entry() {
        let json = r#"{ "id": 1, "status": "PAUSED" }"#;
        let entry: RawListEntry = serde_json::from_str(json).unwrap();
        let entry = entry.into_list_entry().unwrap();
        assert_eq!(entry.status, WatchStatus::Paused);
        assert_eq!(entry.progress, 0);
        assert!(entry.media.is_none());
    }

    #[test]
    fn test_unknown_status_drops_entry() {
        let json = r#"{ "id": 2, "status": "BINGING", "progress": 3 }"#;
        let entry: RawListEntry = serde_json::from_str(json).unwrap();
        assert!(entry.into_list_entry().is_none());

        let json = r#"{ "id": 3 }"#;
        let entry: RawListEntry = serde_json::from_str(json).unwrap();
        assert!(entry.into_list_entry().is_none());
    }

    #[test]
    fn test_deserialize_viewer() {
        let json = r#"{ "data": { "Viewer": { "id": 5, "name": "umaru" } } }"#;
        let resp: GraphQLResponse<ViewerResponse> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.viewer.name, "umaru");
    }
}
