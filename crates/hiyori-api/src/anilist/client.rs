use reqwest::Client;

use hiyori_core::models::ListEntry;

use super::error::AniListError;
use super::types::{
    GraphQLResponse, MediaListCollectionResponse, RawListEntry, Viewer, ViewerResponse,
};

const API_URL: &str = "https://graphql.anilist.co";

const USER_LIST_QUERY: &str = r#"
query ($userName: String) {
    MediaListCollection(userName: $userName, type: ANIME) {
        lists {
            entries {
                id
                status
                progress
                media {
                    id
                    title { romaji english native }
                    episodes
                    coverImage { large medium }
                    genres
                    status
                    nextAiringEpisode { airingAt timeUntilAiring episode }
                }
            }
        }
    }
}
"#;

const VIEWER_QUERY: &str = r#"
query {
    Viewer {
        id
        name
    }
}
"#;

/// AniList GraphQL API client.
///
/// The token is optional: AniList serves public lists by username without
/// auth; a bearer token adds private entries and raises rate limits.
pub struct AniListClient {
    access_token: Option<String>,
    http: Client,
}

impl AniListClient {
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            access_token,
            http: Client::new(),
        }
    }

    async fn graphql_request<T: serde::de::DeserializeOwned>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AniListError> {
        tracing::debug!(operation, "AniList GraphQL request");

        let mut req = self
            .http
            .post(API_URL)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(token) = &self.access_token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let resp = req
            .json(&serde_json::json!({
                "query": query,
                "variables": variables,
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(operation, status = status_code, "AniList API error");
            return Err(AniListError::Api {
                status: status_code,
                message: body,
            });
        }

        tracing::debug!(operation, status = %status, "AniList response received");
        resp.json::<T>()
            .await
            .map_err(|e| AniListError::Parse(e.to_string()))
    }

    /// Resolve the authenticated viewer. Requires a token.
    pub async fn get_viewer(&self) -> Result<Viewer, AniListError> {
        if self.access_token.is_none() {
            return Err(AniListError::Auth("no access token configured".into()));
        }
        let resp: GraphQLResponse<ViewerResponse> = self
            .graphql_request("Viewer", VIEWER_QUERY, serde_json::json!({}))
            .await?;
        Ok(resp.data.viewer)
    }

    /// Fetch a user's full anime list, flattened across AniList's list
    /// groups and converted into core entries.
    pub async fn get_user_list(&self, user_name: &str) -> Result<Vec<ListEntry>, AniListError> {
        let resp: GraphQLResponse<MediaListCollectionResponse> = self
            .graphql_request(
                "UserList",
                USER_LIST_QUERY,
                serde_json::json!({ "userName": user_name }),
            )
            .await?;

        let entries: Vec<ListEntry> = resp
            .data
            .media_list_collection
            .lists
            .into_iter()
            .flat_map(|group| group.entries)
            .filter_map(RawListEntry::into_list_entry)
            .collect();

        tracing::debug!(user = user_name, count = entries.len(), "fetched user list");
        Ok(entries)
    }
}
