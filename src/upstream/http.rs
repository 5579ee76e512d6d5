use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::wire::{
    DataList, FavoritesCount, Friend, GameInfo, GameVotes, GroupRole, Thumbnail, UserDetails,
    UserSearchEntry,
};
use super::{UpstreamClient, UpstreamResult};
use crate::config::UpstreamEndpoints;
use crate::error::UpstreamError;

const SEARCH_LIMIT: u32 = 10;
const THUMBNAIL_COMPLETED: &str = "Completed";

/// reqwest-backed client. Every request carries the client-wide timeout.
#[derive(Clone)]
pub struct HttpUpstreamClient {
    client: Client,
    endpoints: UpstreamEndpoints,
}

impl HttpUpstreamClient {
    /// # Errors
    ///
    /// Will return `Err` if the TLS backend cannot be initialised
    pub fn new(endpoints: UpstreamEndpoints, timeout: Duration) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self { client, endpoints })
    }

    #[must_use]
    pub fn endpoints(&self) -> &UpstreamEndpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> UpstreamResult<T> {
        debug!("GET {url}");
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::status(
                status.as_u16(),
                format!("GET {url} returned {status}"),
            ));
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl UpstreamClient for HttpUpstreamClient {
    async fn search_users(&self, username: &str) -> UpstreamResult<Vec<UserSearchEntry>> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/v1/users/search", self.endpoints.users),
            &[
                ("keyword", username.to_string()),
                ("limit", SEARCH_LIMIT.to_string()),
            ],
        )
        .map_err(|e| UpstreamError::network(e.to_string()))?;
        let list: DataList<UserSearchEntry> = self.get_json(url.as_str()).await?;
        Ok(list.data)
    }

    async fn user_details(&self, user_id: u64) -> UpstreamResult<UserDetails> {
        let url = format!("{}/v1/users/{user_id}", self.endpoints.users);
        self.get_json(&url).await
    }

    async fn avatar_headshot(&self, user_id: u64) -> UpstreamResult<String> {
        let url = format!(
            "{}/v1/users/avatar-headshot?userIds={user_id}&size=150x150&format=Png&isCircular=false",
            self.endpoints.thumbnails
        );
        let list: DataList<Thumbnail> = self.get_json(&url).await?;
        list.data
            .into_iter()
            .filter(|t| t.target_id.is_none_or(|id| id == user_id))
            .find(|t| t.state == THUMBNAIL_COMPLETED)
            .and_then(|t| t.image_url)
            .ok_or_else(|| UpstreamError::decode(format!("no completed headshot for {user_id}")))
    }

    async fn group_roles(&self, user_id: u64) -> UpstreamResult<Vec<GroupRole>> {
        let url = format!("{}/v1/users/{user_id}/groups/roles", self.endpoints.groups);
        let list: DataList<GroupRole> = self.get_json(&url).await?;
        Ok(list.data)
    }

    async fn group_membership(
        &self,
        user_id: u64,
        group_id: u64,
    ) -> UpstreamResult<Option<GroupRole>> {
        let url = format!("{}/v2/users/{user_id}/groups/roles", self.endpoints.groups);
        let list: DataList<GroupRole> = self.get_json(&url).await?;
        Ok(list.data.into_iter().find(|r| r.group.id == group_id))
    }

    async fn friends(&self, user_id: u64) -> UpstreamResult<Vec<Friend>> {
        let url = format!("{}/v1/users/{user_id}/friends", self.endpoints.friends);
        let list: DataList<Friend> = self.get_json(&url).await?;
        Ok(list.data)
    }

    async fn game_info(&self, universe_id: u64) -> UpstreamResult<GameInfo> {
        let url = format!("{}/v1/games?universeIds={universe_id}", self.endpoints.games);
        let list: DataList<GameInfo> = self.get_json(&url).await?;
        list.data
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::decode(format!("no game info for {universe_id}")))
    }

    async fn game_votes(&self, universe_id: u64) -> UpstreamResult<GameVotes> {
        let url = format!(
            "{}/v1/games/votes?universeIds={universe_id}",
            self.endpoints.games
        );
        let list: DataList<GameVotes> = self.get_json(&url).await?;
        list.data
            .into_iter()
            .next()
            .ok_or_else(|| UpstreamError::decode(format!("no votes for {universe_id}")))
    }

    async fn favorites_count(&self, universe_id: u64) -> UpstreamResult<u64> {
        let url = format!(
            "{}/v1/games/{universe_id}/favorites/count",
            self.endpoints.games
        );
        let count: FavoritesCount = self.get_json(&url).await?;
        Ok(count.favorites_count)
    }
}
