pub mod http;
pub mod wire;

use async_trait::async_trait;

use crate::error::UpstreamError;
use wire::{Friend, GameInfo, GameVotes, GroupRole, UserDetails, UserSearchEntry};

pub use http::HttpUpstreamClient;

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// One method per logical upstream lookup. Each call is a single attempt;
/// callers decide whether to substitute a value on failure.
#[async_trait]
pub trait UpstreamClient: Send + Sync {
    async fn search_users(&self, username: &str) -> UpstreamResult<Vec<UserSearchEntry>>;

    async fn user_details(&self, user_id: u64) -> UpstreamResult<UserDetails>;

    /// URL of the user's 150x150 headshot.
    async fn avatar_headshot(&self, user_id: u64) -> UpstreamResult<String>;

    async fn group_roles(&self, user_id: u64) -> UpstreamResult<Vec<GroupRole>>;

    /// The user's role in `group_id`, `None` when not a member.
    async fn group_membership(
        &self,
        user_id: u64,
        group_id: u64,
    ) -> UpstreamResult<Option<GroupRole>>;

    async fn friends(&self, user_id: u64) -> UpstreamResult<Vec<Friend>>;

    async fn game_info(&self, universe_id: u64) -> UpstreamResult<GameInfo>;

    async fn game_votes(&self, universe_id: u64) -> UpstreamResult<GameVotes>;

    async fn favorites_count(&self, universe_id: u64) -> UpstreamResult<u64>;
}
