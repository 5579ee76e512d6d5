use std::time::Duration;

use crate::model::TitleMetrics;

pub const DEFAULT_USERS_API: &str = "https://users.roblox.com";
pub const DEFAULT_THUMBNAILS_API: &str = "https://thumbnails.roblox.com";
pub const DEFAULT_GROUPS_API: &str = "https://groups.roblox.com";
pub const DEFAULT_FRIENDS_API: &str = "https://friends.roblox.com";
pub const DEFAULT_GAMES_API: &str = "https://games.roblox.com";
pub const DEFAULT_AVATAR_CDN: &str = "https://tr.rbxcdn.com";

pub const DEFAULT_TARGET_GROUP_ID: u64 = 35_815_907;
pub const DEFAULT_TARGET_UNIVERSE_ID: u64 = 6_149_304_133;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Rating kept when the vote tally is unavailable or empty.
pub const DEFAULT_RATING: f64 = 4.6;

/// Base URLs of the upstream services, without trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    pub users: String,
    pub thumbnails: String,
    pub groups: String,
    pub friends: String,
    pub games: String,
}

impl Default for UpstreamEndpoints {
    fn default() -> Self {
        Self {
            users: DEFAULT_USERS_API.to_string(),
            thumbnails: DEFAULT_THUMBNAILS_API.to_string(),
            groups: DEFAULT_GROUPS_API.to_string(),
            friends: DEFAULT_FRIENDS_API.to_string(),
            games: DEFAULT_GAMES_API.to_string(),
        }
    }
}

impl UpstreamEndpoints {
    /// Every service served from one host, as the test fakes do.
    #[must_use]
    pub fn single_host(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            users: base.clone(),
            thumbnails: base.clone(),
            groups: base.clone(),
            friends: base.clone(),
            games: base,
        }
    }
}

/// Fixed identifiers and fallback baselines the assemblers need.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub target_group_id: u64,
    pub target_universe_id: u64,
    pub avatar_cdn: String,
    pub upstream_timeout: Duration,
    pub default_title: TitleMetrics,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            target_group_id: DEFAULT_TARGET_GROUP_ID,
            target_universe_id: DEFAULT_TARGET_UNIVERSE_ID,
            avatar_cdn: DEFAULT_AVATAR_CDN.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_title: default_title_metrics(),
        }
    }
}

/// Baseline used wholesale or per field when title lookups fail.
#[must_use]
pub fn default_title_metrics() -> TitleMetrics {
    TitleMetrics {
        visits: 12_480_000,
        currently_playing: 1_850,
        favorites_count: 96_400,
        rating_fraction: DEFAULT_RATING,
        name: "Fire Drill Simulator".to_string(),
        description: "Pull alarms, run drills and climb the safety leaderboards.".to_string(),
        creator_name: "Drill Team Studios".to_string(),
        genre: "Roleplay".to_string(),
        max_players: 30,
        price: 0,
    }
}
