use std::time::Duration;

use clap::Parser;

use crate::config::{
    AggregatorConfig, DEFAULT_AVATAR_CDN, DEFAULT_FRIENDS_API, DEFAULT_GAMES_API,
    DEFAULT_GROUPS_API, DEFAULT_TARGET_GROUP_ID, DEFAULT_TARGET_UNIVERSE_ID,
    DEFAULT_THUMBNAILS_API, DEFAULT_TIMEOUT_SECS, DEFAULT_USERS_API, UpstreamEndpoints,
    default_title_metrics,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the HTTP server to
    #[arg(long, env = "AGG_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, env = "AGG_PORT", default_value_t = 8081)]
    pub port: u16,

    #[arg(long, env = "USERS_API", default_value = DEFAULT_USERS_API)]
    pub users_api: String,
    #[arg(long, env = "THUMBNAILS_API", default_value = DEFAULT_THUMBNAILS_API)]
    pub thumbnails_api: String,
    #[arg(long, env = "GROUPS_API", default_value = DEFAULT_GROUPS_API)]
    pub groups_api: String,
    #[arg(long, env = "FRIENDS_API", default_value = DEFAULT_FRIENDS_API)]
    pub friends_api: String,
    #[arg(long, env = "GAMES_API", default_value = DEFAULT_GAMES_API)]
    pub games_api: String,
    /// Host used to build placeholder avatar URLs
    #[arg(long, env = "AVATAR_CDN", default_value = DEFAULT_AVATAR_CDN)]
    pub avatar_cdn: String,

    /// Group whose membership boosts engagement figures
    #[arg(long, env = "TARGET_GROUP_ID", default_value_t = DEFAULT_TARGET_GROUP_ID)]
    pub target_group_id: u64,
    /// Universe id of the tracked title
    #[arg(long, env = "TARGET_UNIVERSE_ID", default_value_t = DEFAULT_TARGET_UNIVERSE_ID)]
    pub target_universe_id: u64,

    /// Per-call upstream timeout, in seconds
    #[arg(short = 't', long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub upstream_timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub host: String,
    pub port: u16,
    pub endpoints: UpstreamEndpoints,
    pub config: AggregatorConfig,
}

impl From<Args> for CleanArgs {
    fn from(args: Args) -> Self {
        let trim = |s: String| s.trim_end_matches('/').to_string();
        Self {
            host: args.host,
            port: args.port,
            endpoints: UpstreamEndpoints {
                users: trim(args.users_api),
                thumbnails: trim(args.thumbnails_api),
                groups: trim(args.groups_api),
                friends: trim(args.friends_api),
                games: trim(args.games_api),
            },
            config: AggregatorConfig {
                target_group_id: args.target_group_id,
                target_universe_id: args.target_universe_id,
                avatar_cdn: trim(args.avatar_cdn),
                upstream_timeout: Duration::from_secs(args.upstream_timeout_secs),
                default_title: default_title_metrics(),
            },
        }
    }
}
