#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpResponse, HttpServer, web};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;

use player_aggregate::config::AggregatorConfig;
use player_aggregate::upstream::wire::{
    Friend, GameInfo, GameVotes, GroupRole, UserDetails, UserSearchEntry,
};
use player_aggregate::upstream::{UpstreamClient, UpstreamResult};
use player_aggregate::{Aggregator, UpstreamError};

pub const USER_ID: u64 = 1;
pub const GROUP_ID: u64 = 35_815_907;
pub const UNIVERSE_ID: u64 = 6_149_304_133;
pub const AVATAR_URL: &str = "https://tr.rbxcdn.com/30DAY-AvatarHeadshot-AAAA/150/150/AvatarHeadshot/Png";

/// An `UpstreamClient` that answers every lookup with a canned outcome.
#[derive(Clone)]
pub struct ScriptedClient {
    pub search: UpstreamResult<Vec<UserSearchEntry>>,
    pub details: UpstreamResult<UserDetails>,
    pub avatar: UpstreamResult<String>,
    pub roles: UpstreamResult<Vec<GroupRole>>,
    pub membership: UpstreamResult<Option<GroupRole>>,
    pub friends: UpstreamResult<Vec<Friend>>,
    pub game: UpstreamResult<GameInfo>,
    pub votes: UpstreamResult<GameVotes>,
    pub favorites: UpstreamResult<u64>,
}

fn parse<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).expect("fixture should deserialize")
}

pub fn server_error() -> UpstreamError {
    UpstreamError::status(500, "Internal Server Error")
}

pub fn created_years_ago(years: i64) -> DateTime<Utc> {
    Utc::now() - chrono::Duration::days(years * 365 + 30)
}

impl ScriptedClient {
    /// Every lookup succeeds for the user "Roblox".
    pub fn healthy() -> Self {
        Self {
            search: Ok(parse(json!([
                {"id": 2, "name": "RobloxFan", "displayName": "Fan"},
                {"id": USER_ID, "name": "Roblox", "displayName": "Roblox"}
            ]))),
            details: Ok(parse(json!({
                "description": "Welcome to the Roblox profile!",
                "created": created_years_ago(3).to_rfc3339(),
                "isBanned": false,
                "hasVerifiedBadge": true
            }))),
            avatar: Ok(AVATAR_URL.to_string()),
            roles: Ok(parse(json!([
                {"group": {"id": 7, "name": "Builders", "memberCount": 1200}, "role": {"name": "Member", "rank": 1}},
                {"group": {"id": 8, "name": "Scripters", "memberCount": 300}, "role": {"name": "Owner", "rank": 255}}
            ]))),
            membership: Ok(None),
            friends: Ok(parse(json!([
                {"id": 10, "name": "builderman", "displayName": "Builderman"},
                {"id": 11, "name": "stickmasterluke", "displayName": "Luke"},
                {"id": 12, "name": "merely", "displayName": "Merely"}
            ]))),
            game: Ok(parse(json!({
                "name": "Alarm Tycoon",
                "description": "Ring every bell.",
                "creator": {"name": "Bell Co"},
                "price": null,
                "visits": 9_000_000u64,
                "playing": 420,
                "maxPlayers": 24,
                "favoritedCount": 5000,
                "genre": "Town and City"
            }))),
            votes: Ok(parse(json!({"upVotes": 80, "downVotes": 20}))),
            favorites: Ok(6000),
        }
    }

    /// Identity resolves, every other lookup answers 500.
    pub fn resolvable_but_failing() -> Self {
        Self {
            details: Err(server_error()),
            avatar: Err(server_error()),
            roles: Err(server_error()),
            membership: Err(server_error()),
            friends: Err(server_error()),
            game: Err(server_error()),
            votes: Err(server_error()),
            favorites: Err(server_error()),
            ..Self::healthy()
        }
    }

    pub fn member(mut self, role: &str, years: i64) -> Self {
        self.membership = Ok(Some(parse(json!({
            "group": {"id": GROUP_ID, "name": "Drill Team", "memberCount": 50},
            "role": {"name": role, "rank": 200}
        }))));
        self.details = Ok(parse(json!({
            "description": "",
            "created": created_years_ago(years).to_rfc3339(),
            "isBanned": false,
            "hasVerifiedBadge": false
        })));
        self
    }

    pub fn into_aggregator(self) -> Aggregator {
        Aggregator::new(Arc::new(self), AggregatorConfig::default())
    }
}

#[async_trait]
impl UpstreamClient for ScriptedClient {
    async fn search_users(&self, _username: &str) -> UpstreamResult<Vec<UserSearchEntry>> {
        self.search.clone()
    }

    async fn user_details(&self, _user_id: u64) -> UpstreamResult<UserDetails> {
        self.details.clone()
    }

    async fn avatar_headshot(&self, _user_id: u64) -> UpstreamResult<String> {
        self.avatar.clone()
    }

    async fn group_roles(&self, _user_id: u64) -> UpstreamResult<Vec<GroupRole>> {
        self.roles.clone()
    }

    async fn group_membership(
        &self,
        _user_id: u64,
        _group_id: u64,
    ) -> UpstreamResult<Option<GroupRole>> {
        self.membership.clone()
    }

    async fn friends(&self, _user_id: u64) -> UpstreamResult<Vec<Friend>> {
        self.friends.clone()
    }

    async fn game_info(&self, _universe_id: u64) -> UpstreamResult<GameInfo> {
        self.game.clone()
    }

    async fn game_votes(&self, _universe_id: u64) -> UpstreamResult<GameVotes> {
        self.votes.clone()
    }

    async fn favorites_count(&self, _universe_id: u64) -> UpstreamResult<u64> {
        self.favorites.clone()
    }
}

// A stand-in for the platform APIs, served from one local host.
// User 1 is healthy; user 2 gets 500s, user 3 gets broken JSON, user 4 is slow.

pub const SLOW_USER: u64 = 4;
pub const SLOW_DELAY: Duration = Duration::from_secs(3);

async fn fake_search(query: web::Query<std::collections::HashMap<String, String>>) -> HttpResponse {
    let keyword = query.get("keyword").cloned().unwrap_or_default();
    if keyword.eq_ignore_ascii_case("roblox") {
        HttpResponse::Ok().json(json!({"data": [
            {"id": USER_ID, "name": "Roblox", "displayName": "Roblox", "hasVerifiedBadge": true}
        ]}))
    } else if keyword == "bad_request" {
        HttpResponse::BadRequest().json(json!({"errors": [{"code": 6, "message": "bad keyword"}]}))
    } else {
        HttpResponse::Ok().json(json!({"data": []}))
    }
}

async fn fake_user(path: web::Path<u64>) -> HttpResponse {
    match path.into_inner() {
        USER_ID => HttpResponse::Ok().json(json!({
            "description": "Welcome to the Roblox profile!",
            "created": "2006-02-27T21:06:40.3Z",
            "isBanned": false,
            "externalAppDisplayName": null,
            "hasVerifiedBadge": true,
            "id": USER_ID,
            "name": "Roblox",
            "displayName": "Roblox"
        })),
        2 => HttpResponse::InternalServerError().finish(),
        3 => HttpResponse::Ok().content_type("application/json").body("{\"description\": "),
        SLOW_USER => {
            actix_web::rt::time::sleep(SLOW_DELAY).await;
            HttpResponse::Ok().json(json!({"created": "2006-02-27T21:06:40.3Z"}))
        }
        _ => HttpResponse::NotFound().finish(),
    }
}

async fn fake_headshot(query: web::Query<std::collections::HashMap<String, String>>) -> HttpResponse {
    let id: u64 = query.get("userIds").and_then(|s| s.parse().ok()).unwrap_or_default();
    if id == USER_ID {
        HttpResponse::Ok().json(json!({"data": [
            {"targetId": USER_ID, "state": "Completed", "imageUrl": AVATAR_URL, "version": "TN3"}
        ]}))
    } else {
        HttpResponse::Ok().json(json!({"data": [
            {"targetId": id, "state": "Blocked", "imageUrl": "", "version": "TN3"}
        ]}))
    }
}

async fn fake_roles() -> HttpResponse {
    HttpResponse::Ok().json(json!({"data": [
        {"group": {"id": 7, "name": "Builders", "memberCount": 1200, "hasVerifiedBadge": false},
         "role": {"id": 1, "name": "Member", "rank": 1}},
        {"group": {"id": GROUP_ID, "name": "Drill Team", "memberCount": 50, "hasVerifiedBadge": false},
         "role": {"id": 2, "name": "Captain", "rank": 200}}
    ]}))
}

async fn fake_friends() -> HttpResponse {
    HttpResponse::Ok().json(json!({"data": [
        {"id": 10, "name": "builderman", "displayName": "Builderman", "isOnline": false}
    ]}))
}

async fn fake_games() -> HttpResponse {
    HttpResponse::Ok().json(json!({"data": [{
        "id": UNIVERSE_ID,
        "rootPlaceId": 1,
        "name": "Alarm Tycoon",
        "description": "Ring every bell.",
        "creator": {"id": 9, "name": "Bell Co", "type": "Group"},
        "price": null,
        "visits": 9_000_000u64,
        "playing": 420,
        "maxPlayers": 24,
        "favoritedCount": 5000,
        "genre": "Town and City"
    }]}))
}

async fn fake_votes() -> HttpResponse {
    HttpResponse::Ok().json(json!({"data": [{"id": UNIVERSE_ID, "upVotes": 80, "downVotes": 20}]}))
}

async fn fake_favorites() -> HttpResponse {
    HttpResponse::Ok().json(json!({"favoritesCount": 6000}))
}

fn fake_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/v1/users/search", web::get().to(fake_search))
        .route("/v1/users/avatar-headshot", web::get().to(fake_headshot))
        .route("/v1/users/{id}", web::get().to(fake_user))
        .route("/v1/users/{id}/groups/roles", web::get().to(fake_roles))
        .route("/v2/users/{id}/groups/roles", web::get().to(fake_roles))
        .route("/v1/users/{id}/friends", web::get().to(fake_friends))
        .route("/v1/games", web::get().to(fake_games))
        .route("/v1/games/votes", web::get().to(fake_votes))
        .route("/v1/games/{id}/favorites/count", web::get().to(fake_favorites));
}

/// Starts the fake platform on an ephemeral port and returns its base URL.
pub fn spawn_fake_upstream() -> std::io::Result<String> {
    let server = HttpServer::new(|| App::new().configure(fake_routes))
        .workers(1)
        .bind(("127.0.0.1", 0))?;
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    Ok(format!("http://{addr}"))
}
