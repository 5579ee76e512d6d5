//! Payload shapes of the upstream services. Only the fields the assemblers
//! read are declared; everything else in the bodies is ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct DataList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserSearchEntry {
    pub id: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    #[serde(default)]
    pub description: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub is_banned: bool,
    #[serde(default)]
    pub has_verified_badge: bool,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub target_id: Option<u64>,
    #[serde(default)]
    pub state: String,
    pub image_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub member_count: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RoleRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rank: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GroupRole {
    pub group: GroupRef,
    pub role: RoleRef,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Creator {
    #[serde(default)]
    pub name: String,
}

/// One entry of the aggregate title lookup. Missing fields fall back to the
/// configured baseline individually.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub creator: Option<Creator>,
    pub price: Option<u64>,
    pub visits: Option<u64>,
    pub playing: Option<u64>,
    pub max_players: Option<u32>,
    pub favorited_count: Option<u64>,
    pub genre: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GameVotes {
    #[serde(default)]
    pub up_votes: u64,
    #[serde(default)]
    pub down_votes: u64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesCount {
    pub favorites_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_info_tolerates_nulls() {
        let body = r#"{"data":[{"id":1,"name":"Drills","price":null,"creator":{"id":7,"name":"Team","type":"Group"},"visits":42}]}"#;
        let list: DataList<GameInfo> = serde_json::from_str(body).unwrap();
        let info = &list.data[0];
        assert_eq!(info.name.as_deref(), Some("Drills"));
        assert_eq!(info.price, None);
        assert_eq!(info.visits, Some(42));
        assert_eq!(info.creator.as_ref().map(|c| c.name.as_str()), Some("Team"));
        assert!(info.playing.is_none());
    }

    #[test]
    fn test_user_details_parses_created() {
        let body = r#"{"description":"hi","created":"2006-02-27T21:06:40.3Z","isBanned":false,"hasVerifiedBadge":true,"id":1,"name":"Roblox","displayName":"Roblox"}"#;
        let details: UserDetails = serde_json::from_str(body).unwrap();
        assert!(details.has_verified_badge);
        assert_eq!(details.created.format("%Y").to_string(), "2006");
    }
}
