use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identity;

const DAYS_PER_YEAR: i64 = 365;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    pub group_id: u64,
    pub group_name: String,
    pub member_count: u64,
    pub role_name: String,
    pub rank: u32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FriendSummary {
    pub id: u64,
    pub name: String,
    pub display_name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    pub is_member: bool,
    pub role_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub identity: Identity,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub is_verified: bool,
    pub is_deleted: bool,
    pub avatar_url: String,
    pub membership: Membership,
    pub groups: Vec<GroupMembership>,
    pub friends: Vec<FriendSummary>,
    pub group_count: u32,
    pub friend_count: u32,
    pub account_age_years: u32,
}

/// Whole years between `created_at` and `now`, never negative.
#[must_use]
pub fn account_age_years(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let days = (now - created_at).num_days();
    if days <= 0 {
        return 0;
    }
    u32::try_from(days / DAYS_PER_YEAR).unwrap_or(u32::MAX)
}
