use chrono::{DateTime, Utc};
use log::warn;
use rand::Rng;

use crate::config::AggregatorConfig;
use crate::model::{
    FallbackField, FriendSummary, GroupMembership, Identity, Membership, PlayerProfile,
    account_age_years,
};
use crate::upstream::UpstreamClient;
use crate::upstream::wire::{Friend, GroupRole};

const AVATAR_SIZE: u32 = 150;

/// A profile plus the lookups that had to be substituted to build it.
#[derive(Debug, Clone)]
pub struct ProfileOutcome {
    pub profile: PlayerProfile,
    pub fallbacks: Vec<FallbackField>,
}

impl ProfileOutcome {
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

impl From<GroupRole> for GroupMembership {
    fn from(role: GroupRole) -> Self {
        Self {
            group_id: role.group.id,
            group_name: role.group.name,
            member_count: role.group.member_count,
            role_name: role.role.name,
            rank: role.role.rank,
        }
    }
}

impl From<Friend> for FriendSummary {
    fn from(friend: Friend) -> Self {
        Self {
            id: friend.id,
            name: friend.name,
            display_name: friend.display_name,
        }
    }
}

/// `{cdn}/{token}/150/150/Image`, used whenever no real headshot is available.
pub fn placeholder_avatar_url<R: Rng + ?Sized>(cdn: &str, rng: &mut R) -> String {
    let token: u128 = rng.r#gen();
    format!(
        "{}/{token:032x}/{AVATAR_SIZE}/{AVATAR_SIZE}/Image",
        cdn.trim_end_matches('/')
    )
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Issues the five per-user lookups concurrently and merges them. A failed
/// lookup is logged, recorded in `fallbacks`, and replaced by its default.
pub async fn assemble_profile<R: Rng + ?Sized>(
    identity: Identity,
    client: &dyn UpstreamClient,
    config: &AggregatorConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ProfileOutcome {
    let user_id = identity.numeric_id;
    let (details, avatar, roles, friends, membership) = futures::join!(
        client.user_details(user_id),
        client.avatar_headshot(user_id),
        client.group_roles(user_id),
        client.friends(user_id),
        client.group_membership(user_id, config.target_group_id),
    );

    let mut fallbacks = Vec::new();
    let mut substitute = |field: FallbackField, err: &dyn std::fmt::Display| {
        warn!("{field} lookup for user {user_id} failed, substituting: {err}");
        fallbacks.push(field);
    };

    let (description, created_at, is_verified, is_deleted) = match details {
        Ok(d) => (d.description, d.created, d.has_verified_badge, d.is_banned),
        Err(e) => {
            substitute(FallbackField::UserDetails, &e);
            (String::new(), now, false, false)
        }
    };

    let avatar_url = match avatar {
        Ok(url) => url,
        Err(e) => {
            substitute(FallbackField::Avatar, &e);
            placeholder_avatar_url(&config.avatar_cdn, rng)
        }
    };

    let groups: Vec<GroupMembership> = match roles {
        Ok(roles) => roles.into_iter().map(GroupMembership::from).collect(),
        Err(e) => {
            substitute(FallbackField::Groups, &e);
            Vec::new()
        }
    };

    let friends: Vec<FriendSummary> = match friends {
        Ok(friends) => friends.into_iter().map(FriendSummary::from).collect(),
        Err(e) => {
            substitute(FallbackField::Friends, &e);
            Vec::new()
        }
    };

    let membership = match membership {
        Ok(Some(role)) => Membership {
            is_member: true,
            role_name: Some(role.role.name),
        },
        Ok(None) => Membership::default(),
        Err(e) => {
            substitute(FallbackField::Membership, &e);
            Membership::default()
        }
    };

    let profile = PlayerProfile {
        identity,
        description,
        created_at,
        is_verified,
        is_deleted,
        avatar_url,
        membership,
        group_count: count(groups.len()),
        friend_count: count(friends.len()),
        groups,
        friends,
        account_age_years: account_age_years(created_at, now),
    };

    ProfileOutcome { profile, fallbacks }
}
