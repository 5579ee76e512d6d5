use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config::AggregatorConfig;
use crate::controller::profile::{ProfileOutcome, placeholder_avatar_url};
use crate::controller::stats;
use crate::controller::title::TitleOutcome;
use crate::error::ResolutionError;
use crate::model::{
    AggregationResult, AggregationStatus, FallbackField, Identity, Membership, PlayerProfile,
};

const SYNTHETIC_ID_MIN: u64 = 1_000_000;
const SYNTHETIC_ID_MAX: u64 = 5_000_000_000;
const SYNTHETIC_MAX_AGE_YEARS: u32 = 5;
const SYNTHETIC_MAX_FRIENDS: u32 = 250;
const SYNTHETIC_MAX_GROUPS: u32 = 25;

/// Builds the terminal result. Infallible: an unresolved identity yields a
/// fully synthetic, degraded payload.
pub fn compose<R: Rng + ?Sized>(
    requested_username: &str,
    outcome: Result<(ProfileOutcome, TitleOutcome), ResolutionError>,
    config: &AggregatorConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> AggregationResult {
    match outcome {
        Ok((profile, title)) => compose_resolved(profile, title, now, rng),
        Err(err) => compose_synthetic(requested_username, &err, config, now, rng),
    }
}

fn compose_resolved<R: Rng + ?Sized>(
    profile: ProfileOutcome,
    title: TitleOutcome,
    now: DateTime<Utc>,
    rng: &mut R,
) -> AggregationResult {
    let all_succeeded = profile.all_succeeded() && title.all_succeeded();
    let derived_stats = stats::generate(
        profile.profile.membership.is_member,
        profile.profile.account_age_years,
        rng,
    );

    let mut fallbacks = profile.fallbacks;
    fallbacks.extend(title.fallbacks);

    let (status, error_detail) = if all_succeeded {
        (AggregationStatus::Success, None)
    } else {
        let failed: Vec<&str> = fallbacks.iter().map(|f| f.as_str()).collect();
        (
            AggregationStatus::Degraded,
            Some(format!("upstream lookups failed: {}", failed.join(", "))),
        )
    };

    AggregationResult {
        status,
        profile: profile.profile,
        title_metrics: title.metrics,
        derived_stats,
        fallbacks,
        generated_at: now,
        error_detail,
    }
}

fn compose_synthetic<R: Rng + ?Sized>(
    requested_username: &str,
    err: &ResolutionError,
    config: &AggregatorConfig,
    now: DateTime<Utc>,
    rng: &mut R,
) -> AggregationResult {
    let account_age_years = rng.gen_range(1..=SYNTHETIC_MAX_AGE_YEARS);
    let identity = Identity {
        numeric_id: rng.gen_range(SYNTHETIC_ID_MIN..=SYNTHETIC_ID_MAX),
        username: requested_username.to_string(),
        display_name: requested_username.to_string(),
    };

    let profile = PlayerProfile {
        identity,
        description: String::new(),
        created_at: now - Duration::days(i64::from(account_age_years) * 365),
        is_verified: false,
        is_deleted: false,
        avatar_url: placeholder_avatar_url(&config.avatar_cdn, rng),
        membership: Membership::default(),
        groups: Vec::new(),
        friends: Vec::new(),
        group_count: rng.gen_range(0..=SYNTHETIC_MAX_GROUPS),
        friend_count: rng.gen_range(0..=SYNTHETIC_MAX_FRIENDS),
        account_age_years,
    };

    let derived_stats = stats::generate(false, account_age_years, rng);

    AggregationResult {
        status: AggregationStatus::Degraded,
        profile,
        title_metrics: config.default_title.clone(),
        derived_stats,
        fallbacks: vec![FallbackField::Identity],
        generated_at: now,
        error_detail: Some(err.to_string()),
    }
}
