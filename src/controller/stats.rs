use rand::Rng;

use crate::model::DerivedStats;

const MEMBER_MULTIPLIER: f64 = 2.5;
const NON_MEMBER_MULTIPLIER: f64 = 1.0;
const TENURE_YEARS_PER_STEP: f64 = 5.0;
const MAX_TENURE_MULTIPLIER: f64 = 2.0;

const GLOBAL_RANK_BOUND: u32 = 50;
const REGIONAL_RANK_BOUND: u32 = 100;
const WEEKLY_RANK_BOUND: u32 = 200;
const SEASONAL_RANK_BOUND: u32 = 150;

#[must_use]
pub fn membership_multiplier(is_member: bool) -> f64 {
    if is_member {
        MEMBER_MULTIPLIER
    } else {
        NON_MEMBER_MULTIPLIER
    }
}

#[must_use]
pub fn tenure_multiplier(account_age_years: u32) -> f64 {
    (f64::from(account_age_years) / TENURE_YEARS_PER_STEP).min(MAX_TENURE_MULTIPLIER)
}

#[must_use]
pub fn total_multiplier(is_member: bool, account_age_years: u32) -> f64 {
    membership_multiplier(is_member) * tenure_multiplier(account_age_years)
}

/// Engagement figures scaled by membership and tenure. The platform exposes no
/// per-player telemetry, so these are always drawn from `rng`.
pub fn generate<R: Rng + ?Sized>(
    is_member: bool,
    account_age_years: u32,
    rng: &mut R,
) -> DerivedStats {
    let multiplier = total_multiplier(is_member, account_age_years);
    let mut scaled = |low: f64, high: f64| -> u64 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let value = (rng.gen_range(low..high) * multiplier).floor() as u64;
        value
    };

    let alarms_pulled = scaled(1000.0, 5000.0);
    let drills_completed = scaled(100.0, 400.0);
    let hours_played = scaled(150.0, 550.0);
    let achievements = scaled(20.0, 70.0);

    DerivedStats {
        alarms_pulled,
        drills_completed,
        hours_played,
        achievements,
        global_rank: rng.gen_range(1..=GLOBAL_RANK_BOUND),
        regional_rank: rng.gen_range(1..=REGIONAL_RANK_BOUND),
        weekly_rank: rng.gen_range(1..=WEEKLY_RANK_BOUND),
        seasonal_rank: rng.gen_range(1..=SEASONAL_RANK_BOUND),
    }
}
