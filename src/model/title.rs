use serde::{Deserialize, Serialize};

/// Popularity figures for the tracked title.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TitleMetrics {
    pub visits: u64,
    pub currently_playing: u64,
    pub favorites_count: u64,
    pub rating_fraction: f64,
    pub name: String,
    pub description: String,
    pub creator_name: String,
    pub genre: String,
    pub max_players: u32,
    pub price: u64,
}

pub const MAX_RATING: f64 = 5.0;

/// `up / (up + down) * 5`, rounded to one decimal. `None` when there are no votes.
#[must_use]
pub fn rating_from_votes(up_votes: u64, down_votes: u64) -> Option<f64> {
    let total = up_votes.saturating_add(down_votes);
    if total == 0 {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let raw = up_votes as f64 / total as f64 * MAX_RATING;
    Some(round_rating(raw))
}

#[must_use]
pub fn round_rating(rating: f64) -> f64 {
    let clamped = rating.clamp(0.0, MAX_RATING);
    (clamped * 10.0).round() / 10.0
}
