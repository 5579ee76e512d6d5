use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::{DerivedStats, PlayerProfile, TitleMetrics};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AggregationStatus {
    Success,
    Degraded,
}

/// A lookup whose value was substituted rather than fetched.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FallbackField {
    Identity,
    UserDetails,
    Avatar,
    Groups,
    Friends,
    Membership,
    TitleInfo,
    TitleVotes,
    TitleFavorites,
}

impl FallbackField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FallbackField::Identity => "identity",
            FallbackField::UserDetails => "userDetails",
            FallbackField::Avatar => "avatar",
            FallbackField::Groups => "groups",
            FallbackField::Friends => "friends",
            FallbackField::Membership => "membership",
            FallbackField::TitleInfo => "titleInfo",
            FallbackField::TitleVotes => "titleVotes",
            FallbackField::TitleFavorites => "titleFavorites",
        }
    }
}

impl std::fmt::Display for FallbackField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete response for one username. Built once by the composer.
#[derive(Clone, Debug)]
pub struct AggregationResult {
    pub status: AggregationStatus,
    pub profile: PlayerProfile,
    pub title_metrics: TitleMetrics,
    pub derived_stats: DerivedStats,
    pub fallbacks: Vec<FallbackField>,
    pub generated_at: DateTime<Utc>,
    pub error_detail: Option<String>,
}

impl AggregationResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == AggregationStatus::Success
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AggregationResultWire<'a> {
    success: bool,
    status: AggregationStatus,
    profile: &'a PlayerProfile,
    title_metrics: &'a TitleMetrics,
    derived_stats: &'a DerivedStats,
    fallbacks: &'a [FallbackField],
    generated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_detail: Option<&'a str>,
}

impl Serialize for AggregationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AggregationResultWire {
            success: self.is_success(),
            status: self.status,
            profile: &self.profile,
            title_metrics: &self.title_metrics,
            derived_stats: &self.derived_stats,
            fallbacks: &self.fallbacks,
            generated_at: self.generated_at,
            error_detail: self.error_detail.as_deref(),
        }
        .serialize(serializer)
    }
}
