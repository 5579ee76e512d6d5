use serde::{Deserialize, Serialize};

/// Synthetic engagement figures. Always generated locally.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub alarms_pulled: u64,
    pub drills_completed: u64,
    pub hours_played: u64,
    pub achievements: u64,
    pub global_rank: u32,
    pub regional_rank: u32,
    pub weekly_rank: u32,
    pub seasonal_rank: u32,
}
