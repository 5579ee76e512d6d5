use serde::{Deserialize, Serialize};

/// The platform's numeric handle for a username.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub numeric_id: u64,
    pub username: String,
    pub display_name: String,
}
