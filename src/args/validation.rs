use super::types::Args;

pub const MAX_TIMEOUT_SECS: u64 = 60;

/// # Errors
///
/// Will return `Err` if the value is not an http(s) URL
pub fn check_base_url(name: &str, value: &str) -> Result<(), String> {
    let parsed = reqwest::Url::parse(value)
        .map_err(|e| format!("{name} '{value}' is not a valid URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("{name} '{value}' must be http or https, not {other}")),
    }
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if a base URL, id, or the timeout is out of range
    pub fn validate(&self) -> Result<(), String> {
        let urls = [
            ("users_api", &self.users_api),
            ("thumbnails_api", &self.thumbnails_api),
            ("groups_api", &self.groups_api),
            ("friends_api", &self.friends_api),
            ("games_api", &self.games_api),
            ("avatar_cdn", &self.avatar_cdn),
        ];
        for (name, value) in urls {
            check_base_url(name, value)?;
        }

        if self.upstream_timeout_secs == 0 || self.upstream_timeout_secs > MAX_TIMEOUT_SECS {
            return Err(format!(
                "upstream_timeout_secs must be between 1 and {MAX_TIMEOUT_SECS}"
            ));
        }
        if self.target_group_id == 0 {
            return Err("target_group_id is required".to_string());
        }
        if self.target_universe_id == 0 {
            return Err("target_universe_id is required".to_string());
        }
        if self.host.trim().is_empty() {
            return Err("host is required".to_string());
        }
        Ok(())
    }
}
