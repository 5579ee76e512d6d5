use log::warn;

use crate::error::{ResolutionError, UpstreamErrorKind};
use crate::model::Identity;
use crate::upstream::UpstreamClient;

/// Turns a username into the platform identity every later lookup keys on.
///
/// # Errors
///
/// Will return `Err` if the name does not resolve or the lookup fails; there is no retry
pub async fn resolve(
    client: &dyn UpstreamClient,
    username: &str,
) -> Result<Identity, ResolutionError> {
    let entries = match client.search_users(username).await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("identity lookup for {username} failed: {e}");
            return Err(match e.kind {
                UpstreamErrorKind::HttpStatus(400 | 404) => {
                    ResolutionError::NotFound(username.to_string())
                }
                _ => ResolutionError::Upstream(e),
            });
        }
    };

    let entry = entries
        .into_iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(username))
        .ok_or_else(|| ResolutionError::NotFound(username.to_string()))?;

    let numeric_id = entry
        .id
        .ok_or_else(|| ResolutionError::NotFound(username.to_string()))?;

    let display_name = if entry.display_name.is_empty() {
        entry.name.clone()
    } else {
        entry.display_name
    };

    Ok(Identity {
        numeric_id,
        username: entry.name,
        display_name,
    })
}
