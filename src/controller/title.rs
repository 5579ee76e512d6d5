use log::warn;

use crate::config::AggregatorConfig;
use crate::model::{FallbackField, TitleMetrics, rating_from_votes, round_rating};
use crate::upstream::UpstreamClient;

#[derive(Debug, Clone)]
pub struct TitleOutcome {
    pub metrics: TitleMetrics,
    pub fallbacks: Vec<FallbackField>,
}

impl TitleOutcome {
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

/// Fetches the tracked title's figures on top of the configured baseline.
/// Each of the three lookups overrides only the fields it owns.
pub async fn assemble_title(client: &dyn UpstreamClient, config: &AggregatorConfig) -> TitleOutcome {
    let universe_id = config.target_universe_id;
    let (info, votes, favorites) = futures::join!(
        client.game_info(universe_id),
        client.game_votes(universe_id),
        client.favorites_count(universe_id),
    );

    let mut metrics = config.default_title.clone();
    let mut fallbacks = Vec::new();

    match info {
        Ok(info) => {
            let base = &config.default_title;
            metrics.visits = info.visits.unwrap_or(base.visits);
            metrics.currently_playing = info.playing.unwrap_or(base.currently_playing);
            metrics.favorites_count = info.favorited_count.unwrap_or(base.favorites_count);
            metrics.name = info.name.unwrap_or_else(|| base.name.clone());
            metrics.description = info.description.unwrap_or_else(|| base.description.clone());
            metrics.creator_name = info
                .creator
                .map(|c| c.name)
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| base.creator_name.clone());
            metrics.genre = info.genre.unwrap_or_else(|| base.genre.clone());
            metrics.max_players = info.max_players.unwrap_or(base.max_players);
            metrics.price = info.price.unwrap_or(base.price);
        }
        Err(e) => {
            warn!("title info lookup for universe {universe_id} failed, keeping defaults: {e}");
            fallbacks.push(FallbackField::TitleInfo);
        }
    }

    match votes {
        Ok(votes) => {
            if let Some(rating) = rating_from_votes(votes.up_votes, votes.down_votes) {
                metrics.rating_fraction = rating;
            }
        }
        Err(e) => {
            warn!("vote lookup for universe {universe_id} failed, keeping default rating: {e}");
            fallbacks.push(FallbackField::TitleVotes);
        }
    }

    match favorites {
        Ok(count) => metrics.favorites_count = count,
        Err(e) => {
            warn!("favorites lookup for universe {universe_id} failed: {e}");
            fallbacks.push(FallbackField::TitleFavorites);
        }
    }

    metrics.rating_fraction = round_rating(metrics.rating_fraction);

    TitleOutcome { metrics, fallbacks }
}
