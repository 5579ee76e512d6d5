use std::sync::Arc;

use chrono::Utc;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::AggregatorConfig;
use crate::controller::compose::compose;
use crate::controller::profile::assemble_profile;
use crate::controller::resolver::resolve;
use crate::controller::title::assemble_title;
use crate::model::AggregationResult;
use crate::upstream::UpstreamClient;

/// Runs the whole pipeline for one username. Holds no per-request state, so
/// one instance is shared by every worker.
#[derive(Clone)]
pub struct Aggregator {
    client: Arc<dyn UpstreamClient>,
    config: Arc<AggregatorConfig>,
}

impl Aggregator {
    #[must_use]
    pub fn new(client: Arc<dyn UpstreamClient>, config: AggregatorConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AggregatorConfig {
        &self.config
    }

    pub async fn aggregate(&self, username: &str) -> AggregationResult {
        let mut rng = StdRng::from_entropy();
        self.aggregate_with_rng(username, &mut rng).await
    }

    /// Resolve first, then the profile and title lookups side by side. All
    /// upstream futures are polled on the caller's task, so dropping the
    /// returned future abandons any call still in flight.
    pub async fn aggregate_with_rng<R: Rng + ?Sized>(
        &self,
        username: &str,
        rng: &mut R,
    ) -> AggregationResult {
        let now = Utc::now();
        let client = self.client.as_ref();
        let config = self.config.as_ref();

        let outcome = match resolve(client, username).await {
            Ok(identity) => {
                let (profile, title) = futures::join!(
                    assemble_profile(identity, client, config, now, &mut *rng),
                    assemble_title(client, config),
                );
                Ok((profile, title))
            }
            Err(e) => Err(e),
        };

        let result = compose(username, outcome, config, now, rng);
        info!(
            "aggregated {username}: {:?} ({} fallbacks)",
            result.status,
            result.fallbacks.len()
        );
        result
    }
}
