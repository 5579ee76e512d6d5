pub mod args;
pub mod config;
pub mod error;
pub mod model;
pub mod upstream;
pub mod controller {
    pub mod aggregate;
    pub mod compose;
    pub mod handler;
    pub mod profile;
    pub mod resolver;
    pub mod stats;
    pub mod title;
}

// Re-export commonly used items for the binary and the integration tests
pub use controller::aggregate::Aggregator;
pub use error::{ResolutionError, UpstreamError, UpstreamErrorKind};
pub use model::AggregationResult;
pub use upstream::{HttpUpstreamClient, UpstreamClient};
