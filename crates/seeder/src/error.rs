use models::collection::Collection;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the MockAPI service
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from /{collection}")]
    UnexpectedStatus {
        collection: Collection,
        status: StatusCode,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("enrollment window of {0} days is too large")]
    InvalidWindow(u32),

    #[error("invalid status weights: {0}")]
    InvalidWeights(#[from] rand::distr::weighted::Error),
}
