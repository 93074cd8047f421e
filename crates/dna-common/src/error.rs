/// Error types shared across Team DNA server crates.
///
/// These errors represent failures in infrastructure components (the analytics endpoint,
/// serialization) that more than one crate touches. Application-specific errors are defined
/// in each server crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("analytics request failed: {0}")]
    AnalyticsRequest(#[from] reqwest::Error),

    #[error("analytics endpoint rejected row: status={status} body={body}")]
    AnalyticsRejected {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("analytics disabled: TEAM_DNA_ANALYTICS_URL is not set")]
    AnalyticsDisabled,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
