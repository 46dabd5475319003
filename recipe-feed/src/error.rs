use thiserror::Error;

/// Errors that can occur while loading the recipe feed.
///
/// Both variants get the same treatment at the call site: logged once, never
/// surfaced to the page.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The request itself failed (DNS, connection, TLS, ...).
    #[error("failed to fetch recipes: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The response body was not the expected recipes envelope.
    #[error("failed to decode recipes payload: {0}")]
    Decode(#[from] serde_json::Error),
}
