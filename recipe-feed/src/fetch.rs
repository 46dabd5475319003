use crate::error::FeedError;
use crate::models::{dedup_by_id, RecipeFeed, RecipeSummary};

/// Fetch the recipe collection from the given endpoint.
///
/// Single attempt, no retry. Like the browser `fetch` API we don't treat a
/// non-2xx status as a transport error; a body that isn't the recipes
/// envelope shows up as [`FeedError::Decode`].
pub async fn fetch_recipes(endpoint: &str) -> Result<Vec<RecipeSummary>, FeedError> {
    log::debug!("fetching recipes from {endpoint}");
    let response = reqwest::get(endpoint).await?;
    let body = response.bytes().await?;
    let feed: RecipeFeed = serde_json::from_slice(&body)?;
    Ok(dedup_by_id(feed.recipes))
}

/// Turn a fetch outcome into the new collection value, if any.
///
/// On failure the error goes through `report` exactly once and the caller is
/// told to keep its current collection. This is the whole failure mode of the
/// page: no retry, no error UI.
pub fn resolve_fetch<F>(
    outcome: Result<Vec<RecipeSummary>, FeedError>,
    report: F,
) -> Option<Vec<RecipeSummary>>
where
    F: FnOnce(&FeedError),
{
    match outcome {
        Ok(recipes) => Some(recipes),
        Err(err) => {
            report(&err);
            None
        }
    }
}
