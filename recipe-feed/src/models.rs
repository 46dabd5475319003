use serde::{Deserialize, Serialize};

/// One recipe's displayable fields. The upstream endpoint sends a much larger
/// object per recipe; everything we don't render is ignored on decode.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub rating: f64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Wire envelope of the recipes endpoint: `{"recipes": [...]}`.
#[derive(Debug, Deserialize)]
pub struct RecipeFeed {
    pub recipes: Vec<RecipeSummary>,
}

/// Drop recipes whose id was already seen, keeping server order otherwise.
///
/// The endpoint is supposed to hand out unique ids, but card lookup keys are
/// derived from them, so colliding ids must never reach the UI. First
/// occurrence wins.
pub fn dedup_by_id(recipes: Vec<RecipeSummary>) -> Vec<RecipeSummary> {
    let mut seen = std::collections::HashSet::new();
    recipes
        .into_iter()
        .filter(|recipe| seen.insert(recipe.id))
        .collect()
}
