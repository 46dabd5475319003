//! The recipe grid: one card per fetched recipe, server order preserved.

use leptos::prelude::*;
use recipe_feed::RecipeSummary;

/// Lookup key of a card's image element.
pub fn img_test_id(id: u64) -> String {
    format!("img-recipe-{id}")
}

/// Lookup key of a card's title element.
pub fn title_test_id(id: u64) -> String {
    format!("title-recipe-{id}")
}

#[component]
pub fn RecipeGrid(recipes: ReadSignal<Vec<RecipeSummary>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
            {move || {
                recipes
                    .get()
                    .into_iter()
                    .map(|recipe| view! { <RecipeCard recipe=recipe /> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn RecipeCard(recipe: RecipeSummary) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden">
            <img
                data-testid=img_test_id(recipe.id)
                src=recipe.image
                alt=recipe.name.clone()
                class="w-full h-48 object-cover"
            />
            <div class="p-4">
                <h3
                    data-testid=title_test_id(recipe.id)
                    class="text-lg font-semibold text-gray-900"
                >
                    {recipe.name}
                </h3>
                <div class="text-sm text-gray-600 mt-1">
                    {format!("★ {}", recipe.rating)}
                </div>
                <ul class="flex flex-wrap gap-2 mt-3">
                    {recipe
                        .tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <li class="text-xs bg-gray-100 text-gray-600 rounded-full px-2 py-1">
                                    {tag}
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
