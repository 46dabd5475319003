use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_feed::{fetch_recipes, resolve_fetch, RecipeSummary};

use crate::config::PageConfig;
use crate::grid::RecipeGrid;
use crate::sections::{Banner, Footer, NavBar};

#[component]
pub fn App() -> impl IntoView {
    let config = PageConfig::load();
    let (recipes, set_recipes) = signal(Vec::<RecipeSummary>::new());

    // One fetch per mount. The page renders with the empty collection first;
    // the signal is written only once the request resolves, and never after
    // the component has been torn down.
    let alive = Arc::new(AtomicBool::new(true));
    on_cleanup({
        let alive = Arc::clone(&alive);
        move || alive.store(false, Ordering::Relaxed)
    });

    let endpoint = config.api.recipes_url.clone();
    spawn_local(async move {
        let outcome = fetch_recipes(&endpoint).await;
        if !alive.load(Ordering::Relaxed) {
            return;
        }
        if let Some(collection) = resolve_fetch(outcome, |err| log::error!("{err}")) {
            set_recipes.set(collection);
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50">
            <NavBar config=config.navbar.clone() />
            <Banner config=config.banner.clone() />
            <main class="max-w-6xl mx-auto px-4 py-8">
                <RecipeGrid recipes=recipes />
            </main>
            <Footer config=config.footer.clone() />
        </div>
    }
}
