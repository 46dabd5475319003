//! DOM tests for the rendered page, run in a browser via wasm-bindgen-test
//! (`wasm-pack test --headless --chrome web`). Compiled only for wasm32.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use my_recipe_web::config::PageConfig;
use my_recipe_web::grid::RecipeGrid;
use my_recipe_web::sections::{Banner, Footer, NavBar};
use recipe_feed::RecipeSummary;

wasm_bindgen_test_configure!(run_in_browser);

/// Mount a view into a fresh root element so tests don't see each other's
/// output, and return the root for scoped queries.
fn mount<F, N>(f: F) -> web_sys::Element
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    leptos::mount::mount_to(root.clone().unchecked_into(), f).forget();
    root
}

fn by_test_id(root: &web_sys::Element, test_id: &str) -> web_sys::Element {
    root.query_selector(&format!("[data-testid='{test_id}']"))
        .unwrap()
        .unwrap_or_else(|| panic!("no element with test id {test_id}"))
}

fn three_recipes() -> Vec<RecipeSummary> {
    (1..=3)
        .map(|n| RecipeSummary {
            id: n,
            name: format!("Recipe {n}"),
            image: format!("image{n}.jpg"),
            rating: 4.5,
            tags: vec![format!("tag{}", 2 * n - 1), format!("tag{}", 2 * n)],
        })
        .collect()
}

#[wasm_bindgen_test]
fn banner_renders_with_configured_attributes() {
    let config = PageConfig::load().banner;
    let expected = config.clone();
    let root = mount(move || view! { <Banner config=config /> });

    let banner = by_test_id(&root, "image-banner");
    assert_eq!(banner.get_attribute("src").unwrap(), expected.src);
    assert_eq!(banner.get_attribute("alt").unwrap(), expected.alt);
}

#[wasm_bindgen_test]
fn navbar_shows_title_and_search_form() {
    let config = PageConfig::load().navbar;
    let root = mount(move || view! { <NavBar config=config /> });

    let title = by_test_id(&root, "my-recipe");
    assert_eq!(title.text_content().unwrap(), "My Recipe");

    let form = by_test_id(&root, "form-search");
    assert_eq!(form.get_attribute("role").unwrap(), "search");

    let input = by_test_id(&root, "search-input");
    assert_eq!(input.get_attribute("type").unwrap(), "search");
}

#[wasm_bindgen_test]
fn search_submit_is_default_prevented() {
    let config = PageConfig::load().navbar;
    let root = mount(move || view! { <NavBar config=config /> });

    let input: web_sys::HtmlInputElement =
        by_test_id(&root, "search-input").unchecked_into();
    input.set_value("Pizza");
    let typed = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&typed).unwrap();

    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let submit = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
    let form = by_test_id(&root, "form-search");

    // dispatch_event returns false when a handler called prevent_default,
    // which is exactly the no-navigation contract.
    let not_canceled = form.dispatch_event(&submit).unwrap();
    assert!(!not_canceled);
}

#[wasm_bindgen_test]
fn grid_renders_one_card_per_recipe() {
    let root = mount(move || {
        let (recipes, _) = signal(three_recipes());
        view! { <RecipeGrid recipes=recipes /> }
    });

    for n in 1..=3u64 {
        let img = by_test_id(&root, &format!("img-recipe-{n}"));
        assert_eq!(img.get_attribute("src").unwrap(), format!("image{n}.jpg"));
        let title = by_test_id(&root, &format!("title-recipe-{n}"));
        assert_eq!(title.text_content().unwrap(), format!("Recipe {n}"));
    }

    let cards = root
        .query_selector_all("[data-testid^='img-recipe-']")
        .unwrap();
    assert_eq!(cards.length(), 3);
}

#[wasm_bindgen_test]
fn empty_collection_renders_no_cards() {
    let root = mount(move || {
        let (recipes, _) = signal(Vec::<RecipeSummary>::new());
        view! { <RecipeGrid recipes=recipes /> }
    });

    let cards = root
        .query_selector_all("[data-testid^='img-recipe-']")
        .unwrap();
    assert_eq!(cards.length(), 0);
}

#[wasm_bindgen_test]
fn footer_shows_copyright_and_social_links() {
    let config = PageConfig::load().footer;
    let expected = config.clone();
    let root = mount(move || view! { <Footer config=config /> });

    let copyright = by_test_id(&root, "footer-text");
    assert_eq!(
        copyright.text_content().unwrap(),
        expected.copyright.text
    );

    for link in &expected.social_links {
        let anchor = by_test_id(&root, &link.test_id);
        assert_eq!(anchor.get_attribute("href").unwrap(), link.href);
    }
}
