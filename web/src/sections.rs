//! The fixed sections of the page: banner, navigation bar and footer.
//!
//! All of them render straight from [`PageConfig`](crate::config::PageConfig)
//! values, attributes verbatim. The search form is the only one holding any
//! state, and that state is local to it.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::config::{BannerConfig, FooterConfig, NavbarConfig};

#[component]
pub fn Banner(config: BannerConfig) -> impl IntoView {
    view! {
        <header class="max-w-6xl mx-auto px-4 pt-6">
            <img
                data-testid=config.test_id
                src=config.src
                alt=config.alt
                class="w-full rounded-lg shadow-lg"
            />
        </header>
    }
}

#[component]
pub fn NavBar(config: NavbarConfig) -> impl IntoView {
    let (query, set_query) = signal(String::new());

    // Submission must never navigate away. The query drives nothing yet; it
    // lives and dies with this component.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::debug!("search submitted: {:?}", query.get_untracked());
    };

    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="max-w-6xl mx-auto px-4 py-4 flex items-center justify-between">
                <span
                    data-testid=config.title.test_id
                    class="text-2xl font-bold text-gray-900"
                >
                    {config.title.text}
                </span>
                <form
                    data-testid=config.search.form_test_id
                    role="search"
                    on:submit=on_submit
                    class="flex items-center gap-2"
                >
                    <input
                        data-testid=config.search.input_test_id
                        type="search"
                        placeholder="Search recipes"
                        class="border border-gray-300 rounded-lg px-3 py-2 text-sm"
                        prop:value=move || query.get()
                        on:input:target=move |ev| set_query.set(ev.target().value())
                    />
                </form>
            </div>
        </nav>
    }
}

#[component]
pub fn Footer(config: FooterConfig) -> impl IntoView {
    view! {
        <footer class="bg-white border-t border-gray-200 mt-12">
            <div class="max-w-6xl mx-auto px-4 py-6 flex items-center justify-between">
                <span data-testid=config.copyright.test_id class="text-sm text-gray-500">
                    {config.copyright.text}
                </span>
                <ul class="flex items-center gap-4">
                    {config
                        .social_links
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li>
                                    <a
                                        data-testid=link.test_id
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-sm text-blue-600 hover:text-blue-800 hover:underline"
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </footer>
    }
}
