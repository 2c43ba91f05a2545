//! Search box + category select for the article list.

use leptos::prelude::*;

use crate::net::types::ArticleCategory;

#[component]
pub fn SearchFilter(
    search: RwSignal<String>,
    category: RwSignal<Option<ArticleCategory>>,
) -> impl IntoView {
    view! {
        <div class="search-filter-row">
            <input
                class="input input-full"
                placeholder="Search by title, content or tags..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <select
                class="select"
                prop:value=move || category.get().map_or("", ArticleCategory::as_str)
                on:change=move |ev| category.set(ArticleCategory::parse(&event_target_value(&ev)))
            >
                <option value="">"All categories"</option>
                {ArticleCategory::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
