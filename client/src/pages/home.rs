//! Home page: searchable, filterable list of published articles.

use leptos::prelude::*;

use crate::components::article_card::ArticleCard;
use crate::components::search_filter::SearchFilter;
use crate::net::articles::ArticleQuery;
use crate::net::types::{Article, ArticleCategory};
use crate::state::remote::Remote;

#[component]
pub fn HomePage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(None::<ArticleCategory>);
    let articles = RwSignal::new(Remote::<Vec<Article>>::Loading);
    // Only the newest request may publish; typing fires one per keystroke.
    let generation = RwSignal::new(0_u64);

    Effect::new(move || {
        let query = ArticleQuery {
            search: search.get(),
            category: category.get(),
        };
        let seq = generation.get_untracked() + 1;
        generation.set(seq);
        articles.set(Remote::Loading);

        leptos::task::spawn_local(async move {
            let result = crate::net::articles::list_articles(&query).await;
            if generation.get_untracked() == seq {
                articles.set(Remote::from_result(result.map(|page| page.content), "Failed to load articles."));
            }
        });
    });

    view! {
        <div>
            <div class="page-header">
                <div class="page-header-text">
                    <h1 class="page-title">"Discover technical knowledge"</h1>
                    <p class="page-subtitle">
                        "Medium-style reading with StackOverflow-lite search, powered by AI summaries."
                    </p>
                </div>
            </div>
            <SearchFilter search=search category=category/>
            {move || match articles.get() {
                Remote::Loading => view! { <div class="muted mt-md">"Loading articles…"</div> }.into_any(),
                Remote::Failed(message) => view! { <div class="error-text mt-md">{message}</div> }.into_any(),
                Remote::Loaded(items) if items.is_empty() => {
                    view! {
                        <div class="empty-state">
                            "No articles yet. Be the first to publish a technical article."
                        </div>
                    }
                        .into_any()
                }
                Remote::Loaded(items) => {
                    items
                        .into_iter()
                        .map(|article| view! { <ArticleCard article=article/> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
