//! Dashboard page listing the signed-in author's own articles.

use leptos::prelude::*;

use crate::net::types::Article;
use crate::state::remote::Remote;
use crate::state::session::AppSession;
use crate::util::dates::format_date;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>().session();
    let articles = RwSignal::new(Remote::<Vec<Article>>::Loading);

    leptos::task::spawn_local(async move {
        let result = crate::net::articles::my_articles().await;
        articles.set(Remote::from_result(result.map(|page| page.content), "Failed to load your articles."));
    });

    let username = move || {
        session.with(|s| s.user().map(|u| u.username.clone()).unwrap_or_default())
    };

    view! {
        <div>
            <div class="page-header">
                <div class="page-header-text">
                    <h1 class="page-title">"My articles"</h1>
                    <p class="page-subtitle">
                        "Manage the content you have published as " {username} "."
                    </p>
                </div>
                <a href="/articles/new" class="btn btn-primary btn-sm">"New article"</a>
            </div>
            {move || match articles.get() {
                Remote::Loading => {
                    view! { <div class="muted mt-md">"Loading your articles…"</div> }.into_any()
                }
                Remote::Failed(message) => view! { <div class="error-text mt-md">{message}</div> }.into_any(),
                Remote::Loaded(items) if items.is_empty() => {
                    view! {
                        <div class="empty-state">
                            "You have not published any articles yet. Start by creating a new one."
                        </div>
                    }
                        .into_any()
                }
                Remote::Loaded(items) => items.into_iter().map(dashboard_row).collect_view().into_any(),
            }}
        </div>
    }
}

fn dashboard_row(article: Article) -> impl IntoView {
    let view_href = format!("/articles/{}", article.id);
    let edit_href = format!("/articles/{}/edit", article.id);
    let created = format_date(&article.created_at);
    view! {
        <div class="card">
            <div class="flex-between">
                <div>
                    <a href=view_href.clone() class="card-title">{article.title}</a>
                    <div class="card-meta">
                        <span class="badge badge-soft badge-blue">{article.category.as_str()}</span>
                        <span>"Created " {created}</span>
                    </div>
                </div>
                <div class="flex gap-sm">
                    <a href=edit_href class="btn btn-outline btn-sm btn-icon">"Edit"</a>
                    <a href=view_href class="btn btn-ghost btn-sm btn-icon">"View"</a>
                </div>
            </div>
        </div>
    }
}
