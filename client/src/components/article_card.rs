//! Summary card for article lists.

use leptos::prelude::*;

use crate::net::types::Article;
use crate::util::dates::format_date;
use crate::util::tags::split_tags;

#[component]
pub fn ArticleCard(article: Article) -> impl IntoView {
    let href = format!("/articles/{}", article.id);
    let created = format_date(&article.created_at);
    let tags = split_tags(article.tags.as_deref());
    let summary = article.summary.filter(|s| !s.trim().is_empty());

    view! {
        <article class="card">
            <div class="card-header">
                <div>
                    <a href=href class="card-title">{article.title}</a>
                    <div class="card-meta">
                        <span class="badge badge-soft badge-blue">{article.category.as_str()}</span>
                        <span>"By " {article.author_username}</span>
                        <span>"•"</span>
                        <span>{created}</span>
                    </div>
                </div>
            </div>
            {summary.map(|s| view! { <p class="card-summary">{s}</p> })}
            {(!tags.is_empty())
                .then(|| {
                    view! {
                        <div class="card-tags">
                            {tags
                                .into_iter()
                                .map(|tag| view! { <span class="tag-chip">"#" {tag}</span> })
                                .collect_view()}
                        </div>
                    }
                })}
        </article>
    }
}
