//! Article detail page with author-only edit/delete actions.

#[cfg(test)]
#[path = "article_detail_test.rs"]
mod article_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Article, UserProfile};
use crate::state::remote::Remote;
use crate::state::session::AppSession;
use crate::util::dates::format_date_time;
use crate::util::tags::split_tags;

/// Whether `user` wrote `article`.
pub fn is_author(user: Option<&UserProfile>, article: &Article) -> bool {
    user.is_some_and(|u| u.id == article.author_id)
}

/// Parse the `:id` route segment.
pub fn parse_article_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

fn confirm_delete() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this article? This cannot be undone.").ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[component]
pub fn ArticleDetailPage() -> impl IntoView {
    let session = expect_context::<AppSession>().session();
    let params = use_params_map();
    let navigate = use_navigate();
    let article = RwSignal::new(Remote::<Article>::Loading);
    let action_error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = params.with(|p| parse_article_id(p.get("id").as_deref())) else {
            article.set(Remote::Failed("Article not found.".to_owned()));
            return;
        };
        article.set(Remote::Loading);
        leptos::task::spawn_local(async move {
            let result = crate::net::articles::get_article(id).await;
            article.set(Remote::from_result(result, "Failed to load article."));
        });
    });

    let on_delete = move |_: leptos::ev::MouseEvent| {
        let Some(id) = article.with_untracked(|a| a.loaded().map(|a| a.id)) else {
            return;
        };
        if !confirm_delete() {
            return;
        }
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::articles::delete_article(id).await {
                Ok(()) => navigate("/dashboard", NavigateOptions::default()),
                Err(err) => action_error.set(Some(err.user_message("Failed to delete article."))),
            }
        });
    };

    let author_actions = move |a: &Article| {
        session.with(|s| is_author(s.user(), a)).then(|| {
            let edit_href = format!("/articles/{}/edit", a.id);
            view! {
                <div class="flex gap-sm">
                    <a href=edit_href class="btn btn-outline btn-sm">"Edit"</a>
                    <button class="btn btn-danger btn-sm" on:click=on_delete.clone()>"Delete"</button>
                </div>
            }
        })
    };

    move || match article.get() {
        Remote::Loading => view! { <div class="muted mt-md">"Loading article…"</div> }.into_any(),
        Remote::Failed(message) => view! { <div class="error-text mt-md">{message}</div> }.into_any(),
        Remote::Loaded(a) => {
            let actions = author_actions(&a);
            let created = format_date_time(&a.created_at);
            let updated = a.updated_at.as_deref().map(format_date_time);
            let tags = split_tags(a.tags.as_deref());
            view! {
                <div>
                    <div class="page-header">
                        <div class="page-header-text">
                            <h1 class="page-title">{a.title}</h1>
                            <div class="card-meta">
                                <span class="badge badge-soft badge-blue">{a.category.as_str()}</span>
                                <span>"By " {a.author_username}</span>
                                <span>"•"</span>
                                <span>"Created " {created}</span>
                                {updated
                                    .map(|u| view! {
                                        <span>"•"</span>
                                        <span>"Updated " {u}</span>
                                    })}
                            </div>
                            {(!tags.is_empty())
                                .then(|| {
                                    view! {
                                        <div class="card-tags mt-sm">
                                            {tags
                                                .into_iter()
                                                .map(|tag| view! { <span class="tag-chip">"#" {tag}</span> })
                                                .collect_view()}
                                        </div>
                                    }
                                })}
                        </div>
                        {actions}
                    </div>
                    {move || action_error.get().map(|e| view! { <div class="error-text">{e}</div> })}
                    <section class="article-body">
                        <div inner_html=a.content></div>
                    </section>
                </div>
            }
                .into_any()
        }
    }
}
