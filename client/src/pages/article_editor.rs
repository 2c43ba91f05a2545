//! Create/edit article pages with AI writing aids.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NewArticlePage` and `EditArticlePage` share one form. Edit mode loads the
//! article first; both submit an `ArticleRequest` and navigate to the saved
//! article. AI actions rewrite the draft in place and never submit.

#[cfg(test)]
#[path = "article_editor_test.rs"]
mod article_editor_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Article, ArticleCategory, ArticleRequest, Improvement};
use crate::pages::article_detail::parse_article_id;
use crate::util::tags::merge_tags;

/// Editable fields of an article.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub category: ArticleCategory,
    pub content: String,
    pub tags: String,
}

impl ArticleDraft {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            category: article.category,
            content: article.content.clone(),
            tags: article.tags.clone().unwrap_or_default(),
        }
    }

    /// Request payload, or the message to show when the draft is incomplete.
    pub fn to_request(&self) -> Result<ArticleRequest, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required.");
        }
        if self.content.trim().is_empty() {
            return Err("Content is required.");
        }
        Ok(ArticleRequest {
            title: title.to_owned(),
            category: self.category,
            content: self.content.clone(),
            tags: self.tags.trim().to_owned(),
        })
    }

    /// AI actions need something to work on.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Apply an AI rewrite; a blank suggested title keeps the current one.
    pub fn apply_improvement(&mut self, improvement: Improvement) {
        if let Some(title) = improvement.improved_title.filter(|t| !t.trim().is_empty()) {
            self.title = title;
        }
        self.content = improvement.improved_content;
    }

    pub fn append_tags(&mut self, suggested: &[String]) {
        self.tags = merge_tags(&self.tags, suggested);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditorMode {
    Create,
    Edit(i64),
}

#[derive(Clone, Copy)]
struct EditorCopy {
    heading: &'static str,
    subtitle: &'static str,
    helper: &'static str,
    note: &'static str,
    submit: &'static str,
    submitting: &'static str,
    failure: &'static str,
}

fn copy_for(mode: EditorMode) -> EditorCopy {
    match mode {
        EditorMode::Create => EditorCopy {
            heading: "Write a new article",
            subtitle: "Use the AI assistant to polish your writing, generate summaries, and suggest tags.",
            helper: "HTML is supported. Paste code snippets, headings, and lists.",
            note: "AI will refine your writing, keep your voice, and generate summaries on save.",
            submit: "Publish article",
            submitting: "Publishing…",
            failure: "Failed to create article.",
        },
        EditorMode::Edit(_) => EditorCopy {
            heading: "Edit article",
            subtitle: "Update your content and use AI to quickly improve clarity and tags.",
            helper: "AI can help polish your existing text.",
            note: "Saving will regenerate the article summary using the updated content.",
            submit: "Save changes",
            submitting: "Saving…",
            failure: "Failed to update article.",
        },
    }
}

#[component]
pub fn NewArticlePage() -> impl IntoView {
    view! { <ArticleEditor mode=EditorMode::Create/> }
}

#[component]
pub fn EditArticlePage() -> impl IntoView {
    let params = use_params_map();
    move || match params.with(|p| parse_article_id(p.get("id").as_deref())) {
        Some(id) => view! { <ArticleEditor mode=EditorMode::Edit(id)/> }.into_any(),
        None => view! { <div class="error-text mt-md">"Article not found."</div> }.into_any(),
    }
}

#[component]
fn ArticleEditor(mode: EditorMode) -> impl IntoView {
    let navigate = use_navigate();
    let copy = copy_for(mode);

    let draft = RwSignal::new(ArticleDraft::default());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(matches!(mode, EditorMode::Edit(_)));
    let submitting = RwSignal::new(false);
    let ai_loading = RwSignal::new(false);

    if let EditorMode::Edit(id) = mode {
        leptos::task::spawn_local(async move {
            match crate::net::articles::get_article(id).await {
                Ok(article) => draft.set(ArticleDraft::from_article(&article)),
                Err(err) => error.set(Some(err.user_message("Failed to load article."))),
            }
            loading.set(false);
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let payload = match draft.with_untracked(ArticleDraft::to_request) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let saved = match mode {
                EditorMode::Create => crate::net::articles::create_article(&payload).await,
                EditorMode::Edit(id) => crate::net::articles::update_article(id, &payload).await,
            };
            submitting.set(false);
            match saved {
                Ok(article) => navigate(&format!("/articles/{}", article.id), NavigateOptions::default()),
                Err(err) => error.set(Some(err.user_message(copy_for(mode).failure))),
            }
        });
    };

    let on_improve = move |_: leptos::ev::MouseEvent| {
        let (title, content) = draft.with_untracked(|d| (d.title.clone(), d.content.clone()));
        if content.trim().is_empty() || ai_loading.get_untracked() {
            return;
        }
        ai_loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::ai::improve(&title, &content).await {
                Ok(improvement) => draft.update(|d| d.apply_improvement(improvement)),
                Err(err) => {
                    log::warn!("ai improve failed: {err}");
                    error.set(Some("AI improvement failed. Please try again.".to_owned()));
                }
            }
            ai_loading.set(false);
        });
    };

    let on_suggest_tags = move |_: leptos::ev::MouseEvent| {
        let content = draft.with_untracked(|d| d.content.clone());
        if content.trim().is_empty() || ai_loading.get_untracked() {
            return;
        }
        ai_loading.set(true);
        leptos::task::spawn_local(async move {
            match crate::net::ai::suggest_tags(&content).await {
                Ok(tags) => draft.update(|d| d.append_tags(&tags)),
                Err(err) => {
                    log::warn!("ai tag suggestion failed: {err}");
                    error.set(Some("AI tag suggestion failed. Please try again.".to_owned()));
                }
            }
            ai_loading.set(false);
        });
    };

    let ai_disabled = move || ai_loading.get() || !draft.with(ArticleDraft::has_content);

    view! {
        <div>
            <div class="page-header">
                <div class="page-header-text">
                    <h1 class="page-title">{copy.heading}</h1>
                    <p class="page-subtitle">{copy.subtitle}</p>
                </div>
            </div>
            <Show when=move || loading.get()>
                <div class="muted mt-md">"Loading article…"</div>
            </Show>
            <div class="card form-card" style:display=move || if loading.get() { "none" } else { "block" }>
                <form class="form-grid" on:submit=on_submit>
                    <div class="form-field">
                        <label class="form-label">"Title"</label>
                        <input
                            class="input"
                            required
                            prop:value=move || draft.with(|d| d.title.clone())
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-field">
                        <label class="form-label">"Category"</label>
                        <select
                            class="select"
                            prop:value=move || draft.with(|d| d.category.as_str())
                            on:change=move |ev| {
                                if let Some(category) = ArticleCategory::parse(&event_target_value(&ev)) {
                                    draft.update(|d| d.category = category);
                                }
                            }
                        >
                            {ArticleCategory::ALL
                                .into_iter()
                                .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-field">
                        <div class="article-toolbar">
                            <div>
                                <label class="form-label">"Content"</label>
                                <p class="form-helper">{copy.helper}</p>
                            </div>
                            <div class="ai-toolbar">
                                <button
                                    type="button"
                                    class="btn btn-outline btn-sm"
                                    on:click=on_improve
                                    disabled=ai_disabled
                                >
                                    "Improve with AI"
                                </button>
                                <button
                                    type="button"
                                    class="btn btn-outline btn-sm"
                                    on:click=on_suggest_tags
                                    disabled=ai_disabled
                                >
                                    "Suggest tags"
                                </button>
                            </div>
                        </div>
                        <textarea
                            class="input article-content"
                            rows="16"
                            prop:value=move || draft.with(|d| d.content.clone())
                            on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                        ></textarea>
                        <p class="ai-note mt-sm">{copy.note}</p>
                    </div>
                    <div class="form-field">
                        <label class="form-label">"Tags"</label>
                        <input
                            class="input"
                            placeholder="e.g. java, spring, react, mysql"
                            prop:value=move || draft.with(|d| d.tags.clone())
                            on:input=move |ev| draft.update(|d| d.tags = event_target_value(&ev))
                        />
                        <p class="form-helper">"Comma-separated. Used for search and discovery."</p>
                    </div>
                    {move || error.get().map(|e| view! { <div class="error-text">{e}</div> })}
                    <div class="text-right mt-md">
                        <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { copy.submitting } else { copy.submit }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
