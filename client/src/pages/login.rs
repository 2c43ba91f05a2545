//! Login page: email + password against the session store.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::AppSession;
use crate::util::guard::{REDIRECT_PARAM, redirect_back_target};

const LOGIN_FAILED: &str = "Login failed. Please check credentials.";

/// Trim and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<AppSession>();
    let session = store.session();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Covers both "already signed in" and "just signed in": leave for the
    // page the guard sent us from.
    let navigate_back = navigate.clone();
    Effect::new(move || {
        if session.with(|s| s.user().is_none()) {
            return;
        }
        let target = query.with(|q| redirect_back_target(q.get(REDIRECT_PARAM).as_deref()));
        navigate_back(
            &target,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(Some(message.to_owned()));
                    return;
                }
            };
        error.set(None);
        submitting.set(true);

        let store = store.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = store.login(&email_value, &password_value).await {
                error.set(Some(err.user_message(LOGIN_FAILED)));
            }
            submitting.set(false);
        });
    };

    let to_signup = move |_| navigate("/signup", NavigateOptions::default());

    view! {
        <div class="auth-page">
            <div class="auth-content">
                <div class="page-header">
                    <div class="page-header-text">
                        <h1 class="page-title">"Welcome back"</h1>
                        <p class="page-subtitle">
                            "Sign in to write, edit, and get AI assistance for your articles."
                        </p>
                    </div>
                </div>
                <div class="card auth-card">
                    <form class="form-grid" on:submit=on_submit>
                        <div class="form-field">
                            <label class="form-label">"Email"</label>
                            <input
                                class="input"
                                type="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Password"</label>
                            <input
                                class="input"
                                type="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                        {move || error.get().map(|e| view! { <div class="error-text">{e}</div> })}
                        <div class="mt-md flex-between">
                            <span class="muted">
                                "New here? "
                                <span role="button" class="nav-link" on:click=to_signup>
                                    "Create an account"
                                </span>
                            </span>
                            <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Signing in…" } else { "Login" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
