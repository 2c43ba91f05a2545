//! Signup page: register, then sign in with the same credentials.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::AppSession;

const SIGNUP_FAILED: &str = "Signup failed. Please try again.";
const MIN_USERNAME_LEN: usize = 3;
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
struct SignupInput {
    username: String,
    email: String,
    password: String,
}

fn validate_signup_input(username: &str, email: &str, password: &str) -> Result<SignupInput, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err("Username must be at least 3 characters.");
    }
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(SignupInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = expect_context::<AppSession>();
    let session = store.session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let navigate_home = navigate.clone();
    Effect::new(move || {
        if session.with(|s| s.user().is_some()) {
            navigate_home(
                "/",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let input = match validate_signup_input(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(input) => input,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);

        let store = store.clone();
        leptos::task::spawn_local(async move {
            if let Err(err) = store.signup(&input.username, &input.email, &input.password).await {
                error.set(Some(err.user_message(SIGNUP_FAILED)));
            }
            submitting.set(false);
        });
    };

    let to_login = move |_| navigate("/login", NavigateOptions::default());

    view! {
        <div class="auth-page">
            <div class="auth-content">
                <div class="page-header">
                    <div class="page-header-text">
                        <h1 class="page-title">"Create your writer profile"</h1>
                        <p class="page-subtitle">
                            "Share your knowledge with the community, assisted by AI."
                        </p>
                    </div>
                </div>
                <div class="card auth-card">
                    <form class="form-grid" on:submit=on_submit>
                        <div class="form-field">
                            <label class="form-label">"Username"</label>
                            <input
                                class="input"
                                required
                                minlength="3"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </div>
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
                                minlength="6"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <p class="form-helper">"At least 6 characters."</p>
                        </div>
                        {move || error.get().map(|e| view! { <div class="error-text">{e}</div> })}
                        <div class="mt-md flex-between">
                            <span class="muted">
                                "Already have an account? "
                                <span role="button" class="nav-link" on:click=to_login>
                                    "Login"
                                </span>
                            </span>
                            <button class="btn btn-primary" type="submit" disabled=move || submitting.get()>
                                {move || if submitting.get() { "Creating account…" } else { "Sign up" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
