//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::AppSession;

/// Brand, primary links, and the signed-in user's greeting + logout.
#[component]
pub fn Navbar() -> impl IntoView {
    let store = expect_context::<AppSession>();
    let session = store.session();
    let navigate = use_navigate();

    let username = move || session.with(|s| s.user().map(|u| u.username.clone()));
    let signed_in = move || session.with(|s| s.user().is_some());

    let logout = move || {
        store.logout();
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <div class="navbar-left">
                    <a href="/" class="navbar-brand">
                        <span>"Knowledge Hub"</span>
                        <span class="navbar-brand-pill">"AI Assist"</span>
                    </a>
                    <nav class="navbar-links">
                        <a href="/" class="nav-link">"Home"</a>
                        <Show when=signed_in>
                            <a href="/articles/new" class="nav-link">"New Article"</a>
                            <a href="/dashboard" class="nav-link">"My Articles"</a>
                        </Show>
                    </nav>
                </div>
                {move || {
                    let logout = logout.clone();
                    username()
                        .map(|name| {
                            view! {
                                <div class="navbar-right">
                                    <span class="pill">"Hi, " {name}</span>
                                    <button class="btn btn-ghost btn-sm" on:click=move |_| logout()>
                                        "Logout"
                                    </button>
                                </div>
                            }
                        })
                }}
            </div>
        </header>
    }
}
