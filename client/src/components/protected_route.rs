//! Route guard wrapper for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server has no access to the browser token, so SSR and the first
//! hydrated render both show the loading affordance. Decisions start once
//! the component is mounted in the browser.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::{AppSession, SessionStatus};
use crate::util::guard::{GuardDecision, fallback_target, guard_decision, requested_path};

/// `true` once effects have run, i.e. in the browser after hydration.
fn mounted_signal() -> RwSignal<bool> {
    let mounted = RwSignal::new(false);
    Effect::new(move || mounted.set(true));
    mounted
}

fn replace() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Render `children` only for an authenticated session.
///
/// Re-evaluates on every session change, so logging out while a protected
/// view is open redirects immediately.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>().session();
    let location = use_location();
    let navigate = use_navigate();
    let mounted = mounted_signal();

    let decision = Memo::new(move |_| {
        if !mounted.get() {
            return GuardDecision::Loading;
        }
        let path = requested_path(&location.pathname.get(), &location.search.get());
        session.with(|s| guard_decision(s, &path))
    });

    Effect::new(move || {
        if let GuardDecision::Redirect { to } = decision.get() {
            navigate(&to, replace());
        }
    });

    move || match decision.get() {
        GuardDecision::Render => children(),
        GuardDecision::Loading => {
            view! { <div class="text-center mt-md muted">"Checking your session…"</div> }.into_any()
        }
        GuardDecision::Redirect { .. } => {
            view! { <div class="text-center mt-md muted">"Redirecting to login…"</div> }.into_any()
        }
    }
}

/// Unknown routes: home when signed in, otherwise login.
#[component]
pub fn FallbackRedirect() -> impl IntoView {
    let session = expect_context::<AppSession>().session();
    let navigate = use_navigate();
    let mounted = mounted_signal();

    Effect::new(move || {
        if !mounted.get() {
            return;
        }
        // Wait for a persisted token to settle before choosing.
        let target = session.with(|s| {
            (s.status() != SessionStatus::Resolving).then(|| fallback_target(s))
        });
        if let Some(target) = target {
            navigate(target, replace());
        }
    });

    view! { <div class="text-center mt-md muted">"Page not found."</div> }
}
