//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::protected_route::{FallbackRedirect, ProtectedRoute};
use crate::net::auth::HttpAuthBackend;
use crate::pages::{
    article_detail::ArticleDetailPage,
    article_editor::{EditArticlePage, NewArticlePage},
    dashboard::DashboardPage,
    home::HomePage,
    login::LoginPage,
    signup::SignupPage,
};
use crate::state::session::AppSession;
use crate::state::token_store::LocalTokenStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session store from any persisted token, starts rehydration in
/// the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(HttpAuthBackend, LocalTokenStorage);
    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        leptos::task::spawn_local(async move { session.rehydrate().await });
    }
    provide_context(session);

    view! {
        <Title text="Knowledge Hub"/>

        <Router>
            <div class="app-root">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <FallbackRedirect/> }>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("signup") view=SignupPage/>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("dashboard")
                            view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("articles"), StaticSegment("new"))
                            view=|| view! { <ProtectedRoute><NewArticlePage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("articles"), ParamSegment("id"))
                            view=|| view! { <ProtectedRoute><ArticleDetailPage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("articles"), ParamSegment("id"), StaticSegment("edit"))
                            view=|| view! { <ProtectedRoute><EditArticlePage/></ProtectedRoute> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
