use super::*;
use crate::net::types::UserProfile;

fn authenticated() -> Session {
    Session::Authenticated {
        token: "t".to_owned(),
        user: UserProfile {
            id: 1,
            username: "ada".to_owned(),
            email: "a@b.com".to_owned(),
        },
    }
}

#[test]
fn resolving_shows_loading_and_never_redirects() {
    let session = Session::Resolving {
        token: "t".to_owned(),
    };
    for path in ["/", "/dashboard", "/articles/1/edit"] {
        assert_eq!(guard_decision(&session, path), GuardDecision::Loading);
    }
}

#[test]
fn anonymous_redirects_with_requested_path() {
    assert_eq!(
        guard_decision(&Session::Anonymous, "/articles/5/edit"),
        GuardDecision::Redirect {
            to: "/login?redirect=%2Farticles%2F5%2Fedit".to_owned()
        }
    );
}

#[test]
fn anonymous_root_redirects_to_bare_login() {
    assert_eq!(
        guard_decision(&Session::Anonymous, "/"),
        GuardDecision::Redirect {
            to: "/login".to_owned()
        }
    );
}

#[test]
fn authenticated_renders() {
    assert_eq!(guard_decision(&authenticated(), "/dashboard"), GuardDecision::Render);
}

#[test]
fn requested_path_keeps_query() {
    assert_eq!(requested_path("/", ""), "/");
    assert_eq!(requested_path("/", "search=rust"), "/?search=rust");
    assert_eq!(requested_path("/", "?search=rust"), "/?search=rust");
}

#[test]
fn login_redirect_target_encodes_query() {
    assert_eq!(
        login_redirect_target("/?search=a b&category=AI"),
        "/login?redirect=%2F%3Fsearch%3Da+b%26category%3DAI"
    );
}

#[test]
fn redirect_back_accepts_local_paths() {
    assert_eq!(redirect_back_target(Some("/articles/5")), "/articles/5");
    assert_eq!(redirect_back_target(Some("/?search=rust")), "/?search=rust");
}

#[test]
fn redirect_back_rejects_foreign_or_missing_targets() {
    assert_eq!(redirect_back_target(None), "/");
    assert_eq!(redirect_back_target(Some("")), "/");
    assert_eq!(redirect_back_target(Some("https://evil.example")), "/");
    assert_eq!(redirect_back_target(Some("//evil.example")), "/");
    assert_eq!(redirect_back_target(Some("/\\evil.example")), "/");
}

#[test]
fn redirect_back_skips_auth_pages() {
    assert_eq!(redirect_back_target(Some("/login")), "/");
    assert_eq!(redirect_back_target(Some("/signup?x=1")), "/");
}

#[test]
fn fallback_depends_on_session() {
    assert_eq!(fallback_target(&authenticated()), "/");
    assert_eq!(fallback_target(&Session::Anonymous), "/login");
}
