use std::collections::VecDeque;
use std::sync::Mutex;

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::state::token_store::MemoryTokenStorage;

type ProfileReply = oneshot::Receiver<Result<UserProfile, ApiError>>;

/// Backend whose responses are scripted per test. Profile fetches are served
/// from a queue of channels so tests decide when each one resolves.
#[derive(Default)]
struct ScriptedBackend {
    login: Mutex<VecDeque<Result<String, ApiError>>>,
    signup: Mutex<VecDeque<Result<(), ApiError>>>,
    profiles: Mutex<VecDeque<ProfileReply>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    fn with_login(self, result: Result<String, ApiError>) -> Self {
        self.login.lock().unwrap().push_back(result);
        self
    }

    fn with_signup(self, result: Result<(), ApiError>) -> Self {
        self.signup.lock().unwrap().push_back(result);
        self
    }

    fn with_profile(self, result: Result<UserProfile, ApiError>) -> Self {
        let (tx, rx) = oneshot::channel();
        tx.send(result).unwrap();
        self.profiles.lock().unwrap().push_back(rx);
        self
    }

    fn with_deferred_profile(self) -> (Self, oneshot::Sender<Result<UserProfile, ApiError>>) {
        let (tx, rx) = oneshot::channel();
        self.profiles.lock().unwrap().push_back(rx);
        (self, tx)
    }
}

impl AuthBackend for Arc<ScriptedBackend> {
    async fn login(&self, email: &str, _password: &str) -> Result<String, ApiError> {
        self.calls.lock().unwrap().push(format!("login:{email}"));
        self.login.lock().unwrap().pop_front().expect("unexpected login call")
    }

    async fn signup(&self, username: &str, _email: &str, _password: &str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(format!("signup:{username}"));
        self.signup.lock().unwrap().pop_front().expect("unexpected signup call")
    }

    async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.calls.lock().unwrap().push(format!("me:{token}"));
        let reply = self
            .profiles
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected profile fetch");
        reply
            .await
            .unwrap_or_else(|_| Err(ApiError::Transport("reply dropped".to_owned())))
    }
}

fn profile(email: &str) -> UserProfile {
    UserProfile {
        id: 1,
        username: "ada".to_owned(),
        email: email.to_owned(),
    }
}

fn unauthorized() -> ApiError {
    ApiError::Status {
        status: 401,
        message: None,
    }
}

fn store(
    backend: ScriptedBackend,
    storage: &MemoryTokenStorage,
) -> (SessionStore<Arc<ScriptedBackend>, MemoryTokenStorage>, Arc<ScriptedBackend>) {
    let backend = Arc::new(backend);
    (SessionStore::new(Arc::clone(&backend), storage.clone()), backend)
}

fn calls(backend: &ScriptedBackend) -> Vec<String> {
    backend.calls.lock().unwrap().clone()
}

// =============================================================
// Startup / rehydration
// =============================================================

#[test]
fn no_persisted_token_starts_anonymous_without_network() {
    let storage = MemoryTokenStorage::default();
    let (session, backend) = store(ScriptedBackend::default(), &storage);
    assert_eq!(session.snapshot(), Session::Anonymous);

    block_on(session.rehydrate());

    assert_eq!(session.snapshot(), Session::Anonymous);
    assert!(calls(&backend).is_empty());
}

#[test]
fn persisted_token_starts_resolving() {
    let storage = MemoryTokenStorage::with_token("t1");
    let (session, backend) = store(ScriptedBackend::default(), &storage);
    assert_eq!(
        session.snapshot(),
        Session::Resolving {
            token: "t1".to_owned()
        }
    );
    assert!(calls(&backend).is_empty());
}

#[test]
fn rehydrate_success_authenticates() {
    let storage = MemoryTokenStorage::with_token("t1");
    let (session, backend) = store(
        ScriptedBackend::default().with_profile(Ok(profile("a@b.com"))),
        &storage,
    );

    block_on(session.rehydrate());

    assert_eq!(
        session.snapshot(),
        Session::Authenticated {
            token: "t1".to_owned(),
            user: profile("a@b.com"),
        }
    );
    assert_eq!(storage.load().as_deref(), Some("t1"));
    assert_eq!(calls(&backend), vec!["me:t1"]);
}

#[test]
fn rehydrate_unauthorized_clears_token() {
    let storage = MemoryTokenStorage::with_token("expired");
    let (session, _) = store(ScriptedBackend::default().with_profile(Err(unauthorized())), &storage);

    block_on(session.rehydrate());

    assert_eq!(session.snapshot(), Session::Anonymous);
    assert_eq!(storage.load(), None);
}

#[test]
fn rehydrate_network_error_settles_anonymous() {
    let storage = MemoryTokenStorage::with_token("t1");
    let (session, _) = store(
        ScriptedBackend::default().with_profile(Err(ApiError::Transport("offline".to_owned()))),
        &storage,
    );

    block_on(session.rehydrate());

    assert_eq!(session.snapshot(), Session::Anonymous);
    assert_eq!(storage.load(), None);
}

#[test]
fn rehydrate_runs_only_while_resolving() {
    let storage = MemoryTokenStorage::with_token("t1");
    let (session, backend) = store(
        ScriptedBackend::default().with_profile(Ok(profile("a@b.com"))),
        &storage,
    );

    block_on(session.rehydrate());
    block_on(session.rehydrate());

    assert_eq!(calls(&backend), vec!["me:t1"]);
}

#[test]
fn stale_rehydrate_after_logout_does_not_resurrect_session() {
    let storage = MemoryTokenStorage::with_token("t1");
    let (backend, reply) = ScriptedBackend::default().with_deferred_profile();
    let (session, _) = store(backend, &storage);

    block_on(async {
        futures::join!(session.rehydrate(), async {
            session.logout();
            reply.send(Ok(profile("a@b.com"))).unwrap();
        });
    });

    assert_eq!(session.snapshot(), Session::Anonymous);
    assert_eq!(storage.load(), None);
}

#[test]
fn stale_rehydrate_failure_does_not_clear_newer_login() {
    let storage = MemoryTokenStorage::with_token("old");
    let (backend, old_reply) = ScriptedBackend::default().with_deferred_profile();
    let backend = backend
        .with_login(Ok("new".to_owned()))
        .with_profile(Ok(profile("a@b.com")));
    let (session, _) = store(backend, &storage);

    block_on(async {
        futures::join!(session.rehydrate(), async {
            session.login("a@b.com", "secret").await.unwrap();
            old_reply.send(Err(unauthorized())).unwrap();
        });
    });

    assert_eq!(
        session.snapshot(),
        Session::Authenticated {
            token: "new".to_owned(),
            user: profile("a@b.com"),
        }
    );
    assert_eq!(storage.load().as_deref(), Some("new"));
}

// =============================================================
// Login / signup
// =============================================================

#[test]
fn login_is_authenticated_only_after_profile_resolves() {
    let storage = MemoryTokenStorage::default();
    let (backend, reply) = ScriptedBackend::default()
        .with_login(Ok("jwt".to_owned()))
        .with_deferred_profile();
    let (session, backend) = store(backend, &storage);

    let result = block_on(async {
        let (result, ()) = futures::join!(session.login("a@b.com", "secret"), async {
            // Token exchanged, profile still in flight.
            assert_eq!(session.snapshot().status(), SessionStatus::Anonymous);
            assert!(session.snapshot().user().is_none());
            reply.send(Ok(profile("a@b.com"))).unwrap();
        });
        result
    });

    assert_eq!(result, Ok(()));
    let snapshot = session.snapshot();
    assert_eq!(snapshot.status(), SessionStatus::Authenticated);
    assert_eq!(snapshot.user().map(|u| u.email.as_str()), Some("a@b.com"));
    assert_eq!(snapshot.token(), Some("jwt"));
    assert_eq!(storage.load().as_deref(), Some("jwt"));
    assert_eq!(calls(&backend), vec!["login:a@b.com", "me:jwt"]);
}

#[test]
fn login_with_bad_credentials_persists_nothing() {
    let storage = MemoryTokenStorage::default();
    let (session, backend) = store(
        ScriptedBackend::default().with_login(Err(ApiError::Status {
            status: 401,
            message: Some("Invalid email or password".to_owned()),
        })),
        &storage,
    );

    let err = block_on(session.login("a@b.com", "wrong")).unwrap_err();

    assert!(matches!(err, AuthError::Login(_)));
    assert_eq!(err.user_message("Login failed."), "Invalid email or password");
    assert_eq!(session.snapshot(), Session::Anonymous);
    assert_eq!(storage.load(), None);
    assert_eq!(calls(&backend), vec!["login:a@b.com"]);
}

#[test]
fn login_profile_failure_clears_fresh_token() {
    let storage = MemoryTokenStorage::default();
    let (session, _) = store(
        ScriptedBackend::default()
            .with_login(Ok("jwt".to_owned()))
            .with_profile(Err(ApiError::Transport("offline".to_owned()))),
        &storage,
    );

    let err = block_on(session.login("a@b.com", "secret")).unwrap_err();

    assert!(matches!(err, AuthError::Profile(_)));
    assert_eq!(err.user_message("Login failed."), "Login failed.");
    assert_eq!(session.snapshot(), Session::Anonymous);
    assert_eq!(storage.load(), None);
}

#[test]
fn logout_during_login_wins() {
    let storage = MemoryTokenStorage::default();
    let (backend, reply) = ScriptedBackend::default()
        .with_login(Ok("jwt".to_owned()))
        .with_deferred_profile();
    let (session, _) = store(backend, &storage);

    let result = block_on(async {
        let (result, ()) = futures::join!(session.login("a@b.com", "secret"), async {
            session.logout();
            reply.send(Ok(profile("a@b.com"))).unwrap();
        });
        result
    });

    assert_eq!(result, Err(AuthError::Superseded));
    assert_eq!(session.snapshot(), Session::Anonymous);
    assert_eq!(storage.load(), None);
}

#[test]
fn signup_registers_then_logs_in() {
    let storage = MemoryTokenStorage::default();
    let (session, backend) = store(
        ScriptedBackend::default()
            .with_signup(Ok(()))
            .with_login(Ok("jwt".to_owned()))
            .with_profile(Ok(profile("a@b.com"))),
        &storage,
    );

    block_on(session.signup("ada", "a@b.com", "secret")).unwrap();

    assert_eq!(session.snapshot().status(), SessionStatus::Authenticated);
    assert_eq!(calls(&backend), vec!["signup:ada", "login:a@b.com", "me:jwt"]);
}

#[test]
fn signup_duplicate_identifier_stays_anonymous() {
    let storage = MemoryTokenStorage::default();
    let (session, backend) = store(
        ScriptedBackend::default().with_signup(Err(ApiError::Status {
            status: 409,
            message: Some("Email already in use".to_owned()),
        })),
        &storage,
    );

    let err = block_on(session.signup("ada", "a@b.com", "secret")).unwrap_err();

    assert!(matches!(err, AuthError::Signup(_)));
    assert_eq!(err.user_message("Signup failed."), "Email already in use");
    assert_eq!(session.snapshot(), Session::Anonymous);
    assert_eq!(storage.load(), None);
    assert_eq!(calls(&backend), vec!["signup:ada"]);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_credential_without_network() {
    let storage = MemoryTokenStorage::with_token("t1");
    let (session, backend) = store(
        ScriptedBackend::default().with_profile(Ok(profile("a@b.com"))),
        &storage,
    );
    block_on(session.rehydrate());
    assert_eq!(session.snapshot().status(), SessionStatus::Authenticated);

    session.logout();

    assert_eq!(session.snapshot(), Session::Anonymous);
    assert_eq!(storage.load(), None);
    assert_eq!(calls(&backend), vec!["me:t1"]);
}

#[test]
fn read_only_signal_tracks_transitions() {
    let storage = MemoryTokenStorage::with_token("t1");
    let (session, _) = store(
        ScriptedBackend::default().with_profile(Ok(profile("a@b.com"))),
        &storage,
    );
    let view = session.session();
    assert_eq!(view.get_untracked().status(), SessionStatus::Resolving);

    block_on(session.rehydrate());
    assert_eq!(view.get_untracked().status(), SessionStatus::Authenticated);

    session.logout();
    assert_eq!(view.get_untracked().status(), SessionStatus::Anonymous);
}

// =============================================================
// Session accessors
// =============================================================

#[test]
fn resolving_has_token_but_no_user() {
    let session = Session::Resolving {
        token: "t".to_owned(),
    };
    assert_eq!(session.token(), Some("t"));
    assert!(session.user().is_none());
}

#[test]
fn anonymous_has_neither_token_nor_user() {
    assert_eq!(Session::Anonymous.token(), None);
    assert!(Session::Anonymous.user().is_none());
    assert_eq!(Session::Anonymous.status(), SessionStatus::Anonymous);
}
