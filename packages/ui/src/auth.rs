//! Authentication context and hooks for the UI.
//!
//! The session (token + user) and the [`ApiClient`] carrying its bearer token
//! live together in one [`Session`] signal owned by [`AuthProvider`].
//! Components read it and mutate it only through [`AuthContext`]:
//! [`sign_in`](AuthContext::sign_in), [`sign_out`](AuthContext::sign_out) and
//! [`update_user`](AuthContext::update_user). Each of those also keeps the
//! persisted credential in step.

use api::{ApiClient, ApiError, AuthData, Backend, SessionRequest, UserInfo};
use dioxus::prelude::*;
use store::{KeyValueStore, SessionStore};

use crate::storage::{make_session_store, PlatformStore};

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<AuthData>,
}

impl AuthState {
    /// Rebuild the state from a persisted credential, if any.
    pub fn restore<S: KeyValueStore>(store: &SessionStore<S>) -> Self {
        let session = store
            .load::<UserInfo>()
            .map(|stored| AuthData {
                token: stored.token,
                user: stored.user,
            });
        Self { session }
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(|s| !s.token.is_empty())
    }
}

/// Exchange credentials for a session and persist it.
///
/// Nothing is written when the backend rejects the credentials.
pub async fn sign_in<B: Backend, S: KeyValueStore>(
    backend: &B,
    store: &SessionStore<S>,
    credentials: &SessionRequest,
) -> Result<AuthData, ApiError> {
    let data = backend.create_session(credentials).await?;
    store.save(&data.token, &data.user);
    tracing::info!("Signed in as {}", data.user.email);
    Ok(data)
}

/// Forget the persisted session.
pub fn sign_out<S: KeyValueStore>(store: &SessionStore<S>) {
    store.clear();
    tracing::info!("Signed out");
}

/// Auth state plus the client that authenticates as it.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub state: AuthState,
    pub client: ApiClient,
}

impl Session {
    /// Pair `state` with `client`, attaching the token when there is one.
    pub fn new(client: ApiClient, state: AuthState) -> Self {
        let client = match state.token() {
            Some(token) => client.with_token(token),
            None => client,
        };
        Self { state, client }
    }

    pub fn signed_in(&mut self, data: AuthData) {
        self.client = self.client.with_token(&data.token);
        self.state.session = Some(data);
    }

    pub fn signed_out(&mut self) {
        self.client = self.client.without_token();
        self.state = AuthState::default();
    }

    /// Replace the user, keeping the token. Returns false when signed out.
    pub fn update_user(&mut self, user: UserInfo) -> bool {
        match self.state.session.as_mut() {
            Some(session) => {
                session.user = user;
                true
            }
            None => false,
        }
    }
}

/// Handle to the auth state, provided by [`AuthProvider`].
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: Signal<Session>,
    store: Signal<SessionStore<PlatformStore>>,
}

/// Get the authentication context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

impl AuthContext {
    pub fn state(&self) -> AuthState {
        self.session.read().state.clone()
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.read().state.user().cloned()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().state.is_authenticated()
    }

    /// The API client, carrying the session token when signed in.
    pub fn client(&self) -> ApiClient {
        self.session.read().client.clone()
    }

    /// Sign in; errors are returned to the caller untouched.
    pub async fn sign_in(mut self, credentials: SessionRequest) -> Result<(), ApiError> {
        let client = self.session.peek().client.clone();
        let store = self.store.peek().clone();
        let data = sign_in(&client, &store, &credentials).await?;
        self.session.write().signed_in(data);
        Ok(())
    }

    pub fn sign_out(mut self) {
        sign_out(&*self.store.peek());
        self.session.write().signed_out();
    }

    /// Replace the signed-in user's record, keeping the token.
    pub fn update_user(mut self, user: UserInfo) {
        self.store.peek().save_user(&user);
        self.session.write().update_user(user);
    }
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(client: ApiClient, children: Element) -> Element {
    let store = use_signal(make_session_store);
    let session = use_signal(|| Session::new(client, AuthState::restore(&*store.peek())));

    use_context_provider(|| AuthContext { session, store });

    rsx! {
        {children}
    }
}
