use crate::{AuthResult, SessionResolver, SessionState, TokenStore, UserIdentity};

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::watch;

/// Process-wide session state and the only thing allowed to change it.
///
/// Readers take a snapshot with [`AuthContext::state`] or follow changes
/// through [`AuthContext::subscribe`]. Writes happen exclusively through
/// [`AuthContext::login`] and [`AuthContext::logout`].
pub struct AuthContext {
    resolver: SessionResolver,
    state_tx: watch::Sender<SessionState>,
}

impl AuthContext {
    /// Build the context and run the startup resolution pass from the store.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self::with_resolver(SessionResolver::new(store))
    }

    pub fn with_resolver(resolver: SessionResolver) -> Self {
        let (state_tx, _) = watch::channel(SessionState::loading());
        let context = Self { resolver, state_tx };
        context.initialize();
        context
    }

    fn initialize(&self) {
        let token = match self.resolver.store().load() {
            Ok(token) => token,
            Err(e) => {
                warn!("Could not read stored token, starting signed out: {e}");
                None
            }
        };

        let state = match token {
            Some(token) => match self.resolver.resolve(Some(&token)) {
                Some(user) => SessionState::signed_in(token, user),
                None => SessionState::signed_out(),
            },
            None => SessionState::signed_out(),
        };

        self.state_tx.send_replace(state);
    }

    /// Persist `token` and resolve it.
    ///
    /// A token that is already expired or malformed leaves the session
    /// signed out and the error is returned for the caller to report.
    pub fn login(&self, token: &str) -> AuthResult<UserIdentity> {
        let token = token.trim();
        self.resolver.store().save(token)?;

        match self.resolver.resolve_at(token, self.resolver.now()) {
            Ok(user) => {
                info!("Signed in as {}", user.email);
                self.state_tx
                    .send_replace(SessionState::signed_in(token.to_string(), user.clone()));
                Ok(user)
            }
            Err(e) => {
                self.state_tx.send_replace(SessionState::signed_out());
                Err(e)
            }
        }
    }

    /// Clear the store and the session. Safe to call repeatedly.
    pub fn logout(&self) {
        if let Err(e) = self.resolver.store().clear() {
            warn!("Failed to remove stored token: {e}");
        }
        if self.state_tx.borrow().is_authenticated() {
            info!("Signed out");
        }
        self.state_tx.send_replace(SessionState::signed_out());
    }

    pub fn state(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn current_user(&self) -> Option<UserIdentity> {
        self.state_tx.borrow().user().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.state_tx.borrow().token().map(String::from)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.state_tx.borrow().has_role(role)
    }

    pub fn is_admin(&self) -> bool {
        self.state_tx.borrow().is_admin()
    }

    pub fn is_loading(&self) -> bool {
        self.state_tx.borrow().is_loading()
    }

    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        Arc::clone(self.resolver.store())
    }
}
