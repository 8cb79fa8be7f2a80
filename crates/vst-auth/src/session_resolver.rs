use crate::{AuthError, AuthResult, Claims, TokenStore, UserIdentity};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, warn};

type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Turns a raw token into a [`UserIdentity`].
///
/// Decoding is local and stateless. A token that fails to decode or has
/// expired is removed from the store; that is the only side effect.
#[derive(Clone)]
pub struct SessionResolver {
    store: Arc<dyn TokenStore>,
    clock: Clock,
}

impl SessionResolver {
    /// Resolver using the wall clock.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self::with_clock(store, Arc::new(|| Utc::now().timestamp()))
    }

    /// Resolver with an injected clock returning Unix seconds.
    pub fn with_clock(store: Arc<dyn TokenStore>, clock: Clock) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub fn now(&self) -> i64 {
        (self.clock)()
    }

    /// Resolve against the current time. Absent token means absent identity.
    pub fn resolve(&self, token: Option<&str>) -> Option<UserIdentity> {
        let token = token?;
        self.resolve_at(token, self.now()).ok()
    }

    /// Resolve against `now`, reporting why a token was rejected. The store
    /// is cleared before the error is returned.
    #[track_caller]
    pub fn resolve_at(&self, token: &str, now: i64) -> AuthResult<UserIdentity> {
        match Self::inspect(token, now) {
            Ok(identity) => {
                debug!(
                    "Session resolved for {} (roles: [{}])",
                    identity.email,
                    identity.roles.join(", ")
                );
                Ok(identity)
            }
            Err(e) => {
                debug!("Discarding session token: {e}");
                if let Err(store_err) = self.store.clear() {
                    warn!("Failed to clear rejected token: {store_err}");
                }
                Err(e)
            }
        }
    }

    /// Pure decode-and-check, no store access.
    #[track_caller]
    pub fn inspect(token: &str, now: i64) -> AuthResult<UserIdentity> {
        let claims = Claims::decode_unverified(token)?;

        if claims.is_expired_at(now) {
            return Err(AuthError::TokenExpired {
                expired_at: claims.exp,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(UserIdentity::from_claims(&claims))
    }
}
