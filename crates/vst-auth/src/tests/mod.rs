mod token_store;

use crate::{
    AuthContext, Claims, MemoryTokenStore, RoleGrant, SessionResolver, SessionState, TokenStore,
};

use std::sync::Arc;

use jsonwebtoken::{EncodingKey, Header, encode};

/// Fixed "now" for deterministic expiry checks.
pub(crate) const NOW: i64 = 1_790_000_000;

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn create_test_token(sub: &str, exp: i64, roles: &[&str]) -> String {
    let claims = Claims {
        sub: sub.to_string(),
        exp,
        iat: Some(exp - 3600),
        roles: roles.iter().map(|r| RoleGrant::new(r)).collect(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

pub(crate) fn create_malformed_token() -> String {
    "not.a.valid.jwt.token".to_string()
}

pub(crate) fn fixed_clock_resolver(store: Arc<dyn TokenStore>) -> SessionResolver {
    SessionResolver::with_clock(store, Arc::new(|| NOW))
}

/// Context over a memory store pre-seeded with `token`.
pub(crate) fn context_with(token: Option<&str>) -> (AuthContext, Arc<MemoryTokenStore>) {
    let store = Arc::new(match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    });
    let context = AuthContext::with_resolver(fixed_clock_resolver(store.clone()));
    (context, store)
}

pub(crate) fn signed_out() -> SessionState {
    SessionState::signed_out()
}

pub(crate) fn signed_in_as(roles: &[&str]) -> SessionState {
    let token = create_test_token("trader@example.com", NOW + 3600, roles);
    let user = SessionResolver::inspect(&token, NOW).unwrap();
    SessionState::signed_in(token, user)
}
