use crate::UserIdentity;

use serde::Serialize;
use vst_core::ROLE_ADMIN;

/// Snapshot of the session as published by [`crate::AuthContext`].
///
/// `user` is only ever present alongside a valid, unexpired `token`.
/// `loading` is true only until the startup resolution pass completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    #[serde(skip_serializing)]
    token: Option<String>,
    user: Option<UserIdentity>,
    loading: bool,
}

impl SessionState {
    pub(crate) fn loading() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }

    pub(crate) fn signed_out() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
        }
    }

    pub(crate) fn signed_in(token: String, user: UserIdentity) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            loading: false,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// False whenever no identity is resolved, including while loading.
    pub fn has_role(&self, role: &str) -> bool {
        self.user.as_ref().is_some_and(|u| u.has_role(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}
