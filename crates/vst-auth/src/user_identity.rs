use crate::Claims;

use serde::Serialize;
use vst_core::ROLE_ADMIN;

/// Who the current token says the user is. Derived from claims on every
/// resolution and never persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    pub email: String,
    pub roles: Vec<String>,
}

impl UserIdentity {
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            email: claims.sub.clone(),
            roles: claims.role_names(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ROLE_ADMIN)
    }
}
