use crate::{AuthError, AuthResult};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// One entry of the `roles` claim, e.g. `{"authority": "ROLE_ADMIN"}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleGrant {
    pub authority: String,
}

impl RoleGrant {
    pub fn new(authority: &str) -> Self {
        Self {
            authority: authority.to_string(),
        }
    }
}

/// JWT claims issued by the trading backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account email)
    pub sub: String,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
    /// Issued at timestamp (Unix seconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Required; a token without it is not a session token.
    pub roles: Vec<RoleGrant>,
}

impl Claims {
    /// Decode the payload segment without checking the signature.
    ///
    /// The header must still parse as a JWT header and the token must have
    /// exactly three segments.
    #[track_caller]
    pub fn decode_unverified(token: &str) -> AuthResult<Self> {
        let token = token.trim();

        jsonwebtoken::decode_header(token).map_err(|source| AuthError::JwtDecode {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

        let segments: Vec<&str> = token.split('.').collect();
        let [_, payload, _] = segments.as_slice() else {
            return Err(AuthError::InvalidToken {
                message: format!("expected 3 segments, found {}", segments.len()),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let bytes = URL_SAFE_NO_PAD
            .decode(payload.trim_end_matches('='))
            .map_err(|e| AuthError::InvalidToken {
                message: format!("payload is not base64url: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let claims: Claims =
            serde_json::from_slice(&bytes).map_err(|e| AuthError::InvalidToken {
                message: format!("payload is not a claims object: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        claims.validate()?;

        Ok(claims)
    }

    /// Validate claims after decoding
    #[track_caller]
    pub fn validate(&self) -> AuthResult<()> {
        if self.sub.trim().is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (email) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.roles.iter().any(|r| r.authority.trim().is_empty()) {
            return Err(AuthError::InvalidClaim {
                claim: "roles".to_string(),
                message: "role authority cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    /// Expired when `exp` is at or before `now`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.exp <= now
    }

    /// Role names in claim order, without duplicates.
    pub fn role_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.roles.len());
        for grant in &self.roles {
            if !names.contains(&grant.authority) {
                names.push(grant.authority.clone());
            }
        }
        names
    }
}
