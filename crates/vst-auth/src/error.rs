use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired at {expired_at} {location}")]
    TokenExpired {
        expired_at: i64,
        location: ErrorLocation,
    },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token store error at {path}: {source} {location}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid origin '{origin}': {message} {location}")]
    InvalidOrigin {
        origin: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Short machine-readable code, used in CLI error output
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::Store { .. } => "TOKEN_STORE",
            Self::InvalidOrigin { .. } => "INVALID_ORIGIN",
        }
    }

    /// Whether the error means the session itself is unusable (as opposed
    /// to local storage trouble).
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidToken { .. }
                | Self::TokenExpired { .. }
                | Self::JwtDecode { .. }
                | Self::InvalidClaim { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
