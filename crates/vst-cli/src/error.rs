use crate::ClientError;

use error_location::ErrorLocation;
use thiserror::Error;
use vst_auth::{AuthError, Route};
use vst_config::ConfigError;
use vst_core::CoreError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    /// A guard refused the requested page.
    #[error("{requested} is not available, redirected to {to}")]
    Redirected { requested: Route, to: Route },

    /// The backend rejected the stored token; the local session was cleared.
    #[error("Session is no longer valid, sign in again via {login}: {message}")]
    SessionEnded { login: Route, message: String },

    #[error("Session state is still loading {location}")]
    SessionLoading { location: ErrorLocation },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Short machine-readable code, printed with every failure
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Client(ClientError::Api { .. }) => "API_ERROR",
            Self::Client(ClientError::Http { .. }) => "NETWORK_ERROR",
            Self::Client(_) => "CLIENT_ERROR",
            Self::Auth(e) => e.error_code(),
            Self::Config(_) => "CONFIG_ERROR",
            Self::Core(_) => "VALIDATION_ERROR",
            Self::Redirected { .. } => "REDIRECTED",
            Self::SessionEnded { .. } => "SESSION_ENDED",
            Self::SessionLoading { .. } => "SESSION_LOADING",
            Self::Logger { .. } => "LOGGER_ERROR",
        }
    }

    /// Where the user should go next, if anywhere.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Redirected { to, .. } => Some(*to),
            Self::SessionEnded { login, .. } => Some(*login),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
