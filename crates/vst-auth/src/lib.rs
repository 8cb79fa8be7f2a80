//! Client-side session handling for the virtual stock trader.
//!
//! ```text
//! TokenStore ──→ SessionResolver ──→ AuthContext ──→ route guards ──→ views
//! ```
//!
//! Claims are decoded locally and never verified: they drive what the client
//! shows, not what the backend allows. The backend re-validates the bearer
//! token on every request.

pub mod auth_context;
pub mod claims;
pub mod error;
pub mod file_token_store;
pub mod memory_token_store;
pub mod navigator;
pub mod route;
pub mod route_guard;
pub mod session_resolver;
pub mod session_state;
pub mod token_store;
pub mod user_identity;

pub use auth_context::AuthContext;
pub use claims::{Claims, RoleGrant};
pub use error::{AuthError, Result as AuthResult};
pub use file_token_store::FileTokenStore;
pub use memory_token_store::MemoryTokenStore;
pub use navigator::{NavigationOutcome, Navigator};
pub use route::{Route, RouteAccess};
pub use route_guard::{AdminGuard, AuthenticatedGuard, GuardDecision, RouteGuard};
pub use session_resolver::SessionResolver;
pub use session_state::SessionState;
pub use token_store::TokenStore;
pub use user_identity::UserIdentity;

#[cfg(test)]
mod tests;
