use crate::AuthResult;

/// A single durable slot for the raw session token.
///
/// Implementations do no validation; whatever was saved is what loads.
pub trait TokenStore: Send + Sync {
    /// Replace the stored token.
    fn save(&self, token: &str) -> AuthResult<()>;

    /// The stored token, or `None` if nothing is stored.
    fn load(&self) -> AuthResult<Option<String>>;

    /// Remove the stored token. Clearing an empty store is not an error.
    fn clear(&self) -> AuthResult<()>;
}
