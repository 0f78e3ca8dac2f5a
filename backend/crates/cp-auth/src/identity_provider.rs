use crate::{AuthStateStream, Result as AuthErrorResult};

use async_trait::async_trait;

/// External identity provider the gate subscribes to.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Subscribe to authentication-state changes.
    ///
    /// The stream must yield the current state immediately and then one item
    /// for every later transition (sign-in, sign-out, token refresh).
    fn subscribe(&self) -> AuthStateStream;

    /// Terminate the current session.
    async fn sign_out(&self) -> AuthErrorResult<()>;
}
