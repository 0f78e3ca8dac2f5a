use crate::{AuthState, AuthStateStream, IdentityProvider, Result as AuthErrorResult};

use cp_core::Identity;

use async_trait::async_trait;
use futures::StreamExt;
use log::info;
use tokio::sync::watch;

/// In-process identity provider holding a single session.
///
/// Subscribers see the current state first and then every change, the same
/// contract a hosted provider's auth-state listener offers.
#[derive(Clone)]
pub struct LocalIdentityProvider {
    state_tx: watch::Sender<AuthState>,
}

impl LocalIdentityProvider {
    pub fn new() -> Self {
        let (state_tx, _) = watch::channel(AuthState::SignedOut);
        Self { state_tx }
    }

    pub fn signed_in(identity: Identity) -> Self {
        let provider = Self::new();
        provider.sign_in(identity);
        provider
    }

    pub fn sign_in(&self, identity: Identity) {
        info!("Identity {} signed in", identity.id);
        self.state_tx.send_replace(AuthState::SignedIn(identity));
    }

    pub fn current(&self) -> AuthState {
        self.state_tx.borrow().clone()
    }
}

impl Default for LocalIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for LocalIdentityProvider {
    fn subscribe(&self) -> AuthStateStream {
        let state_rx = self.state_tx.subscribe();

        futures::stream::unfold((state_rx, true), |(mut state_rx, first)| async move {
            // Provider dropped: no more transitions
            if !first && state_rx.changed().await.is_err() {
                return None;
            }
            let state = state_rx.borrow_and_update().clone();
            Some((state, (state_rx, false)))
        })
        .boxed()
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        let previous = self.state_tx.send_replace(AuthState::SignedOut);
        if let Some(identity) = previous.identity() {
            info!("Identity {} signed out", identity.id);
        }
        Ok(())
    }
}
