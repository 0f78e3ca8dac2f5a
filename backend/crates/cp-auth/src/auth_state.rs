use cp_core::Identity;

use futures::stream::BoxStream;

/// One authentication-state transition reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    SignedOut,
    SignedIn(Identity),
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::SignedIn(identity) => Some(identity),
            Self::SignedOut => None,
        }
    }
}

/// Current state first, then one item per transition.
pub type AuthStateStream = BoxStream<'static, AuthState>;
