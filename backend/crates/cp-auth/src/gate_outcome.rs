use crate::{GateState, ReadyNotification, Route};

use std::sync::Arc;

/// Result of evaluating one auth-state event.
#[derive(Debug, Clone)]
pub enum GateOutcome {
    /// Identity and profile were validated and published.
    Ready(Arc<ReadyNotification>),
    /// The page was left. `signed_out` is set when the session was ended first.
    Redirected { route: Route, signed_out: bool },
    /// A redirect had already been issued; the event was ignored.
    Suppressed,
}

impl GateOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn route(&self) -> Option<Route> {
        match self {
            Self::Redirected { route, .. } => Some(*route),
            _ => None,
        }
    }

    /// Terminal gate state this outcome corresponds to.
    pub fn state(&self) -> Option<GateState> {
        match self {
            Self::Ready(_) => Some(GateState::Ready),
            Self::Redirected {
                signed_out: true, ..
            } => Some(GateState::SignOutAndRedirectLogin),
            Self::Redirected {
                route: Route::SignIn,
                ..
            } => Some(GateState::RedirectLogin),
            Self::Redirected { .. } => Some(GateState::RedirectRoleHome),
            Self::Suppressed => None,
        }
    }

    /// Whether the gate stops listening after this outcome.
    pub fn is_terminal(&self) -> bool {
        match self.state() {
            Some(state) => state.is_terminal(),
            None => true,
        }
    }
}
