use crate::{Route, SessionGate};

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::Ordering;

use log::{debug, error, info};
use serde::Serialize;

pub(crate) const LOGOUT_IDLE: u8 = 0;
const IN_FLIGHT: u8 = 1;
const SIGNED_OUT: u8 = 2;

/// Element ids present on the hosting page.
#[derive(Debug, Clone, Default)]
pub struct PageControls {
    ids: HashSet<String>,
}

impl PageControls {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }
}

/// Click on a logout control.
#[derive(Debug, Default)]
pub struct ClickEvent {
    default_prevented: bool,
}

impl ClickEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the control's own navigation (logout links point somewhere).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoutOutcome {
    /// Session ended and the page was sent to sign-in.
    SignedOut,
    /// Another click is already signing out.
    InProgress,
    /// An earlier click already signed out.
    AlreadySignedOut,
    /// The provider rejected sign-out; the user may click again.
    Failed,
    /// The clicked id is not a bound logout trigger.
    NotBound,
}

/// Sign-out logic behind every bound logout control.
///
/// The idle/in-flight/signed-out state lives on the gate, so handlers from
/// repeated `setup_logout_button` calls still sign out once.
pub struct LogoutHandler {
    gate: SessionGate,
}

impl LogoutHandler {
    pub(crate) fn new(gate: SessionGate) -> Self {
        Self { gate }
    }

    pub async fn handle(&self, event: &mut ClickEvent) -> LogoutOutcome {
        event.prevent_default();

        let state = self.gate.logout_state();
        match state.compare_exchange(
            LOGOUT_IDLE,
            IN_FLIGHT,
            Ordering::SeqCst,
            Ordering::SeqCst,
        ) {
            Ok(_) => {}
            Err(IN_FLIGHT) => {
                debug!("Logout already in flight, ignoring click");
                return LogoutOutcome::InProgress;
            }
            Err(_) => return LogoutOutcome::AlreadySignedOut,
        }

        match self.gate.provider().sign_out().await {
            Ok(()) => {
                state.store(SIGNED_OUT, Ordering::SeqCst);
                info!("User signed out.");
                self.gate.redirect(Route::SignIn);
                LogoutOutcome::SignedOut
            }
            Err(e) => {
                error!("Error signing out: {e}");
                state.store(LOGOUT_IDLE, Ordering::SeqCst);
                LogoutOutcome::Failed
            }
        }
    }
}

/// Logout controls bound on one page.
pub struct LogoutButtons {
    bound: Vec<String>,
    handler: Arc<LogoutHandler>,
}

impl LogoutButtons {
    pub(crate) fn new(bound: Vec<String>, handler: Arc<LogoutHandler>) -> Self {
        Self { bound, handler }
    }

    /// Ids that received a click handler, in configuration order.
    pub fn bound_ids(&self) -> &[String] {
        &self.bound
    }

    pub fn is_bound(&self, id: &str) -> bool {
        self.bound.iter().any(|bound| bound == id)
    }

    pub fn handler(&self) -> Arc<LogoutHandler> {
        Arc::clone(&self.handler)
    }

    pub async fn click(&self, id: &str, event: &mut ClickEvent) -> LogoutOutcome {
        if !self.is_bound(id) {
            return LogoutOutcome::NotBound;
        }
        self.handler.handle(event).await
    }
}
