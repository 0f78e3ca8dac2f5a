//! Session gate: the handshake every protected page runs before rendering.
//!
//! The gate subscribes to the identity provider, loads (or self-heals) the
//! profile for the signed-in identity, checks the page's role and then
//! either publishes a ready notification or leaves the page. Every failure
//! ends in one of two places: the sign-in page (identity unusable) or the
//! home page of the identity's actual role (wrong section of the site).
//!
//! A redirect cancels the page. The first redirect wins; evaluations that
//! resume after it are ignored, so a late auth callback can never override
//! where the browser was already sent.
//!
//! Create one gate per page load.

use crate::{
    AuthError, AuthState, GateOutcome, GateState, IdentityProvider, LogoutButtons, LogoutHandler,
    NavigationId, Navigator, PageControls, ProfileStore, ProtectOptions, ReadyChannel,
    ReadyNotification, Result as AuthErrorResult, Route, RouteTable,
};
use crate::logout::LOGOUT_IDLE;

use cp_config::{Config, GateConfig};
use cp_core::{AccountType, Identity, Profile};

use std::panic::Location;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use error_location::ErrorLocation;
use futures::StreamExt;
use log::{debug, error, info, warn};
use tokio::task::{AbortHandle, JoinHandle};

#[derive(Clone)]
pub struct SessionGate {
    inner: Arc<GateInner>,
}

struct GateInner {
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
    navigator: Arc<dyn Navigator>,
    routes: RouteTable,
    logout_trigger_ids: Vec<String>,
    ready: ReadyChannel,
    redirected: AtomicBool,
    /// Shared by every `LogoutHandler` bound for this page
    logout_state: AtomicU8,
}

impl SessionGate {
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        navigator: Arc<dyn Navigator>,
        routes: RouteTable,
        gate_config: &GateConfig,
    ) -> Self {
        Self {
            inner: Arc::new(GateInner {
                provider,
                store,
                navigator,
                routes,
                logout_trigger_ids: gate_config.logout_trigger_ids.clone(),
                ready: ReadyChannel::new(gate_config.ready_channel_capacity),
                redirected: AtomicBool::new(false),
                logout_state: AtomicU8::new(LOGOUT_IDLE),
            }),
        }
    }

    pub fn from_config(
        provider: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        navigator: Arc<dyn Navigator>,
        config: &Config,
    ) -> Self {
        Self::new(
            provider,
            store,
            navigator,
            RouteTable::from(&config.routes),
            &config.gate,
        )
    }

    /// Channel page components listen on for the ready notification.
    pub fn ready(&self) -> &ReadyChannel {
        &self.inner.ready
    }

    pub fn routes(&self) -> &RouteTable {
        &self.inner.routes
    }

    /// Whether this page has already been sent elsewhere.
    pub fn is_redirected(&self) -> bool {
        self.inner.redirected.load(Ordering::SeqCst)
    }

    /// Landing page for an identity that just signed in.
    pub fn landing_for(profile: &Profile) -> Route {
        Route::home_for(profile.account_type)
    }

    /// Gate the page behind "signed in and has `expected_role`".
    ///
    /// Returns immediately. The subscription is taken before returning; all
    /// evaluation happens on a spawned task, once per auth-state event, until
    /// the gate redirects or the provider stops reporting. Must be called
    /// from within a tokio runtime.
    pub fn protect_page(&self, options: ProtectOptions) -> GateHandle {
        let navigation_id = NavigationId::new();
        let mut auth_states = self.inner.provider.subscribe();
        let gate = self.clone();

        info!(
            "[{navigation_id}] Protecting page for role '{}'",
            options.expected_role
        );

        let task = tokio::spawn(async move {
            let mut last_outcome = None;

            while let Some(auth_state) = auth_states.next().await {
                let outcome = gate
                    .evaluate_in(navigation_id, auth_state, options.expected_role)
                    .await;

                if matches!(outcome, GateOutcome::Suppressed) {
                    debug!("[{navigation_id}] Page already redirected, gate stopped");
                    break;
                }

                let terminal = outcome.is_terminal();
                last_outcome = Some(outcome);
                if terminal {
                    break;
                }
            }

            last_outcome
        });

        GateHandle {
            navigation_id,
            task,
        }
    }

    /// Evaluate a single auth-state event against `expected_role`.
    pub async fn evaluate(&self, auth_state: AuthState, expected_role: AccountType) -> GateOutcome {
        self.evaluate_in(NavigationId::new(), auth_state, expected_role)
            .await
    }

    /// Bind the configured logout triggers that exist on `page`.
    ///
    /// Missing triggers are skipped. All bound triggers share one handler, so
    /// clicking several of them still signs out once.
    pub fn setup_logout_button(&self, page: &PageControls) -> LogoutButtons {
        let bound: Vec<String> = self
            .inner
            .logout_trigger_ids
            .iter()
            .filter(|id| page.contains(id))
            .cloned()
            .collect();

        debug!("Logout bound to [{}]", bound.join(", "));

        LogoutButtons::new(bound, Arc::new(LogoutHandler::new(self.clone())))
    }

    pub(crate) fn provider(&self) -> &Arc<dyn IdentityProvider> {
        &self.inner.provider
    }

    pub(crate) fn logout_state(&self) -> &AtomicU8 {
        &self.inner.logout_state
    }

    async fn evaluate_in(
        &self,
        navigation_id: NavigationId,
        auth_state: AuthState,
        expected_role: AccountType,
    ) -> GateOutcome {
        if self.is_redirected() {
            return GateOutcome::Suppressed;
        }

        Self::enter(navigation_id, GateState::CheckingAuth);
        let identity = match auth_state {
            AuthState::SignedOut => {
                info!("[{navigation_id}] No identity signed in, redirecting to sign-in");
                return self.redirect_in(navigation_id, Route::SignIn, false);
            }
            AuthState::SignedIn(identity) => identity,
        };
        debug!("[{navigation_id}] Identity detected: {}", identity.id);

        Self::enter(navigation_id, GateState::LoadingProfile);
        let profile = match self.load_profile(navigation_id, &identity).await {
            Ok(profile) => profile,
            Err(e) if e.is_fatal() => {
                error!("[{navigation_id}] Profile load failed: {e}");
                return self.sign_out_and_redirect(navigation_id).await;
            }
            Err(e) => {
                error!("[{navigation_id}] Profile load interrupted: {e}");
                return self.redirect_in(navigation_id, Route::SignIn, false);
            }
        };

        if self.is_redirected() {
            return GateOutcome::Suppressed;
        }

        Self::enter(navigation_id, GateState::CheckingRole);
        if profile.account_type != expected_role {
            warn!(
                "[{navigation_id}] Role mismatch for {}: expected {expected_role}, got {}",
                identity.id, profile.account_type
            );
            return self.redirect_in(
                navigation_id,
                Route::home_for(profile.account_type),
                false,
            );
        }

        info!(
            "[{navigation_id}] {} authenticated and authorized as {}",
            profile.display_name(),
            profile.account_type
        );
        let notification = self
            .inner
            .ready
            .publish(ReadyNotification { identity, profile });
        Self::enter(navigation_id, GateState::Ready);

        GateOutcome::Ready(notification)
    }

    /// Read the profile, creating the default one when it is missing.
    async fn load_profile(
        &self,
        navigation_id: NavigationId,
        identity: &Identity,
    ) -> AuthErrorResult<Profile> {
        identity
            .validate()
            .map_err(|e| AuthError::InvalidIdentity {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if let Some(profile) = self.inner.store.read_profile(&identity.id).await? {
            return Ok(profile);
        }

        warn!(
            "[{navigation_id}] No profile found for {}, creating default",
            identity.id
        );
        let created = self
            .inner
            .store
            .create_profile_if_absent(&Profile::default_for(identity))
            .await?;
        if !created {
            debug!(
                "[{navigation_id}] Profile for {} was written concurrently, keeping it",
                identity.id
            );
        }

        // Re-read once so the page sees exactly what was persisted
        self.inner
            .store
            .read_profile(&identity.id)
            .await?
            .ok_or_else(|| {
                AuthError::profile_fetch(&identity.id, "profile still missing after default write")
            })
    }

    async fn sign_out_and_redirect(&self, navigation_id: NavigationId) -> GateOutcome {
        if self.is_redirected() {
            debug!("[{navigation_id}] Page already left, skipping sign-out");
            return GateOutcome::Suppressed;
        }

        if let Err(e) = self.inner.provider.sign_out().await {
            error!("[{navigation_id}] Sign-out after profile failure failed: {e}");
        }
        self.redirect_in(navigation_id, Route::SignIn, true)
    }

    pub(crate) fn redirect(&self, route: Route) -> bool {
        !matches!(
            self.redirect_in(NavigationId::new(), route, false),
            GateOutcome::Suppressed
        )
    }

    fn redirect_in(
        &self,
        navigation_id: NavigationId,
        route: Route,
        signed_out: bool,
    ) -> GateOutcome {
        if self.inner.redirected.swap(true, Ordering::SeqCst) {
            debug!("[{navigation_id}] Redirect to {route:?} suppressed, page already left");
            return GateOutcome::Suppressed;
        }

        let location = self.inner.routes.location(route);
        info!("[{navigation_id}] Redirecting to {location}");
        self.inner.navigator.redirect(location);

        let outcome = GateOutcome::Redirected { route, signed_out };
        if let Some(state) = outcome.state() {
            Self::enter(navigation_id, state);
        }
        outcome
    }

    fn enter(navigation_id: NavigationId, state: GateState) {
        debug!("[{navigation_id}] -> {state}");
    }
}

/// Handle to a running `protect_page` task.
pub struct GateHandle {
    navigation_id: NavigationId,
    task: JoinHandle<Option<GateOutcome>>,
}

impl GateHandle {
    pub fn navigation_id(&self) -> NavigationId {
        self.navigation_id
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop listening for further auth-state events.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Detached abort switch, usable after `outcome()` took the handle.
    pub fn abort_handle(&self) -> AbortHandle {
        self.task.abort_handle()
    }

    /// Wait for the gate to stop and return its last outcome.
    ///
    /// `None` when the provider never reported a state or the task was
    /// aborted.
    pub async fn outcome(self) -> Option<GateOutcome> {
        match self.task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                if e.is_panic() {
                    error!("[{}] Gate task panicked: {e}", self.navigation_id);
                }
                None
            }
        }
    }
}
