//! Operator-side entry points: run the session gate for an identity against
//! the profile database, and the admin role screens.

use crate::error::{PortalError, Result as PortalErrorResult};
use crate::report::{GateReport, LogoutReport, ProfileListReport, RoleReport};

use cp_auth::{
    ClickEvent, GateOutcome, HistoryNavigator, LocalIdentityProvider, PageControls,
    ProtectOptions, SessionGate,
};
use cp_config::Config;
use cp_core::{AccountType, Identity};
use cp_db::ProfileRepository;

use std::sync::Arc;

use log::{debug, info};
use tokio::task::AbortHandle;

pub struct Portal {
    config: Config,
    repository: Arc<ProfileRepository>,
}

/// One protected page load. Leaving the visit stops its gate task.
struct PageVisit {
    gate: SessionGate,
    navigator: Arc<HistoryNavigator>,
    outcome: Option<GateOutcome>,
    abort: AbortHandle,
}

impl Drop for PageVisit {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

impl Portal {
    /// Open the configured profile database.
    pub async fn open(config: Config) -> PortalErrorResult<Self> {
        let pool = cp_db::connect(&config.database_path()?).await?;
        Ok(Self::with_repository(config, ProfileRepository::new(pool)))
    }

    pub fn with_repository(config: Config, repository: ProfileRepository) -> Self {
        Self {
            config,
            repository: Arc::new(repository),
        }
    }

    pub fn repository(&self) -> &ProfileRepository {
        &self.repository
    }

    /// Sign `identity` in and load a page that requires `expected_role`.
    pub async fn check(
        &self,
        identity: Identity,
        expected_role: AccountType,
    ) -> PortalErrorResult<GateReport> {
        let uid = identity.id.clone();
        let visit = self.visit(identity, expected_role).await;

        Ok(GateReport::new(
            &uid,
            expected_role,
            visit.outcome.as_ref(),
            visit.navigator.current(),
        ))
    }

    /// Load the page as `check` does, then press the first logout control.
    pub async fn logout(
        &self,
        identity: Identity,
        expected_role: AccountType,
    ) -> PortalErrorResult<LogoutReport> {
        let uid = identity.id.clone();
        let visit = self.visit(identity, expected_role).await;
        let gate_report = GateReport::new(
            &uid,
            expected_role,
            visit.outcome.as_ref(),
            visit.navigator.current(),
        );

        let logout = if gate_report.ready {
            let page = PageControls::new(self.config.gate.logout_trigger_ids.iter().cloned());
            let buttons = visit.gate.setup_logout_button(&page);
            match buttons.bound_ids().first() {
                Some(id) => Some(buttons.click(id, &mut ClickEvent::new()).await),
                None => None,
            }
        } else {
            debug!("Page for {uid} was left before logout could be bound");
            None
        };

        Ok(LogoutReport {
            gate: gate_report,
            logout,
            final_location: visit.navigator.current(),
        })
    }

    /// Change the role of an existing profile.
    pub async fn set_role(
        &self,
        uid: &str,
        account_type: AccountType,
    ) -> PortalErrorResult<RoleReport> {
        let profile = self
            .repository
            .find_by_id(uid)
            .await?
            .ok_or_else(|| PortalError::profile_not_found(uid))?;

        let changed = if profile.account_type == account_type {
            false
        } else {
            self.repository.set_account_type(uid, account_type).await?
        };

        if changed {
            info!(
                "Account type of {uid} changed: {} -> {account_type}",
                profile.account_type
            );
        }

        Ok(RoleReport {
            uid: uid.to_string(),
            previous: profile.account_type,
            account_type,
            changed,
        })
    }

    /// Profiles with `account_type`, newest first.
    pub async fn list(&self, account_type: AccountType) -> PortalErrorResult<ProfileListReport> {
        let profiles = self.repository.find_by_account_type(account_type).await?;
        let count = self.repository.count_by_account_type(account_type).await?;

        Ok(ProfileListReport {
            account_type,
            count,
            profiles,
        })
    }

    async fn visit(&self, identity: Identity, expected_role: AccountType) -> PageVisit {
        let provider = Arc::new(LocalIdentityProvider::signed_in(identity));
        let navigator = Arc::new(HistoryNavigator::new());
        let gate = SessionGate::from_config(
            provider,
            self.repository.clone(),
            navigator.clone(),
            &self.config,
        );

        let mut listener = gate.ready().subscribe();
        let handle = gate.protect_page(ProtectOptions::new(expected_role));
        let abort = handle.abort_handle();

        // The local session stays open after ready, so the gate task only
        // finishes on its own when it redirects.
        let outcome = tokio::select! {
            Some(notification) = listener.recv() => Some(GateOutcome::Ready(notification)),
            outcome = handle.outcome() => outcome,
        };

        PageVisit {
            gate,
            navigator,
            outcome,
            abort,
        }
    }
}
