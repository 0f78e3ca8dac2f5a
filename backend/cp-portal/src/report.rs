use cp_auth::{GateOutcome, LogoutOutcome};
use cp_core::{AccountType, Profile};

use serde::Serialize;

/// Result of running the gate for one identity on one page.
#[derive(Debug, Clone, Serialize)]
pub struct GateReport {
    pub uid: String,
    pub expected_role: AccountType,
    /// Terminal gate state, `None` when the provider reported nothing
    pub state: Option<&'static str>,
    pub ready: bool,
    pub signed_out: bool,
    /// Where the page was sent, if it was left
    pub location: Option<String>,
    pub profile: Option<Profile>,
}

impl GateReport {
    pub(crate) fn new(
        uid: &str,
        expected_role: AccountType,
        outcome: Option<&GateOutcome>,
        location: Option<String>,
    ) -> Self {
        let signed_out = matches!(
            outcome,
            Some(GateOutcome::Redirected {
                signed_out: true,
                ..
            })
        );
        let profile = match outcome {
            Some(GateOutcome::Ready(notification)) => Some(notification.profile.clone()),
            _ => None,
        };

        Self {
            uid: uid.to_string(),
            expected_role,
            state: outcome.and_then(GateOutcome::state).map(|s| s.as_str()),
            ready: outcome.is_some_and(GateOutcome::is_ready),
            signed_out,
            location,
            profile,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogoutReport {
    #[serde(flatten)]
    pub gate: GateReport,
    /// `None` when the page was left before logout controls were bound
    pub logout: Option<LogoutOutcome>,
    pub final_location: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleReport {
    pub uid: String,
    pub previous: AccountType,
    pub account_type: AccountType,
    pub changed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileListReport {
    pub account_type: AccountType,
    pub count: i64,
    pub profiles: Vec<Profile>,
}
