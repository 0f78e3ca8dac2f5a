/// Steps of one gate evaluation.
///
/// ```text
/// CheckingAuth -> LoadingProfile -> CheckingRole -> Ready
///      |               |                 |
///      v               v                 v
/// RedirectLogin  SignOutAndRedirectLogin  RedirectRoleHome
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    CheckingAuth,
    LoadingProfile,
    CheckingRole,
    Ready,
    RedirectLogin,
    SignOutAndRedirectLogin,
    RedirectRoleHome,
}

impl GateState {
    /// Terminal states end the page: no further auth events are evaluated.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::RedirectLogin | Self::SignOutAndRedirectLogin | Self::RedirectRoleHome
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CheckingAuth => "checking_auth",
            Self::LoadingProfile => "loading_profile",
            Self::CheckingRole => "checking_role",
            Self::Ready => "ready",
            Self::RedirectLogin => "redirect_login",
            Self::SignOutAndRedirectLogin => "sign_out_and_redirect_login",
            Self::RedirectRoleHome => "redirect_role_home",
        }
    }
}

impl std::fmt::Display for GateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
