use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Sign an identity in and load a protected page
    Check {
        #[command(flatten)]
        visit: VisitArgs,
    },

    /// Load a protected page, then press its logout control
    Logout {
        #[command(flatten)]
        visit: VisitArgs,
    },

    /// Change the account type of an existing profile
    SetRole {
        /// Identity ID
        #[arg(long)]
        uid: String,
        /// New account type (user, admin)
        #[arg(long)]
        role: String,
    },

    /// List profiles with an account type, newest first
    List {
        /// Account type (user, admin)
        #[arg(long, default_value = "user")]
        role: String,
    },
}

#[derive(Args)]
pub(crate) struct VisitArgs {
    /// Identity ID issued by the identity provider
    #[arg(long)]
    pub(crate) uid: String,

    /// Email known to the identity provider
    #[arg(long)]
    pub(crate) email: Option<String>,

    /// Phone number known to the identity provider
    #[arg(long)]
    pub(crate) phone: Option<String>,

    /// Role the page requires (user, admin); user when omitted
    #[arg(long)]
    pub(crate) role: Option<String>,
}

impl VisitArgs {
    pub(crate) fn identity(&self) -> cp_core::Identity {
        let mut identity = cp_core::Identity::new(&self.uid);
        if let Some(ref email) = self.email {
            identity = identity.with_email(email);
        }
        if let Some(ref phone) = self.phone {
            identity = identity.with_phone_number(phone);
        }
        identity
    }
}
