pub mod auth_state;
pub mod error;
pub mod gate_outcome;
pub mod gate_state;
pub mod identity_provider;
pub mod local_identity_provider;
pub mod logout;
pub mod navigation_id;
pub mod navigator;
pub mod profile_store;
pub mod protect_options;
pub mod ready_channel;
pub mod route;
pub mod session_gate;

pub use auth_state::{AuthState, AuthStateStream};
pub use error::{AuthError, Result};
pub use gate_outcome::GateOutcome;
pub use gate_state::GateState;
pub use identity_provider::IdentityProvider;
pub use local_identity_provider::LocalIdentityProvider;
pub use logout::{ClickEvent, LogoutButtons, LogoutHandler, LogoutOutcome, PageControls};
pub use navigation_id::NavigationId;
pub use navigator::{HistoryNavigator, Navigator};
pub use profile_store::ProfileStore;
pub use protect_options::ProtectOptions;
pub use ready_channel::{ReadyChannel, ReadyListener, ReadyNotification};
pub use route::{Route, RouteTable};
pub use session_gate::{GateHandle, SessionGate};

#[cfg(test)]
mod tests;
