//! cp-portal library
//!
//! Command implementations behind the `cp-portal` binary, exported for tests.

pub mod error;
pub mod logger;
pub mod portal;
pub mod report;

#[cfg(test)]
mod tests;

pub use error::{PortalError, Result};
pub use portal::Portal;
pub use report::{GateReport, LogoutReport, ProfileListReport, RoleReport};
