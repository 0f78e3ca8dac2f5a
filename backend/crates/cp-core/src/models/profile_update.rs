use crate::Address;

use serde::{Deserialize, Serialize};

/// Merge patch applied by the profile settings screen.
///
/// `None` leaves the stored value untouched. There is no
/// `account_type` here: roles only change through admin role management.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.middle_name.is_none()
            && self.phone.is_none()
            && self.address.as_ref().is_none_or(Address::is_empty)
    }
}
