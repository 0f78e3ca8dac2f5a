use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub house_number: Option<String>,
    pub street: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.house_number.is_none() && self.street.is_none()
    }
}
