use uuid::Uuid;

/// Identifies one `protect_page` run in the logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationId(Uuid);

impl NavigationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NavigationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NavigationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
