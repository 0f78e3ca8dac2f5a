use std::sync::{Mutex, PoisonError};

use log::info;

/// Moves the hosting page to another location.
pub trait Navigator: Send + Sync {
    fn redirect(&self, location: &str);
}

/// Navigator that keeps every location it was sent to.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Mutex<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent location, if any redirect happened.
    pub fn current(&self) -> Option<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn history(&self) -> Vec<String> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for HistoryNavigator {
    fn redirect(&self, location: &str) {
        info!("Navigating to {location}");
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(location.to_string());
    }
}
