use cp_core::{Identity, Profile};

use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, warn};
use serde::Serialize;
use tokio::sync::broadcast;

/// Payload published once the identity and profile are resolved and the
/// role check passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadyNotification {
    pub identity: Identity,
    pub profile: Profile,
}

/// In-process pub/sub for ready notifications on one page.
///
/// Every subscriber receives each publication. The last publication is kept
/// so that listeners registering late can still read it through `latest()`.
#[derive(Clone)]
pub struct ReadyChannel {
    ready_tx: broadcast::Sender<Arc<ReadyNotification>>,
    latest: Arc<RwLock<Option<Arc<ReadyNotification>>>>,
}

impl ReadyChannel {
    pub fn new(capacity: usize) -> Self {
        let (ready_tx, _) = broadcast::channel(capacity.max(1));
        Self {
            ready_tx,
            latest: Arc::new(RwLock::new(None)),
        }
    }

    pub fn subscribe(&self) -> ReadyListener {
        ReadyListener {
            ready_rx: self.ready_tx.subscribe(),
        }
    }

    /// Deliver to every current subscriber and remember it as the latest.
    pub fn publish(&self, notification: ReadyNotification) -> Arc<ReadyNotification> {
        let notification = Arc::new(notification);

        *self.latest.write().unwrap_or_else(PoisonError::into_inner) =
            Some(Arc::clone(&notification));

        match self.ready_tx.send(Arc::clone(&notification)) {
            Ok(receivers) => debug!(
                "Ready notification for {} delivered to {} listener(s)",
                notification.identity.id, receivers
            ),
            Err(_) => debug!(
                "Ready notification for {} published with no listeners",
                notification.identity.id
            ),
        }

        notification
    }

    /// Most recent publication, if any.
    pub fn latest(&self) -> Option<Arc<ReadyNotification>> {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn listener_count(&self) -> usize {
        self.ready_tx.receiver_count()
    }
}

/// Receiving end handed to page components.
pub struct ReadyListener {
    ready_rx: broadcast::Receiver<Arc<ReadyNotification>>,
}

impl ReadyListener {
    /// Wait for the next ready notification.
    ///
    /// Returns `None` once the channel is closed. Lagged gaps are skipped
    /// since listeners must tolerate redelivery anyway.
    pub async fn recv(&mut self) -> Option<Arc<ReadyNotification>> {
        loop {
            match self.ready_rx.recv().await {
                Ok(notification) => return Some(notification),
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!("Ready listener lagged, skipped {missed} notification(s)");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Non-blocking check for a pending notification.
    pub fn try_recv(&mut self) -> Option<Arc<ReadyNotification>> {
        loop {
            match self.ready_rx.try_recv() {
                Ok(notification) => return Some(notification),
                Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                Err(_) => return None,
            }
        }
    }
}
