#![allow(dead_code)]

use crate::{
    AuthError, AuthState, AuthStateStream, HistoryNavigator, IdentityProvider, ProfileStore,
    Result as AuthErrorResult, RouteTable, SessionGate,
};

use cp_config::GateConfig;
use cp_core::{AccountType, Identity, Profile};

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::StreamExt;
use tokio::sync::Notify;

/// Provider that replays a fixed list of auth-state events.
#[derive(Default)]
pub(crate) struct ScriptedIdentityProvider {
    states: Vec<AuthState>,
    sign_out_calls: AtomicUsize,
    failing_sign_outs: AtomicUsize,
    slow_sign_out: AtomicBool,
}

impl ScriptedIdentityProvider {
    pub(crate) fn new(states: Vec<AuthState>) -> Self {
        Self {
            states,
            ..Default::default()
        }
    }

    pub(crate) fn signed_in(identity: Identity) -> Self {
        Self::new(vec![AuthState::SignedIn(identity)])
    }

    pub(crate) fn signed_out() -> Self {
        Self::new(vec![AuthState::SignedOut])
    }

    /// The next `count` sign-out calls fail.
    pub(crate) fn failing_sign_outs(self, count: usize) -> Self {
        self.failing_sign_outs.store(count, Ordering::SeqCst);
        self
    }

    /// Sign-out yields once before completing.
    pub(crate) fn slow_sign_out(self) -> Self {
        self.slow_sign_out.store(true, Ordering::SeqCst);
        self
    }

    pub(crate) fn sign_out_calls(&self) -> usize {
        self.sign_out_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityProvider for ScriptedIdentityProvider {
    fn subscribe(&self) -> AuthStateStream {
        futures::stream::iter(self.states.clone()).boxed()
    }

    async fn sign_out(&self) -> AuthErrorResult<()> {
        self.sign_out_calls.fetch_add(1, Ordering::SeqCst);

        if self.slow_sign_out.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }

        let failing = self.failing_sign_outs.load(Ordering::SeqCst);
        if failing > 0 {
            self.failing_sign_outs.store(failing - 1, Ordering::SeqCst);
            return Err(AuthError::sign_out("provider unavailable"));
        }

        Ok(())
    }
}

/// In-memory profile store with failure switches and access counters.
#[derive(Default)]
pub(crate) struct MemoryProfileStore {
    profiles: Mutex<HashMap<String, Profile>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    discard_writes: AtomicBool,
    read_gate: Option<Arc<Notify>>,
    read_error: Option<fn(&str) -> AuthError>,
}

impl MemoryProfileStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_profile(self, profile: Profile) -> Self {
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.user_id.clone(), profile);
        self
    }

    pub(crate) fn failing_reads(self) -> Self {
        self.fail_reads.store(true, Ordering::SeqCst);
        self
    }

    pub(crate) fn failing_writes(self) -> Self {
        self.fail_writes.store(true, Ordering::SeqCst);
        self
    }

    /// Writes report success but store nothing.
    pub(crate) fn discarding_writes(self) -> Self {
        self.discard_writes.store(true, Ordering::SeqCst);
        self
    }

    /// Every read waits for a permit on `gate` before answering.
    pub(crate) fn blocking_reads(mut self, gate: Arc<Notify>) -> Self {
        self.read_gate = Some(gate);
        self
    }

    /// Reads fail with the error built by `error`.
    pub(crate) fn failing_reads_with(mut self, error: fn(&str) -> AuthError) -> Self {
        self.read_error = Some(error);
        self
    }

    pub(crate) fn get(&self, user_id: &str) -> Option<Profile> {
        self.profiles.lock().unwrap().get(user_id).cloned()
    }

    pub(crate) fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn read_profile(&self, user_id: &str) -> AuthErrorResult<Option<Profile>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(ref gate) = self.read_gate {
            gate.notified().await;
        }
        if let Some(error) = self.read_error {
            return Err(error(user_id));
        }
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AuthError::profile_fetch(user_id, "backend unreachable"));
        }
        Ok(self.get(user_id))
    }

    async fn create_profile_if_absent(&self, profile: &Profile) -> AuthErrorResult<bool> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AuthError::profile_write(&profile.user_id, "permission denied"));
        }
        if self.discard_writes.load(Ordering::SeqCst) {
            return Ok(true);
        }

        let mut profiles = self.profiles.lock().unwrap();
        if profiles.contains_key(&profile.user_id) {
            return Ok(false);
        }
        profiles.insert(profile.user_id.clone(), profile.clone());
        Ok(true)
    }
}

pub(crate) fn profile_with_role(user_id: &str, account_type: AccountType) -> Profile {
    let mut profile = Profile::default_for(&Identity::new(user_id));
    profile.account_type = account_type;
    profile
}

pub(crate) struct TestGate {
    pub(crate) gate: SessionGate,
    pub(crate) navigator: Arc<HistoryNavigator>,
}

pub(crate) fn build_gate(
    provider: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
) -> TestGate {
    let navigator = Arc::new(HistoryNavigator::new());
    let gate = SessionGate::new(
        provider,
        store,
        navigator.clone(),
        RouteTable::default(),
        &GateConfig::default(),
    );
    TestGate { gate, navigator }
}
