use crate::{AuthError, Result as AuthErrorResult};

use cp_core::Profile;
use cp_db::ProfileRepository;

use async_trait::async_trait;

/// Profile lookups and the conditional self-heal write the gate needs.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn read_profile(&self, user_id: &str) -> AuthErrorResult<Option<Profile>>;

    /// Persist `profile` only if no profile exists for its identity yet.
    ///
    /// Returns `true` when the write created the record. A concurrent writer
    /// that got there first is never overwritten.
    async fn create_profile_if_absent(&self, profile: &Profile) -> AuthErrorResult<bool>;
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn read_profile(&self, user_id: &str) -> AuthErrorResult<Option<Profile>> {
        self.find_by_id(user_id)
            .await
            .map_err(|e| AuthError::profile_fetch(user_id, e.to_string()))
    }

    async fn create_profile_if_absent(&self, profile: &Profile) -> AuthErrorResult<bool> {
        self.create_if_absent(profile)
            .await
            .map_err(|e| AuthError::profile_write(&profile.user_id, e.to_string()))
    }
}
