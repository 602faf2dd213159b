//! In-memory profile store.
//!
//! The collection lives in a `RefCell` owned by the store; callers share the
//! store through `ProfileService` instead of touching a global. The browser is
//! single threaded, and id assignment and insertion happen inside one borrow,
//! so two creates can never observe the same next id.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use common::model::draft::ProfileDraft;
use common::model::profile::{Profile, ProfileId};
use common::requests::DeleteResponse;

use super::{ProfileStore, StoreError};

#[derive(Debug)]
struct Collection {
    profiles: Vec<Profile>,
    /// Never decremented, so a deleted id is never handed out again. `None`
    /// once `u32::MAX` has been assigned.
    next_id: Option<u32>,
}

#[derive(Debug)]
pub struct MemoryProfileStore {
    collection: RefCell<Collection>,
    latency: Duration,
    offline: Cell<bool>,
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProfileStore {
    /// An empty store that answers immediately.
    pub fn new() -> Self {
        Self::with_profiles(Vec::new())
    }

    /// A store holding `profiles`. New ids continue after the highest id given.
    pub fn with_profiles(profiles: Vec<Profile>) -> Self {
        let next_id = match profiles.iter().map(|p| p.id.0).max() {
            Some(highest) => highest.checked_add(1),
            None => Some(1),
        };
        Self {
            collection: RefCell::new(Collection { profiles, next_id }),
            latency: Duration::ZERO,
            offline: Cell::new(false),
        }
    }

    /// Delay applied before every operation completes.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// While offline every operation fails with `StoreError::Unavailable`,
    /// the way a real backend would when the network is down.
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    async fn round_trip(&self) -> Result<(), StoreError> {
        simulate_latency(self.latency).await;
        if self.offline.get() {
            return Err(StoreError::Unavailable("network unreachable".to_string()));
        }
        Ok(())
    }
}

impl ProfileStore for MemoryProfileStore {
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
        self.round_trip().await?;
        Ok(self.collection.borrow().profiles.clone())
    }

    async fn get_profile(&self, id: ProfileId) -> Result<Profile, StoreError> {
        self.round_trip().await?;
        self.collection
            .borrow()
            .profiles
            .iter()
            .find(|profile| profile.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create_profile(&self, draft: ProfileDraft) -> Result<Profile, StoreError> {
        self.round_trip().await?;
        let mut collection = self.collection.borrow_mut();
        let next = collection.next_id.ok_or(StoreError::IdsExhausted)?;
        collection.next_id = next.checked_add(1);
        let id = ProfileId(next);

        let profile = Profile::from_draft(id, draft);
        collection.profiles.push(profile.clone());
        Ok(profile)
    }

    async fn delete_profile(&self, id: ProfileId) -> Result<DeleteResponse, StoreError> {
        self.round_trip().await?;
        self.collection
            .borrow_mut()
            .profiles
            .retain(|profile| profile.id != id);
        Ok(DeleteResponse::ok())
    }
}

/// Waits for `latency` without blocking the event loop. A zero latency
/// returns straight away and never touches the browser timer API.
async fn simulate_latency(latency: Duration) {
    if latency.is_zero() {
        return;
    }
    gloo_timers::future::sleep(latency).await;
}
