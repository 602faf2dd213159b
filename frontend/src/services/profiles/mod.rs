//! # Profile Store Service
//!
//! The data-access seam between views and the profile collection. Views only
//! talk to a [`ProfileStore`]; the application wires in a
//! [`MemoryProfileStore`] that keeps the collection in memory and simulates
//! network latency, standing in for a real API.
//!
//! ## Sub-modules:
//! - `memory`: the in-memory store and its latency simulation.
//! - `seed`: demo records loaded at start-up when seeding is enabled.
//!
//! ## Contract
//!
//! | operation | input | output | failure |
//! |---|---|---|---|
//! | `list_profiles` | — | all profiles, insertion order | `Unavailable` |
//! | `get_profile` | `ProfileId` | the profile | `NotFound`, `Unavailable` |
//! | `create_profile` | `ProfileDraft` | stored profile with its id | `IdsExhausted`, `Unavailable` |
//! | `delete_profile` | `ProfileId` | `DeleteResponse` (success even if absent) | `Unavailable` |

mod memory;
mod seed;

use std::ops::Deref;
use std::rc::Rc;

use common::model::draft::ProfileDraft;
use common::model::profile::{Profile, ProfileId};
use common::requests::DeleteResponse;
use thiserror::Error;

pub use memory::MemoryProfileStore;
pub use seed::demo_profiles;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("profile {0} not found")]
    NotFound(ProfileId),
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
    #[error("no profile ids left to assign")]
    IdsExhausted,
}

/// Asynchronous access to the profile collection.
///
/// Every call suspends the caller until the (simulated) round trip completes;
/// none of them block the browser event loop.
#[allow(async_fn_in_trait)]
pub trait ProfileStore {
    /// Snapshot of every profile in insertion order.
    async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError>;

    async fn get_profile(&self, id: ProfileId) -> Result<Profile, StoreError>;

    /// Assigns the next id to `draft`, stores it and returns the stored record.
    async fn create_profile(&self, draft: ProfileDraft) -> Result<Profile, StoreError>;

    /// Removes the profile with `id`. Idempotent.
    async fn delete_profile(&self, id: ProfileId) -> Result<DeleteResponse, StoreError>;
}

/// The store operations a view can start, used to pick the message shown
/// when one of them fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    FetchProfiles,
    FetchProfile,
    AddProfile,
    DeleteProfile,
}

impl StoreOperation {
    pub fn failure_message(self) -> &'static str {
        match self {
            StoreOperation::FetchProfiles => "Failed to fetch profiles. Please try again later.",
            StoreOperation::FetchProfile => {
                "Failed to fetch profile details. Please try again later."
            }
            StoreOperation::AddProfile => "Failed to add profile. Please try again later.",
            StoreOperation::DeleteProfile => "Failed to delete profile. Please try again later.",
        }
    }

    /// Text written to the browser console next to the underlying error.
    pub fn log_label(self) -> &'static str {
        match self {
            StoreOperation::FetchProfiles => "Error fetching profiles",
            StoreOperation::FetchProfile => "Error fetching profile",
            StoreOperation::AddProfile => "Error adding profile",
            StoreOperation::DeleteProfile => "Error deleting profile",
        }
    }
}

/// Shared handle to the application's store, handed to views through a Yew
/// context. Two handles are equal when they point at the same store.
#[derive(Debug, Clone)]
pub struct ProfileService(Rc<MemoryProfileStore>);

impl ProfileService {
    pub fn new(store: MemoryProfileStore) -> Self {
        Self(Rc::new(store))
    }
}

impl PartialEq for ProfileService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ProfileService {
    type Target = MemoryProfileStore;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
