use common::model::profile::{Profile, ProfileId};

use crate::resource::{Resource, Ticket};
use crate::services::profiles::{StoreError, StoreOperation};

pub const NOT_FOUND_MESSAGE: &str = "Profile not found.";

pub struct ProfileDetails {
    /// Id of the profile being shown (or fetched).
    pub id: ProfileId,
    pub profile: Resource<Profile>,
}

impl ProfileDetails {
    pub fn new(id: ProfileId) -> Self {
        Self {
            id,
            profile: Resource::new(),
        }
    }

    /// Settles the fetch identified by `ticket`. A missing profile gets its
    /// own message; any other failure gets the generic one.
    pub fn settle_fetch(&mut self, ticket: Ticket, result: Result<Profile, StoreError>) -> bool {
        match result {
            Ok(profile) => self.profile.resolve(ticket, profile),
            Err(StoreError::NotFound(_)) => self.profile.fail(ticket, NOT_FOUND_MESSAGE),
            Err(_) => self
                .profile
                .fail(ticket, StoreOperation::FetchProfile.failure_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceStatus;
    use crate::services::profiles::{demo_profiles, MemoryProfileStore, ProfileStore};

    fn store() -> MemoryProfileStore {
        MemoryProfileStore::with_profiles(demo_profiles())
    }

    #[tokio::test]
    async fn shows_the_requested_profile() {
        let store = store();
        let mut details = ProfileDetails::new(ProfileId(2));
        let ticket = details.profile.begin();
        details.settle_fetch(ticket, store.get_profile(details.id).await);

        match details.profile.status() {
            ResourceStatus::Ready(profile) => {
                assert_eq!(profile.name, "Jane Smith");
                assert_eq!(profile.address.one_line(), "456 Data Ave, New York, USA");
            }
            other => panic!("unexpected status {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_profile_reports_not_found() {
        let store = store();
        let mut details = ProfileDetails::new(ProfileId(77));
        let ticket = details.profile.begin();
        details.settle_fetch(ticket, store.get_profile(details.id).await);

        assert_eq!(details.profile.status(), ResourceStatus::Failed(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn store_failure_reports_generic_error() {
        let store = store();
        store.set_offline(true);
        let mut details = ProfileDetails::new(ProfileId(1));
        let ticket = details.profile.begin();
        details.settle_fetch(ticket, store.get_profile(details.id).await);

        assert_eq!(
            details.profile.status(),
            ResourceStatus::Failed("Failed to fetch profile details. Please try again later.")
        );
    }

    #[tokio::test]
    async fn response_for_previous_id_is_dropped() {
        let store = store();
        let mut details = ProfileDetails::new(ProfileId(1));
        let first = details.profile.begin();

        details.id = ProfileId(2);
        let second = details.profile.begin();
        assert!(details.settle_fetch(second, store.get_profile(ProfileId(2)).await));
        assert!(!details.settle_fetch(first, store.get_profile(ProfileId(1)).await));

        let shown = details.profile.data().map(|p| p.id);
        assert_eq!(shown, Some(ProfileId(2)));
    }
}
