use common::model::filter::filter_by_name;
use common::model::profile::{Profile, ProfileId};

use crate::resource::{Resource, Ticket};
use crate::services::profiles::{StoreError, StoreOperation};

/// State of the public list view.
pub struct ProfileList {
    /// Snapshot of the store taken when the view was mounted.
    pub profiles: Resource<Vec<Profile>>,
    /// Case-insensitive name filter typed by the user.
    pub search_term: String,
    /// Profile currently shown on the map, if any.
    pub selected: Option<Profile>,
}

impl ProfileList {
    pub fn new() -> Self {
        Self {
            profiles: Resource::new(),
            search_term: String::new(),
            selected: None,
        }
    }

    /// Settles the list fetch identified by `ticket`. Returns whether the
    /// view changed.
    pub fn settle_fetch(&mut self, ticket: Ticket, result: Result<Vec<Profile>, StoreError>) -> bool {
        match result {
            Ok(profiles) => self.profiles.resolve(ticket, profiles),
            Err(_) => self
                .profiles
                .fail(ticket, StoreOperation::FetchProfiles.failure_message()),
        }
    }

    /// Fetched profiles whose name matches the search term, in store order.
    pub fn visible_profiles(&self) -> Vec<&Profile> {
        match self.profiles.data() {
            Some(profiles) => filter_by_name(profiles, &self.search_term),
            None => Vec::new(),
        }
    }

    /// Puts the profile with `id` on the map. Unknown ids are ignored.
    pub fn select(&mut self, id: ProfileId) -> bool {
        let found = self
            .profiles
            .data()
            .and_then(|profiles| profiles.iter().find(|profile| profile.id == id))
            .cloned();
        match found {
            Some(profile) => {
                self.selected = Some(profile);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceStatus;
    use crate::services::profiles::{demo_profiles, MemoryProfileStore, ProfileStore};

    async fn loaded() -> ProfileList {
        let store = MemoryProfileStore::with_profiles(demo_profiles());
        let mut list = ProfileList::new();
        let ticket = list.profiles.begin();
        let result = store.list_profiles().await;
        assert!(list.settle_fetch(ticket, result));
        list
    }

    fn names(list: &ProfileList) -> Vec<&str> {
        list.visible_profiles().iter().map(|p| p.name.as_str()).collect()
    }

    #[tokio::test]
    async fn shows_everything_without_search_term() {
        let list = loaded().await;
        assert_eq!(names(&list), vec!["John Doe", "Jane Smith"]);
    }

    #[tokio::test]
    async fn search_filters_without_refetching() {
        let mut list = loaded().await;
        list.search_term = "SMI".to_string();
        assert_eq!(names(&list), vec!["Jane Smith"]);

        list.search_term = "j".to_string();
        assert_eq!(names(&list), vec!["John Doe", "Jane Smith"]);
    }

    #[tokio::test]
    async fn selecting_puts_one_profile_on_the_map() {
        let mut list = loaded().await;
        assert!(list.select(ProfileId(2)));
        assert!(list.select(ProfileId(1)));
        assert_eq!(list.selected.as_ref().map(|p| p.id), Some(ProfileId(1)));

        assert!(!list.select(ProfileId(42)));
        assert_eq!(list.selected.as_ref().map(|p| p.id), Some(ProfileId(1)));
    }

    #[tokio::test]
    async fn selection_survives_filtering() {
        let mut list = loaded().await;
        list.select(ProfileId(1));
        list.search_term = "jane".to_string();
        assert_eq!(list.selected.as_ref().map(|p| p.name.as_str()), Some("John Doe"));
    }

    #[tokio::test]
    async fn failed_fetch_shows_generic_error() {
        let store = MemoryProfileStore::with_profiles(demo_profiles());
        store.set_offline(true);

        let mut list = ProfileList::new();
        let ticket = list.profiles.begin();
        list.settle_fetch(ticket, store.list_profiles().await);

        assert_eq!(
            list.profiles.status(),
            ResourceStatus::Failed("Failed to fetch profiles. Please try again later.")
        );
        assert!(list.visible_profiles().is_empty());
    }
}
