//! State of the admin dashboard and the transitions the update function
//! drives it through.
//!
//! Every store call goes through the single `profiles` resource, so its
//! loading flag is the dashboard's one busy flag: while a fetch, create or
//! delete is pending, `prepare_submit` and `prepare_delete` refuse to start
//! another call.

use common::model::draft::{parse_coordinate, AddressField, DraftField, ProfileDraft};
use common::model::profile::{Profile, ProfileId};
use common::requests::DeleteResponse;

use crate::resource::{Resource, Ticket};
use crate::services::profiles::{StoreError, StoreOperation};

pub struct AdminDashboard {
    /// Local copy of the collection, kept in sync with this view's writes.
    pub profiles: Resource<Vec<Profile>>,
    /// Form contents for the next profile to create.
    pub draft: ProfileDraft,
    /// Coordinate inputs as typed. The draft only takes a coordinate once its
    /// text parses, so the inputs may show text the draft does not hold.
    pub coordinate_text: CoordinateText,
    /// Validation notice shown above the form. Unlike store failures it does
    /// not replace the view. Once shown it follows every edit.
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateText {
    pub latitude: String,
    pub longitude: String,
}

impl CoordinateText {
    fn of(draft: &ProfileDraft) -> Self {
        Self {
            latitude: draft.address_value(AddressField::Latitude),
            longitude: draft.address_value(AddressField::Longitude),
        }
    }

    fn slot(&mut self, field: AddressField) -> Option<&mut String> {
        match field {
            AddressField::Latitude => Some(&mut self.latitude),
            AddressField::Longitude => Some(&mut self.longitude),
            _ => None,
        }
    }
}

impl AdminDashboard {
    pub fn new() -> Self {
        let draft = ProfileDraft::empty();
        Self {
            profiles: Resource::new(),
            coordinate_text: CoordinateText::of(&draft),
            draft,
            notice: None,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.profiles.is_loading()
    }

    pub fn update_field(&mut self, field: DraftField, value: String) {
        self.draft.set(field, value);
        self.recheck_notice();
    }

    /// Text an address input shows: the typed text for coordinates, the
    /// draft value otherwise.
    pub fn address_input(&self, field: AddressField) -> String {
        match field {
            AddressField::Latitude => self.coordinate_text.latitude.clone(),
            AddressField::Longitude => self.coordinate_text.longitude.clone(),
            _ => self.draft.address_value(field),
        }
    }

    pub fn update_address(&mut self, field: AddressField, value: &str) {
        if let Some(text) = self.coordinate_text.slot(field) {
            *text = value.to_string();
        }
        // Unparseable coordinates leave the draft alone; `form_error` reports them.
        self.draft.set_address(field, value);
        self.recheck_notice();
    }

    /// Why the form cannot be submitted yet, if anything.
    pub fn form_error(&self) -> Option<String> {
        let mut problems = Vec::new();
        if let Err(e) = self.draft.validate() {
            problems.push(e.to_string());
        }
        let typed = [
            (AddressField::Latitude, &self.coordinate_text.latitude),
            (AddressField::Longitude, &self.coordinate_text.longitude),
        ];
        for (field, text) in typed {
            if parse_coordinate(text).is_none() {
                problems.push(format!("{} must be a number", field.label()));
            }
        }
        if problems.is_empty() {
            None
        } else {
            Some(problems.join("; "))
        }
    }

    fn recheck_notice(&mut self) {
        if self.notice.is_some() {
            self.notice = self.form_error();
        }
    }

    pub fn settle_fetch(&mut self, ticket: Ticket, result: Result<Vec<Profile>, StoreError>) -> bool {
        match result {
            Ok(profiles) => self.profiles.resolve(ticket, profiles),
            Err(_) => self
                .profiles
                .fail(ticket, StoreOperation::FetchProfiles.failure_message()),
        }
    }

    /// Forgets the local list and starts a fresh fetch.
    pub fn refresh(&mut self) -> Ticket {
        self.profiles.invalidate();
        self.profiles.begin()
    }

    /// Validates the draft and, if it is complete and nothing else is
    /// pending, starts a create with a copy of it.
    pub fn prepare_submit(&mut self) -> Option<(Ticket, ProfileDraft)> {
        if self.is_busy() {
            return None;
        }
        self.notice = self.form_error();
        if self.notice.is_some() {
            return None;
        }
        Some((self.profiles.begin(), self.draft.clone()))
    }

    /// Appends the created record locally and clears the form. On failure
    /// the draft is left as it was.
    pub fn settle_create(&mut self, ticket: Ticket, result: Result<Profile, StoreError>) -> bool {
        match result {
            Ok(profile) => {
                let applied = self.profiles.apply(ticket, |profiles| profiles.push(profile));
                if applied {
                    self.draft = ProfileDraft::empty();
                    self.coordinate_text = CoordinateText::of(&self.draft);
                }
                applied
            }
            Err(_) => self
                .profiles
                .fail(ticket, StoreOperation::AddProfile.failure_message()),
        }
    }

    pub fn prepare_delete(&mut self) -> Option<Ticket> {
        if self.is_busy() {
            return None;
        }
        Some(self.profiles.begin())
    }

    /// Removes the deleted id from the local list.
    pub fn settle_delete(
        &mut self,
        ticket: Ticket,
        id: ProfileId,
        result: Result<DeleteResponse, StoreError>,
    ) -> bool {
        match result {
            Ok(DeleteResponse { success: true }) => self
                .profiles
                .apply(ticket, |profiles| profiles.retain(|profile| profile.id != id)),
            _ => self
                .profiles
                .fail(ticket, StoreOperation::DeleteProfile.failure_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::ResourceStatus;
    use crate::services::profiles::{demo_profiles, MemoryProfileStore, ProfileStore};
    use common::model::profile::Coordinates;
    use std::cell::Cell;

    /// Store wrapper counting how often the collection is read.
    struct CountingStore {
        inner: MemoryProfileStore,
        lists: Cell<u32>,
    }

    impl CountingStore {
        fn new(profiles: Vec<Profile>) -> Self {
            Self {
                inner: MemoryProfileStore::with_profiles(profiles),
                lists: Cell::new(0),
            }
        }
    }

    impl ProfileStore for CountingStore {
        async fn list_profiles(&self) -> Result<Vec<Profile>, StoreError> {
            self.lists.set(self.lists.get() + 1);
            self.inner.list_profiles().await
        }

        async fn get_profile(&self, id: ProfileId) -> Result<Profile, StoreError> {
            self.inner.get_profile(id).await
        }

        async fn create_profile(&self, draft: ProfileDraft) -> Result<Profile, StoreError> {
            self.inner.create_profile(draft).await
        }

        async fn delete_profile(&self, id: ProfileId) -> Result<DeleteResponse, StoreError> {
            self.inner.delete_profile(id).await
        }
    }

    fn fill(admin: &mut AdminDashboard, name: &str) {
        admin.update_field(DraftField::Name, name.to_string());
        admin.update_field(DraftField::Description, "Engineer".to_string());
        admin.update_field(DraftField::Photo, "https://via.placeholder.com/150".to_string());
        admin.update_field(DraftField::Email, "ada@example.com".to_string());
        admin.update_field(DraftField::Phone, "555-0100".to_string());
        admin.update_address(AddressField::Street, "12 Engine Row");
        admin.update_address(AddressField::City, "London");
        admin.update_address(AddressField::Country, "UK");
        admin.update_address(AddressField::Latitude, "51.5072");
        admin.update_address(AddressField::Longitude, "-0.1276");
    }

    async fn mounted(store: &impl ProfileStore) -> AdminDashboard {
        let mut admin = AdminDashboard::new();
        let ticket = admin.profiles.begin();
        assert!(admin.settle_fetch(ticket, store.list_profiles().await));
        admin
    }

    fn local_ids(admin: &AdminDashboard) -> Vec<u32> {
        admin
            .profiles
            .data()
            .map(|profiles| profiles.iter().map(|p| p.id.0).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn created_profile_appears_without_refetch() {
        let store = CountingStore::new(demo_profiles());
        let mut admin = mounted(&store).await;
        assert_eq!(store.lists.get(), 1);

        fill(&mut admin, "Ada Lovelace");
        let (ticket, draft) = admin.prepare_submit().unwrap();
        assert!(admin.is_busy());
        let result = store.create_profile(draft).await;
        assert!(admin.settle_create(ticket, result));

        assert_eq!(store.lists.get(), 1);
        assert_eq!(local_ids(&admin), vec![1, 2, 3]);
        let created = admin.profiles.data().unwrap().last().unwrap();
        assert_eq!(created.name, "Ada Lovelace");
        assert_eq!(created.address.coordinates, Coordinates::new(51.5072, -0.1276));
        assert_eq!(admin.draft, ProfileDraft::empty());
        assert!(!admin.is_busy());
    }

    #[tokio::test]
    async fn failed_create_keeps_the_draft() {
        let store = CountingStore::new(demo_profiles());
        let mut admin = mounted(&store).await;
        fill(&mut admin, "Ada Lovelace");
        let before = admin.draft.clone();

        store.inner.set_offline(true);
        let (ticket, draft) = admin.prepare_submit().unwrap();
        admin.settle_create(ticket, store.create_profile(draft).await);

        assert_eq!(admin.draft, before);
        assert_eq!(
            admin.profiles.status(),
            ResourceStatus::Failed("Failed to add profile. Please try again later.")
        );
    }

    #[tokio::test]
    async fn incomplete_draft_is_not_submitted() {
        let store = CountingStore::new(Vec::new());
        let mut admin = mounted(&store).await;
        admin.update_field(DraftField::Name, "Ada".to_string());

        assert!(admin.prepare_submit().is_none());
        assert!(!admin.is_busy());
        let notice = admin.notice.clone().unwrap();
        assert!(notice.starts_with("Missing required fields: Description"));
        assert!(store.inner.list_profiles().await.unwrap().is_empty());

        fill(&mut admin, "Ada");
        assert!(admin.prepare_submit().is_some());
        assert_eq!(admin.notice, None);
    }

    #[tokio::test]
    async fn delete_removes_only_that_profile_locally() {
        let store = CountingStore::new(demo_profiles());
        let mut admin = mounted(&store).await;

        let ticket = admin.prepare_delete().unwrap();
        let result = store.delete_profile(ProfileId(1)).await;
        assert!(admin.settle_delete(ticket, ProfileId(1), result));

        assert_eq!(local_ids(&admin), vec![2]);
        assert_eq!(store.lists.get(), 1);
    }

    #[tokio::test]
    async fn failed_delete_blanks_the_view() {
        let store = CountingStore::new(demo_profiles());
        let mut admin = mounted(&store).await;
        store.inner.set_offline(true);

        let ticket = admin.prepare_delete().unwrap();
        admin.settle_delete(ticket, ProfileId(1), store.delete_profile(ProfileId(1)).await);

        assert_eq!(
            admin.profiles.status(),
            ResourceStatus::Failed("Failed to delete profile. Please try again later.")
        );
    }

    #[tokio::test]
    async fn writes_are_refused_while_busy() {
        let store = CountingStore::new(demo_profiles());
        let mut admin = mounted(&store).await;
        fill(&mut admin, "Ada");

        let pending = admin.prepare_delete().unwrap();
        assert!(admin.prepare_submit().is_none());
        assert!(admin.prepare_delete().is_none());

        admin.settle_delete(pending, ProfileId(2), store.delete_profile(ProfileId(2)).await);
        assert!(admin.prepare_submit().is_some());
    }

    #[tokio::test]
    async fn refresh_rereads_and_drops_in_flight_writes() {
        let store = CountingStore::new(demo_profiles());
        let mut admin = mounted(&store).await;

        let stale = admin.prepare_delete().unwrap();
        let reread = admin.refresh();
        let deleted = store.delete_profile(ProfileId(1)).await;
        assert!(!admin.settle_delete(stale, ProfileId(1), deleted));

        assert!(admin.settle_fetch(reread, store.list_profiles().await));
        assert_eq!(local_ids(&admin), vec![2]);
        assert_eq!(store.lists.get(), 2);
    }

    #[test]
    fn field_updates_touch_one_field() {
        let mut admin = AdminDashboard::new();
        fill(&mut admin, "Ada");
        let before = admin.draft.clone();

        admin.update_address(AddressField::City, "Paris");
        admin.update_address(AddressField::Latitude, "not a number");

        let mut expected = before;
        expected.address.city = "Paris".to_string();
        assert_eq!(admin.draft, expected);
        assert_eq!(admin.address_input(AddressField::Latitude), "not a number");
    }

    #[test]
    fn notice_follows_edits_once_shown() {
        let mut admin = AdminDashboard::new();
        admin.update_field(DraftField::Name, "Ada".to_string());
        assert_eq!(admin.notice, None);

        assert!(admin.prepare_submit().is_none());
        assert!(admin.notice.is_some());

        fill(&mut admin, "Ada");
        assert_eq!(admin.notice, None);

        admin.update_field(DraftField::Email, String::new());
        assert_eq!(admin.notice.as_deref(), Some("Missing required fields: Email"));
    }

    #[tokio::test]
    async fn cleared_coordinate_blocks_submit_instead_of_sending_old_value() {
        let store = CountingStore::new(Vec::new());
        let mut admin = mounted(&store).await;
        fill(&mut admin, "Ada");
        admin.update_address(AddressField::Latitude, "12.5");
        admin.update_address(AddressField::Latitude, "");

        assert_eq!(admin.address_input(AddressField::Latitude), "");
        assert!(admin.prepare_submit().is_none());
        assert_eq!(admin.notice.as_deref(), Some("Latitude must be a number"));
        assert!(!admin.is_busy());

        admin.update_address(AddressField::Latitude, "48.85");
        assert_eq!(admin.notice, None);
        let (_, draft) = admin.prepare_submit().unwrap();
        assert_eq!(draft.address.coordinates.latitude, 48.85);
    }

    #[tokio::test]
    async fn successful_create_resets_coordinate_inputs() {
        let store = CountingStore::new(Vec::new());
        let mut admin = mounted(&store).await;
        fill(&mut admin, "Ada");

        let (ticket, draft) = admin.prepare_submit().unwrap();
        admin.settle_create(ticket, store.create_profile(draft).await);
        assert_eq!(admin.address_input(AddressField::Latitude), "0");
        assert_eq!(admin.address_input(AddressField::Longitude), "0");
    }
}
