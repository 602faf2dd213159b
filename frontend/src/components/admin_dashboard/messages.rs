use common::model::draft::{AddressField, DraftField};
use common::model::profile::{Profile, ProfileId};
use common::requests::DeleteResponse;

use crate::resource::Ticket;
use crate::services::profiles::StoreError;

pub enum Msg {
    /// Drop local state and fetch the collection again.
    Refresh,
    Loaded(Ticket, Result<Vec<Profile>, StoreError>),
    UpdateField(DraftField, String),
    UpdateAddress(AddressField, String),
    Submit,
    Created(Ticket, Result<Profile, StoreError>),
    Delete(ProfileId),
    Deleted(Ticket, ProfileId, Result<DeleteResponse, StoreError>),
}
