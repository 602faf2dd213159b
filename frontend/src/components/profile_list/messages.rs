use common::model::profile::{Profile, ProfileId};

use crate::resource::Ticket;
use crate::services::profiles::StoreError;

pub enum Msg {
    /// Re-run the fetch, e.g. from the error state's retry button.
    Reload,
    Loaded(Ticket, Result<Vec<Profile>, StoreError>),
    SetSearchTerm(String),
    ShowOnMap(ProfileId),
}
