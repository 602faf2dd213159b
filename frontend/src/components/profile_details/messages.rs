use common::model::profile::Profile;

use crate::resource::Ticket;
use crate::services::profiles::StoreError;

pub enum Msg {
    Reload,
    Loaded(Ticket, Result<Profile, StoreError>),
}
