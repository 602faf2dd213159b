use common::model::profile::ProfileId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileDetailsProps {
    /// Profile to show, parsed from `/profile/:id`.
    pub id: ProfileId,
}
