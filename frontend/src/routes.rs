use common::model::profile::ProfileId;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::admin_dashboard::AdminDashboard;
use crate::components::profile_details::ProfileDetails;
use crate::components::profile_list::ProfileList;
use crate::components::status::not_found;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Profiles,
    /// The id stays textual here so that a malformed id reaches `switch` and
    /// renders the not-found page instead of nothing.
    #[at("/profile/:id")]
    Profile { id: String },
    #[at("/admin")]
    Admin,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn profile(id: ProfileId) -> Self {
        Route::Profile { id: id.to_string() }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Profiles => html! { <ProfileList /> },
        Route::Profile { id } => match id.parse::<ProfileId>() {
            Ok(id) => html! { <ProfileDetails {id} /> },
            Err(_) => not_found(),
        },
        Route::Admin => html! { <AdminDashboard /> },
        Route::NotFound => not_found(),
    }
}
