use common::model::profile::Profile;
use yew::prelude::*;

use crate::components::map::ProfileMap;
use crate::components::status;
use crate::context::app_context;
use crate::resource::ResourceStatus;

use super::messages::Msg;
use super::state::ProfileDetails;

pub fn view(component: &ProfileDetails, ctx: &Context<ProfileDetails>) -> Html {
    match component.profile.status() {
        ResourceStatus::Idle | ResourceStatus::Loading => {
            status::loading("Loading profile details...")
        }
        ResourceStatus::Failed(message) => {
            status::error(message, ctx.link().callback(|_| Msg::Reload))
        }
        ResourceStatus::Ready(profile) => details(profile, ctx),
    }
}

fn details(profile: &Profile, ctx: &Context<ProfileDetails>) -> Html {
    let settings = app_context(ctx)
        .map(|app| app.config.map.clone())
        .unwrap_or_default();
    html! {
        <div class="profile-details">
            <h1>{ profile.name.clone() }</h1>
            <img src={profile.photo.clone()} alt={profile.name.clone()} />
            <p>{ profile.description.clone() }</p>
            <h2>{"Contact Information"}</h2>
            <p>{ format!("Email: {}", profile.email) }</p>
            <p>{ format!("Phone: {}", profile.phone) }</p>
            <h2>{"Address"}</h2>
            <p>{ profile.address.one_line() }</p>
            <ProfileMap
                center={profile.address.coordinates}
                title={profile.name.clone()}
                detail={profile.address.street.clone()}
                {settings}
            />
        </div>
    }
}
