use common::model::profile::Profile;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::map::ProfileMap;
use crate::components::status;
use crate::context::app_context;
use crate::resource::ResourceStatus;
use crate::routes::Route;

use super::messages::Msg;
use super::state::ProfileList;

pub fn view(component: &ProfileList, ctx: &Context<ProfileList>) -> Html {
    let link = ctx.link();
    match component.profiles.status() {
        ResourceStatus::Idle | ResourceStatus::Loading => status::loading("Loading profiles..."),
        ResourceStatus::Failed(message) => status::error(message, link.callback(|_| Msg::Reload)),
        ResourceStatus::Ready(_) => html! {
            <div class="profile-list">
                <h1>{"Profiles"}</h1>
                <input
                    type="text"
                    placeholder="Search profiles..."
                    value={component.search_term.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetSearchTerm(input.value())
                    })}
                />
                <div class="profiles-container">
                    { for component.visible_profiles().into_iter().map(|profile| profile_card(profile, link)) }
                </div>
                { selected_map(component, ctx) }
            </div>
        },
    }
}

fn profile_card(profile: &Profile, link: &Scope<ProfileList>) -> Html {
    let id = profile.id;
    html! {
        <div key={id.0} class="profile-card">
            <img src={profile.photo.clone()} alt={profile.name.clone()} />
            <h2>{ profile.name.clone() }</h2>
            <p>{ profile.description.clone() }</p>
            <Link<Route> to={Route::profile(id)}>{"View Details"}</Link<Route>>
            <button onclick={link.callback(move |_| Msg::ShowOnMap(id))}>{"Show on Map"}</button>
        </div>
    }
}

fn selected_map(component: &ProfileList, ctx: &Context<ProfileList>) -> Html {
    let Some(profile) = &component.selected else {
        return Html::default();
    };
    let settings = app_context(ctx)
        .map(|app| app.config.map.clone())
        .unwrap_or_default();
    html! {
        <ProfileMap
            center={profile.address.coordinates}
            title={profile.name.clone()}
            detail={profile.address.street.clone()}
            {settings}
        />
    }
}
