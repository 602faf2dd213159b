//! View for the admin dashboard: the creation form above the list of
//! existing profiles, each with a delete button.

use common::model::draft::{AddressField, DraftField};
use common::model::profile::Profile;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::status;
use crate::resource::ResourceStatus;

use super::messages::Msg;
use super::state::AdminDashboard;

pub fn view(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let link = ctx.link();
    match component.profiles.status() {
        ResourceStatus::Idle | ResourceStatus::Loading => status::loading("Loading..."),
        ResourceStatus::Failed(message) => status::error(message, link.callback(|_| Msg::Refresh)),
        ResourceStatus::Ready(profiles) => html! {
            <div class="admin-dashboard">
                <h1>{"Admin Dashboard"}</h1>
                { build_form(component, link) }
                <h2>{"Existing Profiles"}</h2>
                <button class="refresh" onclick={link.callback(|_| Msg::Refresh)}>{"Refresh"}</button>
                <ul>
                    { for profiles.iter().map(|profile| profile_row(profile, link)) }
                </ul>
            </div>
        },
    }
}

fn build_form(component: &AdminDashboard, link: &Scope<AdminDashboard>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    html! {
        <form {onsubmit}>
            {
                if let Some(notice) = &component.notice {
                    html! { <p class="form-notice">{ notice.clone() }</p> }
                } else {
                    Html::default()
                }
            }
            { for DraftField::ALL.into_iter().map(|field| draft_input(component, link, field)) }
            { for AddressField::ALL.into_iter().map(|field| address_input(component, link, field)) }
            <button type="submit">{"Add Profile"}</button>
        </form>
    }
}

fn draft_input(component: &AdminDashboard, link: &Scope<AdminDashboard>, field: DraftField) -> Html {
    let input_type = match field {
        DraftField::Email => "email",
        DraftField::Phone => "tel",
        _ => "text",
    };
    html! {
        <input
            type={input_type}
            value={component.draft.get(field).to_string()}
            placeholder={field.label()}
            required={true}
            oninput={link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::UpdateField(field, input.value())
            })}
        />
    }
}

fn address_input(component: &AdminDashboard, link: &Scope<AdminDashboard>, field: AddressField) -> Html {
    let input_type = if field.is_required() { "text" } else { "number" };
    html! {
        <input
            type={input_type}
            step={(!field.is_required()).then_some("any")}
            value={component.address_input(field)}
            placeholder={field.label()}
            required={field.is_required()}
            oninput={link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                Msg::UpdateAddress(field, input.value())
            })}
        />
    }
}

fn profile_row(profile: &Profile, link: &Scope<AdminDashboard>) -> Html {
    let id = profile.id;
    html! {
        <li key={id.0}>
            { format!("{} - {}", profile.name, profile.email) }
            <button onclick={link.callback(move |_| Msg::Delete(id))}>{"Delete"}</button>
        </li>
    }
}
