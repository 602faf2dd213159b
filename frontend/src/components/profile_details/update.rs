use yew::prelude::*;

use crate::context::{report_failure, run_store_call};
use crate::services::profiles::{ProfileStore, StoreError, StoreOperation};

use super::messages::Msg;
use super::state::ProfileDetails;

/// Fetches the profile for the current id, superseding any earlier fetch.
pub fn start_fetch(component: &mut ProfileDetails, ctx: &Context<ProfileDetails>) {
    let ticket = component.profile.begin();
    let id = component.id;
    let started = run_store_call(
        ctx,
        move |store| async move { store.get_profile(id).await },
        move |result| Msg::Loaded(ticket, result),
    );
    if !started {
        component
            .profile
            .fail(ticket, StoreOperation::FetchProfile.failure_message());
    }
}

pub fn update(component: &mut ProfileDetails, ctx: &Context<ProfileDetails>, msg: Msg) -> bool {
    match msg {
        Msg::Reload => {
            start_fetch(component, ctx);
            true
        }
        Msg::Loaded(ticket, result) => {
            if !component.profile.is_current(ticket) {
                return false;
            }
            match &result {
                Err(StoreError::NotFound(id)) => {
                    gloo_console::warn!(format!("Profile {} not found", id));
                }
                Err(e) => {
                    report_failure(StoreOperation::FetchProfile, e);
                }
                Ok(_) => {}
            }
            component.settle_fetch(ticket, result)
        }
    }
}
