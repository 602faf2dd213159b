use yew::prelude::*;

use crate::context::{report_failure, run_store_call};
use crate::services::profiles::{ProfileStore, StoreOperation};

use super::messages::Msg;
use super::state::ProfileList;

/// Starts (or restarts) the list fetch. A response to an earlier fetch is
/// ignored once this one has begun.
pub fn start_fetch(component: &mut ProfileList, ctx: &Context<ProfileList>) {
    let ticket = component.profiles.begin();
    let started = run_store_call(
        ctx,
        |store| async move { store.list_profiles().await },
        move |result| Msg::Loaded(ticket, result),
    );
    if !started {
        component
            .profiles
            .fail(ticket, StoreOperation::FetchProfiles.failure_message());
    }
}

pub fn update(component: &mut ProfileList, ctx: &Context<ProfileList>, msg: Msg) -> bool {
    match msg {
        Msg::Reload => {
            start_fetch(component, ctx);
            true
        }
        Msg::Loaded(ticket, result) => {
            if !component.profiles.is_current(ticket) {
                return false;
            }
            if let Err(e) = &result {
                report_failure(StoreOperation::FetchProfiles, e);
            }
            component.settle_fetch(ticket, result)
        }
        Msg::SetSearchTerm(term) => {
            if component.search_term == term {
                return false;
            }
            component.search_term = term;
            true
        }
        Msg::ShowOnMap(id) => component.select(id),
    }
}
