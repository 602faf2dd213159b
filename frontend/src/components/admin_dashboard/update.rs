//! Update function for the admin dashboard.
//!
//! Store calls are spawned in the background and come back as `Loaded`,
//! `Created` and `Deleted` messages carrying the ticket they were started
//! with; `AdminDashboard` decides whether the result still applies. Replies
//! to superseded requests are dropped before anything is logged.

use yew::prelude::*;

use crate::context::{report_failure, run_store_call};
use crate::resource::Ticket;
use crate::services::profiles::{ProfileStore, StoreOperation};

use super::messages::Msg;
use super::state::AdminDashboard;

pub fn start_fetch(component: &mut AdminDashboard, ctx: &Context<AdminDashboard>) {
    let ticket = component.profiles.begin();
    fetch(component, ctx, ticket);
}

fn fetch(component: &mut AdminDashboard, ctx: &Context<AdminDashboard>, ticket: Ticket) {
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

pub fn update(component: &mut AdminDashboard, ctx: &Context<AdminDashboard>, msg: Msg) -> bool {
    match msg {
        Msg::Refresh => {
            let ticket = component.refresh();
            fetch(component, ctx, ticket);
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
        Msg::UpdateField(field, value) => {
            component.update_field(field, value);
            true
        }
        Msg::UpdateAddress(field, value) => {
            component.update_address(field, &value);
            true
        }
        Msg::Submit => {
            let Some((ticket, draft)) = component.prepare_submit() else {
                // Either busy (nothing to redraw) or a new validation notice.
                return component.notice.is_some();
            };
            let started = run_store_call(
                ctx,
                move |store| async move { store.create_profile(draft).await },
                move |result| Msg::Created(ticket, result),
            );
            if !started {
                component
                    .profiles
                    .fail(ticket, StoreOperation::AddProfile.failure_message());
            }
            true
        }
        Msg::Created(ticket, result) => {
            if !component.profiles.is_current(ticket) {
                return false;
            }
            if let Err(e) = &result {
                report_failure(StoreOperation::AddProfile, e);
            }
            component.settle_create(ticket, result)
        }
        Msg::Delete(id) => {
            let Some(ticket) = component.prepare_delete() else {
                return false;
            };
            let started = run_store_call(
                ctx,
                move |store| async move { store.delete_profile(id).await },
                move |result| Msg::Deleted(ticket, id, result),
            );
            if !started {
                component
                    .profiles
                    .fail(ticket, StoreOperation::DeleteProfile.failure_message());
            }
            true
        }
        Msg::Deleted(ticket, id, result) => {
            if !component.profiles.is_current(ticket) {
                return false;
            }
            match &result {
                Err(e) => {
                    report_failure(StoreOperation::DeleteProfile, e);
                }
                Ok(response) if !response.success => {
                    gloo_console::error!(format!("Store refused to delete profile {}", id));
                }
                Ok(_) => {}
            }
            component.settle_delete(ticket, id, result)
        }
    }
}
