//! Admin dashboard: lists every profile, creates new ones from a form and
//! deletes existing ones.
//!
//! Responsibilities
//! - Fetch the collection on mount; "Refresh" throws local state away and
//!   fetches again.
//! - Keep the creation draft in local state, one field update at a time.
//! - Merge each write into the local list from the write's own response
//!   (append the created record, drop the deleted id) instead of re-fetching.
//! - Share one busy flag between fetch, create and delete; writes requested
//!   while busy are ignored.

mod messages;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use state::AdminDashboard;

impl Component for AdminDashboard {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = AdminDashboard::new();
        update::start_fetch(&mut component, ctx);
        component
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
