//! Public profile list: fetches every profile when mounted, filters the
//! cards by name as the user types, and shows the chosen profile on a map.
//!
//! Filtering and selection are local; neither goes back to the store.

mod messages;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use state::ProfileList;

impl Component for ProfileList {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = ProfileList::new();
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
