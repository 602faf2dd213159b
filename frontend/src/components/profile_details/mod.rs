//! Details page for one profile, addressed by the id in the route.
//!
//! The profile is fetched on mount and again whenever the route id changes;
//! a late response for the previous id is discarded.

mod messages;
mod props;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::ProfileDetailsProps;
pub use state::ProfileDetails;

impl Component for ProfileDetails {
    type Message = Msg;
    type Properties = ProfileDetailsProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut component = ProfileDetails::new(ctx.props().id);
        update::start_fetch(&mut component, ctx);
        component
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let id = ctx.props().id;
        if id == self.id {
            return false;
        }
        self.id = id;
        update::start_fetch(self, ctx);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
