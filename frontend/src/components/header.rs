use yew::{html, Component, Context, Html};
use yew_router::prelude::Link;

use crate::routes::Route;

/// Application title bar with links to the public list and the admin page.
pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <header class="app-header">
                <h1 class="app-title">{"Profile Directory"}</h1>
                <nav>
                    <Link<Route> to={Route::Profiles}>{"Profiles"}</Link<Route>>
                    <Link<Route> to={Route::Admin}>{"Admin"}</Link<Route>>
                </nav>
            </header>
        }
    }
}
