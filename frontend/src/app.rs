use crate::components::header::Header;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::routes::{switch, Route};
use yew::{html, Component, Context, ContextProvider, Html};
use yew_router::{BrowserRouter, Switch};

/// Root component: builds the store once from the embedded settings and
/// provides it, with the settings, to every routed view.
pub struct App {
    context: AppContext,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            context: AppContext::from_config(AppConfig::load()),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<AppContext> context={self.context.clone()}>
                <BrowserRouter>
                    <div class="app">
                        <Header />
                        <main>
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </BrowserRouter>
            </ContextProvider<AppContext>>
        }
    }
}
