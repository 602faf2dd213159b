//! Application-wide context handed to every view through a Yew
//! `ContextProvider`, plus the glue views use to run store calls.

use std::future::Future;
use std::rc::Rc;

use yew::platform::spawn_local;
use yew::{Callback, Component, Context};

use crate::config::AppConfig;
use crate::services::profiles::{ProfileService, StoreError, StoreOperation};

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub store: ProfileService,
    pub config: Rc<AppConfig>,
}

impl AppContext {
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            store: ProfileService::new(config.store.build_store()),
            config: Rc::new(config),
        }
    }
}

/// Looks up the [`AppContext`] provided above `C` in the component tree.
pub fn app_context<C: Component>(ctx: &Context<C>) -> Option<AppContext> {
    ctx.link()
        .context::<AppContext>(Callback::noop())
        .map(|(app, _handle)| app)
}

/// Runs a store call in the background and delivers its output to the
/// component as a message.
///
/// Returns `false` when no store is available; the caller settles its
/// request as failed. A reply to a component that has been destroyed in the
/// meantime is silently dropped by the framework.
pub fn run_store_call<C, Fut, T>(
    ctx: &Context<C>,
    call: impl FnOnce(ProfileService) -> Fut,
    reply: impl FnOnce(T) -> C::Message + 'static,
) -> bool
where
    C: Component,
    Fut: Future<Output = T> + 'static,
    T: 'static,
{
    let Some(app) = app_context(ctx) else {
        gloo_console::error!("No profile store provided to this view");
        return false;
    };
    let link = ctx.link().clone();
    let pending = call(app.store);
    spawn_local(async move {
        let output = pending.await;
        link.send_message(reply(output));
    });
    true
}

/// Logs a failed store call to the browser console and returns the message
/// the view shows instead of its content.
pub fn report_failure(operation: StoreOperation, error: &StoreError) -> &'static str {
    gloo_console::error!(operation.log_label(), error.to_string());
    operation.failure_message()
}
