//! Whole-view placeholders shown while a view is loading or after it failed.

use yew::{html, Callback, Html, MouseEvent};

pub fn loading(message: &str) -> Html {
    html! { <div class="loading">{ message.to_string() }</div> }
}

/// Error state replacing the entire view. `retry` re-runs the view's fetch.
pub fn error(message: &str, retry: Callback<MouseEvent>) -> Html {
    html! {
        <div class="error">
            <p>{ message.to_string() }</p>
            <button onclick={retry}>{"Try again"}</button>
        </div>
    }
}

pub fn not_found() -> Html {
    html! { <div class="error">{"Page not found."}</div> }
}
