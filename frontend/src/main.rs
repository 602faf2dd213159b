use crate::app::App;

mod app;
mod components;
mod config;
mod context;
mod resource;
mod routes;
mod services;

fn main() {
    yew::Renderer::<App>::new().render();
}
