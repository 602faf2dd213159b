//! Single-marker map of a profile's address.
//!
//! The component renders an empty container with a unique id and, after the
//! DOM is in place, mounts a Leaflet map on it centred on `center` with one
//! marker whose popup shows `title` above `detail`. Changing any prop
//! rebuilds the map; destroying the component releases it.

mod helpers;

use common::model::profile::Coordinates;
use uuid::Uuid;
use wasm_bindgen::JsValue;
use yew::{html, Component, Context, Html, Properties};

use crate::config::MapConfig;
use helpers::{mount_script, popup_html, unmount_script, MapView};

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileMapProps {
    pub center: Coordinates,
    /// First popup line, normally the profile name.
    pub title: String,
    /// Second popup line, normally the street.
    pub detail: String,
    pub settings: MapConfig,
}

pub struct ProfileMap {
    pub element_id: String,
    /// Set when the map must be (re)built after the next render.
    stale: bool,
}

impl Component for ProfileMap {
    type Message = ();
    type Properties = ProfileMapProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            element_id: format!("map-{}", Uuid::new_v4()),
            stale: true,
        }
    }

    fn changed(&mut self, _ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.stale = true;
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let style = format!("height: {}px; width: 100%;", ctx.props().settings.height_px);
        html! {
            <div class="map-container">
                <div id={self.element_id.clone()} style={style}></div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !self.stale {
            return;
        }
        self.stale = false;

        let props = ctx.props();
        let view = MapView {
            element_id: &self.element_id,
            center: props.center,
            zoom: props.settings.zoom,
            tile_url: &props.settings.tile_url,
            attribution: &props.settings.attribution,
            popup_html: popup_html(&props.title, &props.detail),
        };
        run_script(&mount_script(&view));
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        run_script(&unmount_script(&self.element_id));
    }
}

fn run_script(script: &str) {
    let function = js_sys::Function::new_no_args(script);
    if let Err(e) = function.call0(&JsValue::NULL) {
        gloo_console::error!("Map script failed:", e);
    }
}
