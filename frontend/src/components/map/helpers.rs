//! Script builders for the Leaflet map.
//!
//! Leaflet is loaded globally by `index.html`; the component drives it by
//! evaluating small scripts. Every value spliced into a script goes through
//! `js_string` (a JSON string literal) and popup text is HTML-escaped first,
//! so profile data can never break out of the generated code or markup.

use common::model::profile::Coordinates;
use serde_json::{json, Value};

/// Everything needed to draw one map with a single marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView<'a> {
    pub element_id: &'a str,
    pub center: Coordinates,
    pub zoom: u8,
    pub tile_url: &'a str,
    pub attribution: &'a str,
    pub popup_html: String,
}

/// Escapes special HTML characters in a string.
///
/// Popups are rendered by Leaflet as HTML, so profile text is escaped before
/// it is placed next to the `<br />` separator.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Popup body: the title line above the detail line.
pub fn popup_html(title: &str, detail: &str) -> String {
    format!("{}<br />{}", escape_html(title), escape_html(detail))
}

fn js_string(value: &str) -> String {
    Value::from(value).to_string()
}

/// Script that (re)creates the map on `view.element_id`, replacing any map
/// a previous render left on the same element.
pub fn mount_script(view: &MapView<'_>) -> String {
    let center = json!([view.center.latitude, view.center.longitude]).to_string();
    format!(
        "(function () {{\n\
         var el = document.getElementById({id});\n\
         if (!el || !window.L) {{ return; }}\n\
         if (el._profileMap) {{ el._profileMap.remove(); }}\n\
         var map = L.map(el).setView({center}, {zoom});\n\
         L.tileLayer({tiles}, {{ attribution: {attribution} }}).addTo(map);\n\
         L.marker({center}).addTo(map).bindPopup({popup});\n\
         el._profileMap = map;\n\
         }})();",
        id = js_string(view.element_id),
        center = center,
        zoom = view.zoom,
        tiles = js_string(view.tile_url),
        attribution = js_string(view.attribution),
        popup = js_string(&view.popup_html),
    )
}

/// Script that releases the map attached to `element_id`, if any.
pub fn unmount_script(element_id: &str) -> String {
    format!(
        "(function () {{\n\
         var el = document.getElementById({id});\n\
         if (el && el._profileMap) {{ el._profileMap.remove(); el._profileMap = null; }}\n\
         }})();",
        id = js_string(element_id),
    )
}
