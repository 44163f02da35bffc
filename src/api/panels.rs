//! Populate operations for the catalog panels

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::api::helpers;
use crate::dom;
use crate::html::{list_fragments, series_fragments};
use crate::models::panels::{PanelRegistry, PARAMETERS_KEY, SERIES_KEY, SITES_KEY};
use crate::models::records::SeriesRecord;

/// Render the series table into the `series` region.
///
/// Appends a heading and a two-column table (one row per record, input
/// order) after the region's existing content. Panels accumulate: calling
/// this twice appends two tables. If the region is absent the call does
/// nothing.
#[wasm_bindgen(js_name = populateSeries)]
pub fn populate_series(data: JsValue) -> Result<(), JsValue> {
    web_sys::console::log_1(&data);

    let records: Vec<SeriesRecord> =
        helpers::deserialize(data, "series data is not an array of records")?;

    dom::append_fragments(SERIES_KEY, &series_fragments(&records)).map_err(helpers::dom_error)
}

/// Render the sites list into the `sites` region.
#[wasm_bindgen(js_name = populateSites)]
pub fn populate_sites(data: JsValue) -> Result<(), JsValue> {
    populate_registered(SITES_KEY, data)
}

/// Render the parameters list into the `parameters` region.
#[wasm_bindgen(js_name = populateParameters)]
pub fn populate_parameters(data: JsValue) -> Result<(), JsValue> {
    populate_registered(PARAMETERS_KEY, data)
}

/// Render a titled list into an arbitrary region.
///
/// Generic form of the list panels: appends a heading with `title`, then
/// one paragraph per item in input order. `region_key` is the element id
/// of the target region; if no such element exists the call silently does
/// nothing.
#[wasm_bindgen(js_name = populatePanel)]
pub fn populate_panel(title: &str, region_key: &str, data: JsValue) -> Result<(), JsValue> {
    web_sys::console::log_1(&data);

    let items: Vec<Value> = helpers::deserialize(data, "panel data is not an array")?;

    dom::append_fragments(region_key, &list_fragments(title, &items)).map_err(helpers::dom_error)
}

/// Delegate to [`populate_panel`] with the registered title for `key`.
fn populate_registered(key: &str, data: JsValue) -> Result<(), JsValue> {
    let def = PanelRegistry::get_definition(key)
        .ok_or_else(|| JsValue::from_str(&format!("unknown panel key: {}", key)))?;

    populate_panel(def.title, def.key, data)
}

/// Build the fragment sequence for a titled list without touching the DOM
///
/// Returns the fragments as a JS string array (for preview/testing).
#[wasm_bindgen(js_name = renderPanelHtml)]
pub fn render_panel_html(title: &str, data: JsValue) -> Result<JsValue, JsValue> {
    let items: Vec<Value> = helpers::deserialize(data, "panel data is not an array")?;

    helpers::serialize(
        &list_fragments(title, &items),
        "failed to serialize fragments",
    )
}

/// Get documentation for the registered panels
///
/// Returns a markdown-formatted string listing each panel's region key,
/// heading, and layout. This is the single source of truth for what the
/// module can populate.
#[wasm_bindgen(js_name = listSupportedPanels)]
pub fn list_supported_panels() -> String {
    PanelRegistry::generate_docs()
}
