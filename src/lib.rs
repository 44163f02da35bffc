//! Data Catalog Panel Renderer WASM Module
//!
//! This is the WASM module for the data catalog page. It renders fetched
//! catalog data (time series, sites, measured parameters) into existing
//! page regions by appending markup after the regions' current content.

pub mod models;
pub mod html;
pub mod dom;
pub mod api;

// Re-export commonly used types
pub use models::panels::{PanelDefinition, PanelLayout, PanelRegistry};
pub use models::records::SeriesRecord;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Catalog panel renderer WASM module initialized");
}
