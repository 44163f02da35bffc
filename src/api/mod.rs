//! Catalog panel WASM API
//!
//! This module provides the JavaScript-facing API for the catalog page.
//! It includes shared utilities for serialization and error handling, and
//! the populate entry points the page calls after each data fetch.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `panels`: Populate operations for the series/sites/parameters panels

pub mod helpers;
pub mod panels;

// Re-export all public functions to keep the public API flat
pub use panels::{
    list_supported_panels, populate_panel, populate_parameters, populate_series, populate_sites,
    render_panel_html,
};
