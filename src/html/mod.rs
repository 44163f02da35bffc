//! Markup fragment construction
//!
//! Pure string building with no DOM access. Each returned fragment
//! corresponds to exactly one append into the target region, so callers
//! and tests can reason about the append sequence directly.

pub mod fragments;

pub use fragments::{list_fragments, series_fragments};
