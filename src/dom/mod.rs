//! DOM sink for rendered fragments
//!
//! Appends markup into host-page regions addressed by element id. The
//! host page owns the document and its regions; this module never creates
//! or removes them, it only appends after their existing content.

use thiserror::Error;
use web_sys::{Document, Element};

/// Errors from the DOM layer
#[derive(Debug, Clone, Error)]
pub enum DomError {
    /// No global window object (not running in a browsing context)
    #[error("no global window object")]
    NoWindow,

    /// Window exists but carries no document
    #[error("window has no document")]
    NoDocument,

    /// The browser rejected an append into a region
    #[error("append to #{region} failed: {detail}")]
    Append { region: String, detail: String },
}

/// Get the host page document.
pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

/// Look up the region element for a panel key.
pub fn region(document: &Document, key: &str) -> Option<Element> {
    document.get_element_by_id(key)
}

/// Append each fragment to the region identified by `key`, in order.
///
/// A missing region swallows the whole call: panels are optional on the
/// host page, so nothing is appended and no error is raised.
pub fn append_fragments(key: &str, fragments: &[String]) -> Result<(), DomError> {
    let document = document()?;

    let element = match region(&document, key) {
        Some(element) => element,
        None => {
            log::debug!(
                "region #{} not present, dropping {} fragments",
                key,
                fragments.len()
            );
            return Ok(());
        }
    };

    for fragment in fragments {
        element
            .insert_adjacent_html("beforeend", fragment)
            .map_err(|e| DomError::Append {
                region: key.to_string(),
                detail: format!("{:?}", e),
            })?;
    }

    log::debug!("appended {} fragments to #{}", fragments.len(), key);
    Ok(())
}
