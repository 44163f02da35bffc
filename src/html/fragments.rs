//! Fragment builders for the catalog panels

use serde_json::Value;

use crate::models::records::{value_text, SeriesRecord};

const SERIES_TITLE: &str = "Series";
const SERIES_ID_HEADER: &str = "Series ID";
const SERIES_NAME_HEADER: &str = "Series Name";

/// Build the append sequence for the series table.
///
/// Order: heading, table-open carrying the header row, one row per record
/// in input order, table-close. Field values are spliced in raw: markup in
/// a record is interpreted as markup by the consuming document.
pub fn series_fragments(records: &[SeriesRecord]) -> Vec<String> {
    let mut fragments = Vec::with_capacity(records.len() + 3);

    fragments.push(format!("<h4>{}</h4>", SERIES_TITLE));
    fragments.push(format!(
        "<table><tr><th>{}</th><th>{}</th></tr>",
        SERIES_ID_HEADER, SERIES_NAME_HEADER
    ));

    for record in records {
        fragments.push(format!(
            "<tr><td>{}</td><td>{}</td></tr>",
            value_text(&record.series_id),
            record.series_name
        ));
    }

    fragments.push("</table>".to_string());
    fragments
}

/// Build the append sequence for a titled list panel.
///
/// Order: heading with `title`, then one paragraph per item in input
/// order. Items are coerced to text with [`value_text`], unescaped.
pub fn list_fragments(title: &str, items: &[Value]) -> Vec<String> {
    let mut fragments = Vec::with_capacity(items.len() + 1);

    fragments.push(format!("<h4>{}</h4>", title));
    for item in items {
        fragments.push(format!("<p>{}</p>", value_text(item)));
    }

    fragments
}
