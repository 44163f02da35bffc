//! Panel registry - single source of truth for the host-page panels.
//!
//! The catalog page carries one region per panel, addressed by element id.
//! The renderer never creates or removes these regions, it only appends
//! into them.

/// Element id of the series table region
pub const SERIES_KEY: &str = "series";
/// Element id of the sites list region
pub const SITES_KEY: &str = "sites";
/// Element id of the parameters list region
pub const PARAMETERS_KEY: &str = "parameters";

/// How a panel lays out its records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayout {
    /// Two-column table with a header row
    Table,
    /// One paragraph per record
    List,
}

/// Definition of a host-page panel
#[derive(Debug, Clone)]
pub struct PanelDefinition {
    /// Element id of the target region
    pub key: &'static str,
    /// Heading text rendered above the records
    pub title: &'static str,
    /// Layout
    pub layout: PanelLayout,
    /// Brief description
    pub description: &'static str,
}

/// Registry of all panels the catalog page provides
pub struct PanelRegistry;

impl PanelRegistry {
    /// Get all registered panels
    pub fn all_panels() -> &'static [PanelDefinition] {
        &[
            PanelDefinition {
                key: SERIES_KEY,
                title: "Series",
                layout: PanelLayout::Table,
                description: "Available time series (id and name)",
            },
            PanelDefinition {
                key: SITES_KEY,
                title: "Sites",
                layout: PanelLayout::List,
                description: "Monitoring sites",
            },
            PanelDefinition {
                key: PARAMETERS_KEY,
                title: "Parameters",
                layout: PanelLayout::List,
                description: "Measured parameters",
            },
        ]
    }

    /// Check if a region key belongs to a registered panel
    pub fn is_known(key: &str) -> bool {
        Self::all_panels().iter().any(|def| def.key == key)
    }

    /// Get panel definition by region key
    pub fn get_definition(key: &str) -> Option<&'static PanelDefinition> {
        Self::all_panels().iter().find(|def| def.key == key)
    }

    /// Generate documentation for all registered panels
    pub fn generate_docs() -> String {
        let mut output = String::from("# Catalog Panels\n\n");

        for def in Self::all_panels() {
            let layout = match def.layout {
                PanelLayout::Table => "table",
                PanelLayout::List => "list",
            };

            output.push_str(&format!(
                "- `#{}` \"{}\" ({}) - {}\n",
                def.key, def.title, layout, def.description
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_knows_all_page_regions() {
        assert!(PanelRegistry::is_known("series"));
        assert!(PanelRegistry::is_known("sites"));
        assert!(PanelRegistry::is_known("parameters"));
        assert!(!PanelRegistry::is_known("downloads"));
    }

    #[test]
    fn test_get_definition_fixes_title_and_layout() {
        let sites = PanelRegistry::get_definition("sites").unwrap();
        assert_eq!(sites.title, "Sites");
        assert_eq!(sites.layout, PanelLayout::List);

        let series = PanelRegistry::get_definition("series").unwrap();
        assert_eq!(series.title, "Series");
        assert_eq!(series.layout, PanelLayout::Table);
    }

    #[test]
    fn test_generate_docs_lists_every_panel() {
        let docs = PanelRegistry::generate_docs();
        for def in PanelRegistry::all_panels() {
            assert!(docs.contains(def.key));
            assert!(docs.contains(def.title));
        }
    }
}
