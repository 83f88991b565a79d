//! Panel catalog
//!
//! The catalog is owned by the host application. The workspace only looks
//! entries up by key; whatever renders inside a panel is the host's
//! business and is found again through the same key.

use serde::{Deserialize, Serialize};

use crate::error::{WorkspaceError, WorkspaceResult};
use crate::math::Size;

/// A registered panel type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    /// Stable key carried by sidebar drags
    pub key: String,
    /// Title shown in the panel header and sidebar
    pub title: String,
    /// Per-panel size floor, overriding the workspace default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_size: Option<Size>,
}

impl PanelDescriptor {
    /// Create a descriptor using the workspace's default size floor
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            min_size: None,
        }
    }

    /// Set a per-panel minimum size
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = Some(min_size);
        self
    }
}

/// Read-only view of the host's panel catalog
pub trait PanelCatalog {
    /// All entries, in sidebar order
    fn entries(&self) -> &[PanelDescriptor];

    /// Look up an entry by key
    fn find(&self, key: &str) -> Option<&PanelDescriptor> {
        self.entries().iter().find(|entry| entry.key == key)
    }

    /// Look up an entry by key, failing with `UnknownPanelKind`
    fn resolve(&self, key: &str) -> WorkspaceResult<&PanelDescriptor> {
        self.find(key)
            .ok_or_else(|| WorkspaceError::UnknownPanelKind(key.to_string()))
    }
}

/// Catalog backed by a fixed list
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticCatalog {
    entries: Vec<PanelDescriptor>,
}

impl StaticCatalog {
    /// Create a catalog from a list of descriptors
    pub fn new(entries: Vec<PanelDescriptor>) -> Self {
        Self { entries }
    }

    /// The stock fruteria panels: fruit book, fruit view, about
    pub fn fruteria() -> Self {
        Self::new(vec![
            PanelDescriptor::new("fruitbook", "Fruit Book"),
            PanelDescriptor::new("fruitview", "Fruit View"),
            PanelDescriptor::new("about", "About"),
        ])
    }
}

impl PanelCatalog for StaticCatalog {
    fn entries(&self) -> &[PanelDescriptor] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fruteria_catalog_order() {
        let catalog = StaticCatalog::fruteria();
        let keys: Vec<_> = catalog.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["fruitbook", "fruitview", "about"]);
        assert_eq!(catalog.find("fruitview").unwrap().title, "Fruit View");
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = StaticCatalog::fruteria();
        assert_eq!(
            catalog.resolve("settings"),
            Err(WorkspaceError::UnknownPanelKind("settings".to_string()))
        );
        assert!(catalog.resolve("about").is_ok());
    }

    #[test]
    fn test_descriptor_min_size() {
        let d = PanelDescriptor::new("chart", "Chart").with_min_size(Size::new(320.0, 240.0));
        assert_eq!(d.min_size, Some(Size::new(320.0, 240.0)));
    }
}
