use serde::{Deserialize, Serialize};

use crate::catalog::{PanelCatalog, PanelDescriptor};
use crate::error::{WorkspaceError, WorkspaceResult};

/// Name of the transfer slot the sidebar writes the panel key into
pub const PANEL_KEY_SLOT: &str = "panelKey";

/// What a sidebar drag carries into the workspace
///
/// Serialized as `{"kind": "panel", "key": "about"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragPayload {
    /// A catalog entry to instantiate on drop
    Panel { key: String },
}

impl DragPayload {
    /// Payload for a catalog key
    pub fn panel(key: impl Into<String>) -> Self {
        DragPayload::Panel { key: key.into() }
    }

    /// Decode the tagged JSON form
    pub fn parse(raw: &str) -> WorkspaceResult<Self> {
        if raw.trim().is_empty() {
            return Err(WorkspaceError::MissingPayload);
        }
        serde_json::from_str(raw).map_err(|e| WorkspaceError::InvalidPayload(e.to_string()))
    }

    /// Build from the bare key found in the `panelKey` transfer slot.
    /// An absent or empty slot means there is nothing to drop.
    pub fn from_slot(value: Option<&str>) -> WorkspaceResult<Self> {
        match value.map(str::trim) {
            Some(key) if !key.is_empty() => Ok(Self::panel(key)),
            _ => Err(WorkspaceError::MissingPayload),
        }
    }

    /// Catalog key carried by this payload
    pub fn key(&self) -> &str {
        match self {
            DragPayload::Panel { key } => key,
        }
    }

    /// Check the payload against the catalog before use
    pub fn resolve<'c>(
        &self,
        catalog: &'c dyn PanelCatalog,
    ) -> WorkspaceResult<&'c PanelDescriptor> {
        catalog.resolve(self.key())
    }

    /// Encode to the tagged JSON form
    pub fn to_json(&self) -> WorkspaceResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
