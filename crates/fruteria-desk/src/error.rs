//! Error types for the panel workspace
//!
//! Input handlers never propagate these to the host: an unresolvable drop
//! or an unknown panel id degrades to a logged no-op. Errors only surface
//! from construction (`Workspace::mount`, `WorkspaceConfig::from_json`).

use crate::panel::PanelId;

/// Errors that can occur in workspace operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceError {
    /// Panel with the given ID is not open
    PanelNotFound(PanelId),

    /// The dragged key does not resolve against the panel catalog
    UnknownPanelKind(String),

    /// A drop arrived without any payload
    MissingPayload,

    /// The drop payload could not be decoded
    InvalidPayload(String),

    /// The session gate reports the user as logged out
    NotAuthenticated,

    /// A configuration value is out of range
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PanelNotFound(id) => write!(f, "panel not found: {}", id),
            Self::UnknownPanelKind(key) => write!(f, "unknown panel kind: {}", key),
            Self::MissingPayload => write!(f, "drop has no payload"),
            Self::InvalidPayload(msg) => write!(f, "invalid drop payload: {}", msg),
            Self::NotAuthenticated => write!(f, "session is not authenticated"),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config '{}': {}", field, reason)
            }
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for WorkspaceError {}

impl From<serde_json::Error> for WorkspaceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for workspace operations
pub type WorkspaceResult<T> = Result<T, WorkspaceError>;
