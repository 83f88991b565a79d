//! Theme tokens consumed by panel chrome
//!
//! Colors are owned by the host's theme provider. Panels only reference
//! them indirectly, through CSS custom properties.

use serde::{Deserialize, Serialize};

/// Light or dark theme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Key under which the host persists the choice
    pub const STORAGE_KEY: &'static str = "theme";

    /// Parse the stored value; anything else is `None`
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    /// Value to persist
    pub fn id(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Body class applied by the host
    pub fn class_name(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "theme-dark",
            ThemeMode::Light => "theme-light",
        }
    }

    /// The other mode
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// CSS custom properties read by panel chrome
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PanelStyle {
    pub background: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
}

/// Tokens used by every panel
pub const PANEL_STYLE: PanelStyle = PanelStyle {
    background: "--background-color",
    text: "--text-color",
    border: "--border-color",
    accent: "--gradient-start",
};

impl PanelStyle {
    /// `var(--token)` expression for a token name
    pub fn var(token: &str) -> String {
        format!("var({})", token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trip_ids() {
        assert_eq!(ThemeMode::from_id("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_id("blue"), None);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.class_name(), "theme-light");
    }

    #[test]
    fn test_panel_style_var() {
        assert_eq!(PanelStyle::var(PANEL_STYLE.border), "var(--border-color)");
    }
}
