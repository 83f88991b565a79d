use serde::{Deserialize, Serialize};

use super::Panel;
use crate::config::PanelChrome;
use crate::math::{Rect, Vec2};

/// Region of a panel under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelRegion {
    /// Title bar; starts a move
    Header,
    /// Close button at the right end of the title bar
    CloseButton,
    /// Grip in the bottom-right corner; starts a resize
    ResizeHandle,
    /// Panel content, owned by the host
    Body,
}

impl PanelRegion {
    /// Whether pressing here starts a gesture
    pub fn starts_gesture(&self) -> bool {
        matches!(self, PanelRegion::Header | PanelRegion::ResizeHandle)
    }
}

impl Panel {
    /// Bounds of the resize grip
    pub fn resize_handle_rect(&self, chrome: &PanelChrome) -> Rect {
        let size = chrome.resize_handle_size;
        Rect::new(
            self.rect.right() - chrome.resize_handle_inset - size,
            self.rect.bottom() - chrome.resize_handle_inset - size,
            size,
            size,
        )
    }

    /// Classify a workspace point against this panel's chrome.
    ///
    /// The resize grip sits above the content, so it wins over `Body`.
    pub fn region_at(&self, point: Vec2, chrome: &PanelChrome) -> Option<PanelRegion> {
        if !self.rect.contains(point) {
            return None;
        }
        if self.resize_handle_rect(chrome).contains(point) {
            return Some(PanelRegion::ResizeHandle);
        }
        if point.y < self.rect.y + chrome.header_height {
            if point.x >= self.rect.right() - chrome.close_button_width {
                return Some(PanelRegion::CloseButton);
            }
            return Some(PanelRegion::Header);
        }
        Some(PanelRegion::Body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;
    use crate::panel::PanelId;

    fn panel() -> Panel {
        Panel {
            id: PanelId::from("about-1"),
            key: "about".to_string(),
            title: "About".to_string(),
            rect: Rect::new(100.0, 100.0, 400.0, 300.0),
            z_index: 1,
            min_size: Size::new(200.0, 100.0),
        }
    }

    #[test]
    fn test_region_at() {
        let p = panel();
        let chrome = PanelChrome::default();
        assert_eq!(p.region_at(Vec2::new(150.0, 110.0), &chrome), Some(PanelRegion::Header));
        assert_eq!(p.region_at(Vec2::new(490.0, 110.0), &chrome), Some(PanelRegion::CloseButton));
        assert_eq!(p.region_at(Vec2::new(150.0, 200.0), &chrome), Some(PanelRegion::Body));
        assert_eq!(p.region_at(Vec2::new(490.0, 390.0), &chrome), Some(PanelRegion::ResizeHandle));
        assert_eq!(p.region_at(Vec2::new(99.0, 110.0), &chrome), None);
    }

    #[test]
    fn test_starts_gesture() {
        assert!(PanelRegion::Header.starts_gesture());
        assert!(PanelRegion::ResizeHandle.starts_gesture());
        assert!(!PanelRegion::CloseButton.starts_gesture());
        assert!(!PanelRegion::Body.starts_gesture());
    }
}
