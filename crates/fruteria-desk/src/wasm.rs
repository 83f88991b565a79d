//! WASM bindings for the JavaScript host
//!
//! `WorkspaceHandle` wraps the orchestrator. The host forwards DOM drag,
//! pointer and key events to it and renders from the JSON snapshots it
//! returns (`panels_json`, `overlay_json`).

use wasm_bindgen::prelude::*;

use crate::catalog::{PanelDescriptor, StaticCatalog};
use crate::clock::SystemClock;
use crate::config::WorkspaceConfig;
use crate::error::WorkspaceError;
use crate::events::SubscriptionId;
use crate::input::{DragPayload, GestureKind, PANEL_KEY_SLOT};
use crate::math::{Rect, Size};
use crate::panel::PanelId;
use crate::session::StaticSession;
use crate::workspace::{Workspace, EMPTY_HINT};

fn to_js(err: WorkspaceError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// Floating panel workspace exposed to JavaScript
#[wasm_bindgen]
pub struct WorkspaceHandle {
    inner: Workspace,
    subscriptions: Vec<Option<SubscriptionId>>,
}

#[wasm_bindgen]
impl WorkspaceHandle {
    /// Mount a workspace.
    ///
    /// `config_json` and `catalog_json` are optional; missing values fall
    /// back to the defaults and the built-in catalog. Fails when
    /// `logged_in` is false.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: Option<String>,
        catalog_json: Option<String>,
        logged_in: bool,
    ) -> Result<WorkspaceHandle, JsValue> {
        let config = match config_json {
            Some(json) => WorkspaceConfig::from_json(&json).map_err(to_js)?,
            None => WorkspaceConfig::default(),
        };
        let catalog = match catalog_json {
            Some(json) => {
                let entries: Vec<PanelDescriptor> = serde_json::from_str(&json)
                    .map_err(|e| to_js(WorkspaceError::from(e)))?;
                StaticCatalog::new(entries)
            }
            None => StaticCatalog::fruteria(),
        };
        let inner = Workspace::mount(config, catalog, &StaticSession(logged_in), SystemClock)
            .map_err(to_js)?;
        Ok(WorkspaceHandle {
            inner,
            subscriptions: Vec::new(),
        })
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Full workspace element size, top bar included
    #[wasm_bindgen]
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        self.inner.resize_viewport(width, height);
    }

    /// Grid region size, top bar excluded
    #[wasm_bindgen]
    pub fn set_container_size(&mut self, width: f32, height: f32) {
        self.inner.set_container_size(Size::new(width, height));
    }

    // =========================================================================
    // Sidebar drag
    // =========================================================================

    #[wasm_bindgen]
    pub fn nav_drag_start(&mut self, key: &str) {
        self.inner.nav_drag_start(key);
    }

    #[wasm_bindgen]
    pub fn nav_drag_end(&mut self) {
        self.inner.nav_drag_end();
    }

    #[wasm_bindgen]
    pub fn drag_enter(&mut self) {
        self.inner.drag_enter();
    }

    #[wasm_bindgen]
    pub fn drag_leave(&mut self) {
        self.inner.drag_leave();
    }

    /// `left/top/width/height` is the grid region's bounding client rect
    #[wasm_bindgen]
    pub fn drag_over(
        &mut self,
        client_x: f32,
        client_y: f32,
        left: f32,
        top: f32,
        width: f32,
        height: f32,
    ) {
        self.inner
            .drag_over(client_x, client_y, Rect::new(left, top, width, height));
    }

    /// Transfer slot the sidebar writes the panel key into on drag-start
    #[wasm_bindgen]
    pub fn panel_key_slot() -> String {
        PANEL_KEY_SLOT.to_string()
    }

    /// Drop carrying the value read from [`Self::panel_key_slot`]; returns
    /// the new panel id
    #[wasm_bindgen]
    pub fn drop_key(&mut self, key: Option<String>) -> Option<String> {
        self.inner
            .drop_from_slot(key.as_deref())
            .map(|id| id.as_str().to_string())
    }

    /// Drop carrying a tagged JSON payload, `{"kind":"panel","key":...}`
    #[wasm_bindgen]
    pub fn drop_json(&mut self, payload_json: &str) -> Option<String> {
        let payload = match DragPayload::parse(payload_json) {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn(&format!("[workspace] {}", err));
                None
            }
        };
        self.inner.drop(payload).map(|id| id.as_str().to_string())
    }

    // =========================================================================
    // Pointer and keyboard
    // =========================================================================

    /// Hit-test and start a gesture; returns the `InputResult` as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<String, JsValue> {
        let result = self.inner.pointer_down(x, y);
        serde_json::to_string(&result).map_err(|e| to_js(e.into()))
    }

    /// Start a gesture on a panel the host hit-tested itself
    #[wasm_bindgen]
    pub fn pointer_down_on(&mut self, panel_id: &str, resize: bool, x: f32, y: f32) -> bool {
        let kind = if resize {
            GestureKind::Resize
        } else {
            GestureKind::Move
        };
        self.inner
            .pointer_down_on(&PanelId::from(panel_id), kind, x, y)
    }

    /// Document-scope pointer move; true if a gesture consumed it
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.inner.pointer_move(x, y) == crate::input::InputResult::Handled
    }

    /// Document-scope pointer release; true if a gesture ended
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> bool {
        self.inner.pointer_up() == crate::input::InputResult::Handled
    }

    /// Whether `pointermove`/`pointerup` must be attached to the document
    #[wasm_bindgen]
    pub fn needs_document_listeners(&self) -> bool {
        self.inner.needs_document_listeners()
    }

    #[wasm_bindgen]
    pub fn key_down(&mut self, key: &str) -> bool {
        self.inner.key_down(key)
    }

    #[wasm_bindgen]
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }

    #[wasm_bindgen]
    pub fn close_panel(&mut self, panel_id: &str) -> bool {
        self.inner.close_panel(&PanelId::from(panel_id))
    }

    #[wasm_bindgen]
    pub fn bring_to_front(&mut self, panel_id: &str) -> Option<u32> {
        self.inner.bring_to_front(&PanelId::from(panel_id))
    }

    // =========================================================================
    // State for rendering
    // =========================================================================

    /// Open panels as a JSON array
    #[wasm_bindgen]
    pub fn panels_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.list()).map_err(|e| to_js(e.into()))
    }

    /// Grid overlay view model as JSON
    #[wasm_bindgen]
    pub fn overlay_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.overlay()).map_err(|e| to_js(e.into()))
    }

    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[wasm_bindgen]
    pub fn empty_hint(&self) -> String {
        EMPTY_HINT.to_string()
    }

    #[wasm_bindgen]
    pub fn dragging_nav_key(&self) -> Option<String> {
        self.inner.dragging_nav_key().map(str::to_string)
    }

    #[wasm_bindgen]
    pub fn active_panel(&self) -> Option<String> {
        self.inner.active_panel().map(|id| id.as_str().to_string())
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Call `callback` with every workspace event as a JSON string.
    /// Returns a handle for [`Self::unsubscribe`].
    #[wasm_bindgen]
    pub fn subscribe(&mut self, callback: js_sys::Function) -> u32 {
        let id = self.inner.subscribe(move |event| match serde_json::to_string(event) {
            Ok(json) => {
                if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                    let message = JsValue::from_str("[workspace] subscriber threw");
                    web_sys::console::warn_2(&message, &err);
                }
            }
            Err(err) => warn(&format!("[workspace] event serialization failed: {}", err)),
        });
        self.subscriptions.push(Some(id));
        (self.subscriptions.len() - 1) as u32
    }

    #[wasm_bindgen]
    pub fn unsubscribe(&mut self, handle: u32) -> bool {
        match self
            .subscriptions
            .get_mut(handle as usize)
            .and_then(Option::take)
        {
            Some(id) => self.inner.unsubscribe(id),
            None => false,
        }
    }
}
