//! Workspace End-to-End Tests
//!
//! Drives the workspace purely through synthetic coordinates and event
//! calls, the way a host forwards DOM events.

use std::cell::RefCell;
use std::rc::Rc;

use fruteria_desk::{
    DragPayload, DropCell, GestureKind, InputResult, ManualClock, PanelId, Rect, Size,
    StaticCatalog, StaticSession, Workspace, WorkspaceConfig, WorkspaceEvent,
};

/// Grid region of an 800x600 workspace below a 56px top bar
const GRID: Rect = Rect {
    x: 0.0,
    y: 56.0,
    width: 800.0,
    height: 600.0,
};

fn mount(config: WorkspaceConfig) -> (Workspace, ManualClock) {
    let clock = ManualClock::new(1_700_000_000_000);
    let ws = Workspace::mount(
        config,
        StaticCatalog::fruteria(),
        &StaticSession::LOGGED_IN,
        clock.clone(),
    )
    .unwrap();
    (ws, clock)
}

fn drag_from_sidebar(
    ws: &mut Workspace,
    key: &str,
    client_x: f32,
    client_y: f32,
) -> Option<PanelId> {
    ws.nav_drag_start(key);
    ws.drag_enter();
    ws.drag_over(client_x, client_y, GRID);
    let id = ws.drop(None);
    ws.nav_drag_end();
    id
}

/// Test that dragging "about" into the top-left cell opens it there, on top.
#[test]
fn test_drop_about_into_top_left_cell() {
    let (mut ws, clock) = mount(WorkspaceConfig::default());
    ws.resize_viewport(800.0, 656.0);

    let first = drag_from_sidebar(&mut ws, "fruitbook", 700.0, 600.0).unwrap();
    clock.advance(10);

    ws.nav_drag_start("about");
    assert_eq!(ws.dragging_nav_key(), Some("about"));
    ws.drag_enter();
    ws.drag_over(120.0, 90.0, GRID);
    assert_eq!(ws.active_cell(), Some(DropCell::new(0, 0)));
    assert!(ws.overlay().visible);

    let about = ws.drop(None).unwrap();
    let panel = ws.panel(&about).unwrap();
    assert_eq!(panel.rect, Rect::new(0.0, 56.0, 400.0, 300.0));
    assert_eq!(panel.title, "About");
    assert!(panel.z_index > ws.panel(&first).unwrap().z_index);
    assert_eq!(ws.panels().topmost().unwrap().id, about);
    assert!(!ws.overlay().visible);
}

/// Test that drops without a resolved cell cascade from (60, 60).
#[test]
fn test_cascade_when_no_cell() {
    let (mut ws, clock) = mount(WorkspaceConfig::default());
    let mut rects = Vec::new();
    for key in ["fruitbook", "fruitview", "about", "about"] {
        ws.nav_drag_start(key);
        let id = ws.drop(None).unwrap();
        rects.push(ws.panel(&id).unwrap().rect);
        clock.advance(1);
    }
    assert_eq!(rects[0], Rect::new(60.0, 60.0, 700.0, 420.0));
    assert_eq!(rects[3], Rect::new(180.0, 180.0, 700.0, 420.0));
}

/// Test that unknown or missing payloads leave the workspace untouched.
#[test]
fn test_unresolvable_drops_are_ignored() {
    let (mut ws, _) = mount(WorkspaceConfig::default());
    assert!(drag_from_sidebar(&mut ws, "settings", 10.0, 70.0).is_none());
    assert!(ws.drop_from_slot(None).is_none());
    assert!(ws.drop(Some(DragPayload::panel(""))).is_none());
    assert!(ws.is_empty());
    assert!(!ws.overlay_visible());
}

/// Test that nested enter/leave pairs keep the target until really left.
#[test]
fn test_nested_enter_leave_keeps_target() {
    let (mut ws, _) = mount(WorkspaceConfig::default());
    ws.nav_drag_start("fruitview");
    ws.drag_enter();
    ws.drag_over(500.0, 400.0, GRID);
    // Pointer crosses into a child element and back out
    ws.drag_enter();
    ws.drag_leave();
    assert_eq!(ws.active_cell(), Some(DropCell::new(1, 1)));
    ws.drag_leave();
    assert_eq!(ws.active_cell(), None);
    // Stray extra leaves are harmless
    ws.drag_leave();
    ws.drag_leave();
    assert_eq!(ws.tracker().depth(), 0);
}

/// Test that clicking a header raises the panel and drags it.
#[test]
fn test_header_drag_raises_and_moves() {
    let (mut ws, clock) = mount(WorkspaceConfig::default());
    ws.resize_viewport(800.0, 656.0);
    let left = drag_from_sidebar(&mut ws, "fruitbook", 10.0, 70.0).unwrap();
    clock.advance(1);
    let right = drag_from_sidebar(&mut ws, "fruitview", 500.0, 70.0).unwrap();
    assert_eq!(ws.panels().topmost().unwrap().id, right);

    // Header of the left panel: (0, 56) .. (400, 96)
    assert_eq!(ws.pointer_down(50.0, 70.0), InputResult::Handled);
    assert_eq!(ws.panels().topmost().unwrap().id, left);
    assert_eq!(ws.active_panel(), Some(&left));
    assert!(ws.overlay_visible());

    ws.pointer_move(80.0, 100.0);
    ws.pointer_move(90.0, 90.0);
    ws.pointer_up();
    assert_eq!(ws.panel(&left).unwrap().rect, Rect::new(40.0, 76.0, 400.0, 300.0));
    assert!(!ws.overlay_visible());
    assert!(ws.gesture_listeners().is_empty());
}

/// Test that resizing floors at the minimum panel size.
#[test]
fn test_resize_floors_at_minimum() {
    let (mut ws, _) = mount(WorkspaceConfig::default());
    let id = ws.drop(Some(DragPayload::panel("about"))).unwrap();
    assert!(ws.pointer_down_on(&id, GestureKind::Resize, 750.0, 470.0));
    ws.pointer_move(-2000.0, -2000.0);
    ws.pointer_up();
    let rect = ws.panel(&id).unwrap().rect;
    assert_eq!(rect.size(), Size::new(200.0, 100.0));
    assert_eq!(rect.position(), fruteria_desk::Vec2::new(60.0, 60.0));
}

/// Test that Escape recovers from a gesture whose release was lost.
#[test]
fn test_escape_recovers_orphaned_gesture() {
    let (mut ws, _) = mount(WorkspaceConfig::default());
    let id = ws.drop(Some(DragPayload::panel("about"))).unwrap();
    ws.pointer_down_on(&id, GestureKind::Move, 100.0, 70.0);
    ws.nav_drag_start("fruitbook");
    ws.drag_enter();
    ws.drag_enter();

    // The release never arrives
    assert!(ws.needs_document_listeners());
    assert!(ws.key_down("Escape"));

    assert!(!ws.needs_document_listeners());
    assert!(!ws.overlay_visible());
    assert_eq!(ws.dragging_nav_key(), None);
    assert_eq!(ws.active_panel(), None);

    // Later moves no longer affect the panel
    let before = ws.panel(&id).unwrap().rect;
    assert_eq!(ws.pointer_move(500.0, 500.0), InputResult::Unhandled);
    assert_eq!(ws.panel(&id).unwrap().rect, before);

    // A fresh gesture works again
    assert!(ws.pointer_down_on(&id, GestureKind::Move, 100.0, 70.0));
}

/// Test that stacking stays strict across z-index compaction.
#[test]
fn test_z_order_survives_compaction() {
    let config = WorkspaceConfig {
        z_index_limit: 4,
        ..Default::default()
    };
    let (mut ws, clock) = mount(config);
    let mut ids = Vec::new();
    for _ in 0..3 {
        ids.push(ws.drop(Some(DragPayload::panel("about"))).unwrap());
        clock.advance(1);
    }
    for round in 0..10 {
        let id = &ids[round % ids.len()];
        ws.bring_to_front(id);
        let top = ws.panels().topmost().unwrap();
        assert_eq!(&top.id, id);
        let mut zs: Vec<_> = ws.list().iter().map(|p| p.z_index).collect();
        zs.sort_unstable();
        zs.dedup();
        assert_eq!(zs.len(), ids.len());
    }
}

/// Test that subscribers see the whole lifecycle and can unsubscribe.
#[test]
fn test_subscriber_lifecycle() {
    let (mut ws, _) = mount(WorkspaceConfig::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let sub = ws.subscribe(move |event| sink.borrow_mut().push(event.clone()));

    let id = drag_from_sidebar(&mut ws, "about", 10.0, 70.0).unwrap();
    ws.close_panel(&id);
    assert!(seen
        .borrow()
        .contains(&WorkspaceEvent::PanelOpened { id: id.clone() }));
    assert_eq!(
        seen.borrow().last(),
        Some(&WorkspaceEvent::PanelClosed { id })
    );

    assert!(ws.unsubscribe(sub));
    let count = seen.borrow().len();
    ws.cancel();
    assert_eq!(seen.borrow().len(), count);
}

/// Test that ids stay unique at one timestamp and a closed id can be reused.
#[test]
fn test_ids_unique_at_same_timestamp() {
    let (mut ws, _) = mount(WorkspaceConfig::default());
    let a = ws.drop(Some(DragPayload::panel("about"))).unwrap();
    let b = ws.drop(Some(DragPayload::panel("about"))).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.as_str(), "about-1700000000000");
    assert_eq!(b.as_str(), "about-1700000000000-1");

    assert!(ws.close_panel(&a));
    let c = ws.drop(Some(DragPayload::panel("about"))).unwrap();
    assert_eq!(c, a);
    assert!(ws.panel(&b).is_some());
}

/// Test that a workspace collapsing to zero size mid-drag drops at the cascade.
#[test]
fn test_zero_size_drag_over_cascades() {
    let (mut ws, _) = mount(WorkspaceConfig::default());
    ws.nav_drag_start("about");
    ws.drag_enter();
    ws.drag_over(700.0, 600.0, GRID);
    ws.drag_over(0.0, 0.0, Rect::new(0.0, 56.0, 0.0, 0.0));
    assert_eq!(ws.active_cell(), None);
    let id = ws.drop(None).unwrap();
    assert_eq!(ws.panel(&id).unwrap().rect, Rect::new(60.0, 60.0, 700.0, 420.0));
}
