//! Hook Veto Integration Tests

use crate::helpers::{CountingCapture, HookLog, TestElementBuilder, press};
use dragresize::{GestureEvent, HandleId, PointerEvent, PointerTarget};

#[test]
fn test_vetoed_start_changes_nothing() {
    let log = HookLog::new();
    let capture = CountingCapture::new();
    log.veto_start.set(true);
    let mut element = TestElementBuilder::new()
        .hooks(log.clone())
        .capture(capture.clone())
        .build();

    assert!(press(&mut element, PointerTarget::Body, 10.0, 10.0).is_empty());
    assert!(press(&mut element, PointerTarget::Handle(HandleId::BottomRight), 100.0, 100.0).is_empty());

    assert!(!element.is_enabled());
    assert_eq!(element.gesture(), None);
    assert_eq!(capture.acquired(), 0);
    assert_eq!(log.calls(), vec!["drag_start", "resize_start br"]);
}

#[test]
fn test_drag_start_hook_runs_before_drag_handle_check() {
    let log = HookLog::new();
    let mut element = TestElementBuilder::new()
        .hooks(log.clone())
        .config(|c| c.require_drag_handle = true)
        .build();

    assert!(press(&mut element, PointerTarget::Body, 10.0, 10.0).is_empty());
    assert_eq!(log.calls(), vec!["drag_start"]);
}

#[test]
fn test_vetoed_step_keeps_previous_geometry() {
    let log = HookLog::new();
    let mut element = TestElementBuilder::new().hooks(log.clone()).build();

    press(&mut element, PointerTarget::Body, 0.0, 0.0);
    element.pointer_move(PointerEvent::mouse(10.0, 10.0));
    assert_eq!(element.geometry().left, 10.0);

    log.veto_step.set(true);
    assert!(element.pointer_move(PointerEvent::mouse(50.0, 50.0)).is_empty());
    assert_eq!((element.geometry().left, element.geometry().top), (10.0, 10.0));
    assert!(element.is_dragging());

    log.veto_step.set(false);
    let events = element.pointer_move(PointerEvent::mouse(60.0, 60.0));
    assert_eq!(events, vec![GestureEvent::Dragging { left: 60.0, top: 60.0 }]);

    assert_eq!(log.calls(), vec!["drag_start", "drag 10 10", "drag 50 50", "drag 60 60"]);
}

#[test]
fn test_resize_hook_sees_proposed_box() {
    let log = HookLog::new();
    let mut element = TestElementBuilder::new().hooks(log.clone()).build();

    press(&mut element, PointerTarget::Handle(HandleId::TopLeft), 0.0, 0.0);
    element.pointer_move(PointerEvent::mouse(10.0, 20.0));

    assert_eq!(log.calls(), vec!["resize_start tl", "resize tl 10 20 90 80"]);
}

#[test]
fn test_vetoed_rotation_step() {
    let log = HookLog::new();
    let mut element = TestElementBuilder::new()
        .hooks(log.clone())
        .config(|c| c.rotatable = true)
        .build();

    press(&mut element, PointerTarget::Handle(HandleId::Rotate), 100.0, 50.0);
    log.veto_step.set(true);
    element.pointer_move(PointerEvent::mouse(50.0, 100.0));

    assert_eq!(element.geometry().rotate, 0.0);
    let events = element.pointer_up(PointerEvent::mouse(50.0, 100.0));
    assert_eq!(events, vec![GestureEvent::RotateStop { angle: 0.0 }]);
}
