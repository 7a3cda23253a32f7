//! Tests for key and mouse handling in the terminal host.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tapcount::ui::app::App;
use tapcount::ui::input::{handle_key, handle_mouse, Binding};

// -- Keyboard ----------------------------------------------------------------

#[test]
fn enter_activates() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(current_count(&app), 1);
}

#[test]
fn space_activates() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::Char(' ')));
    handle_key(&mut app, press_key(KeyCode::Char(' ')));
    assert_eq!(current_count(&app), 2);
}

#[test]
fn key_release_is_ignored() {
    let mut app = make_app();
    handle_key(&mut app, release_key(KeyCode::Enter));
    assert_eq!(current_count(&app), 0);
}

#[test]
fn unrelated_keys_do_not_activate() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::Char('a')));
    handle_key(&mut app, press_key(KeyCode::Up));
    handle_key(&mut app, ctrl_key('x'));
    assert_eq!(current_count(&app), 0);
    assert!(!app.should_quit());
}

#[test]
fn quit_keys_request_quit() {
    for key in [
        press_key(KeyCode::Char('q')),
        press_key(KeyCode::Esc),
        ctrl_key('q'),
        ctrl_key('c'),
    ] {
        let mut app = make_app();
        handle_key(&mut app, key);
        assert!(app.should_quit(), "{key:?} should quit");
    }
}

#[test]
fn ctrl_r_recreates_view_with_zero_count() {
    let mut app = make_app();
    handle_key(&mut app, press_key(KeyCode::Enter));
    handle_key(&mut app, press_key(KeyCode::Enter));
    assert_eq!(app.generation(), Some(1));

    handle_key(&mut app, ctrl_key('r'));
    assert_eq!(app.generation(), Some(2));
    assert_eq!(current_count(&app), 0);
    assert_eq!(app.view().unwrap().render().label, "Clicked 0 times");
}

#[test]
fn bindings_resolve_from_keys() {
    assert_eq!(Binding::for_key(press_key(KeyCode::Enter)), Some(Binding::Activate));
    assert_eq!(Binding::for_key(press_key(KeyCode::Char(' '))), Some(Binding::Activate));
    assert_eq!(Binding::for_key(ctrl_key('r')), Some(Binding::Recreate));
    assert_eq!(Binding::for_key(press_key(KeyCode::Esc)), Some(Binding::Quit));
    assert_eq!(Binding::for_key(ctrl_key('c')), Some(Binding::Quit));
    assert_eq!(Binding::for_key(press_key(KeyCode::Char('r'))), None);
    assert_eq!(Binding::for_key(ctrl_key(' ')), None);
}

// -- Mouse -------------------------------------------------------------------

#[test]
fn click_inside_control_activates() {
    let mut app = make_app();
    let area = app.control_area().expect("control should be laid out");
    handle_mouse(&mut app, left_click(area.x, area.y));
    handle_mouse(
        &mut app,
        left_click(area.x + area.width - 1, area.y + area.height - 1),
    );
    assert_eq!(current_count(&app), 2);
}

#[test]
fn click_outside_control_is_ignored() {
    let mut app = make_app();
    let area = app.control_area().unwrap();
    handle_mouse(&mut app, left_click(area.x + area.width, area.y));
    handle_mouse(&mut app, left_click(0, 0));
    assert_eq!(current_count(&app), 0);
}

#[test]
fn right_click_and_release_are_ignored() {
    let mut app = make_app();
    let area = app.control_area().unwrap();
    for kind in [
        MouseEventKind::Down(MouseButton::Right),
        MouseEventKind::Up(MouseButton::Left),
        MouseEventKind::Moved,
    ] {
        handle_mouse(
            &mut app,
            MouseEvent {
                kind,
                column: area.x + 1,
                row: area.y + 1,
                modifiers: KeyModifiers::NONE,
            },
        );
    }
    assert_eq!(current_count(&app), 0);
}

#[test]
fn control_grows_with_label() {
    let mut app = make_app();
    let before = app.control_area().unwrap();
    for _ in 0..10 {
        app.activate();
    }
    let after = app.control_area().unwrap();
    assert_eq!(after.width, before.width + 1);
}

#[test]
fn no_control_before_size_is_known() {
    let mut app = App::new();
    app.create_view();
    assert!(app.control_area().is_none());
    handle_mouse(&mut app, left_click(10, 10));
    assert_eq!(current_count(&app), 0);
}

// -- Lifecycle ---------------------------------------------------------------

#[test]
fn activate_without_view_is_noop() {
    let mut app = App::new();
    app.activate();
    assert!(app.view().is_none());
    assert_eq!(app.generation(), None);
}

#[test]
fn destroy_then_create_starts_from_zero() {
    let mut app = make_app();
    app.activate();
    app.destroy_view();
    assert!(app.view().is_none());

    app.create_view();
    assert_eq!(current_count(&app), 0);
}

#[test]
fn redraw_requested_after_state_changes_only() {
    let mut app = make_app();
    assert!(app.take_redraw());
    assert!(!app.take_redraw());

    app.activate();
    assert!(app.take_redraw());
    assert!(!app.take_redraw());

    app.on_resize(100, 30);
    assert!(app.take_redraw());

    app.destroy_view();
    assert!(app.take_redraw());
}
