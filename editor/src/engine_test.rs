#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::{CURSOR_ADD, CURSOR_PAN, CURSOR_PANNING};

// =============================================================
// Helpers
// =============================================================

/// Core with an 800x600 container and a 400x300 image: base scale 2.0,
/// image exactly filling the container at fit.
fn ready_core() -> EditorCore {
    core_with(800.0, 600.0, 400.0, 300.0)
}

fn core_with(cw: f64, ch: f64, iw: f64, ih: f64) -> EditorCore {
    let mut core = EditorCore::new();
    core.set_container(cw, ch);
    core.set_image_size(iw, ih);
    core
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn has_render_needed(actions: &[Action]) -> bool {
    actions.iter().any(|a| matches!(a, Action::RenderNeeded))
}

fn has_cursor(actions: &[Action], cursor: &str) -> bool {
    actions.iter().any(|a| matches!(a, Action::SetCursor(c) if *c == cursor))
}

fn scale(core: &EditorCore) -> f64 {
    core.view().map_or(0.0, |v| v.scale)
}

// =============================================================
// View lifecycle
// =============================================================

#[test]
fn no_view_until_both_extents_are_known() {
    let mut core = EditorCore::new();
    assert!(core.view().is_none());
    core.set_container(800.0, 600.0);
    assert!(core.view().is_none());
    core.set_image_size(400.0, 300.0);
    assert!(core.view().is_some());
}

#[test]
fn zero_sized_image_never_fits() {
    let mut core = EditorCore::new();
    core.set_container(800.0, 600.0);
    core.set_image_size(0.0, 0.0);
    assert!(core.view().is_none());
}

#[test]
fn fit_produces_base_scale() {
    let core = ready_core();
    let view = core.view().map(|v| (v.scale, v.base_scale));
    assert_eq!(view, Some((2.0, 2.0)));
}

#[test]
fn container_resize_refits_and_resets_zoom() {
    let mut core = ready_core();
    core.zoom_in();
    assert!(scale(&core) > 2.0);
    core.set_container(400.0, 300.0);
    assert_eq!(scale(&core), 1.0);
}

#[test]
fn unchanged_container_does_not_reset_the_view() {
    let mut core = ready_core();
    core.zoom_in();
    let zoomed = scale(&core);
    core.set_container(800.0, 600.0);
    assert_eq!(scale(&core), zoomed);
}

// =============================================================
// Mode switching
// =============================================================

#[test]
fn default_mode_is_add() {
    assert_eq!(ready_core().mode, Mode::Add);
}

#[test]
fn set_mode_updates_cursor() {
    let mut core = ready_core();
    assert!(has_cursor(&core.set_mode(Mode::Pan), CURSOR_PAN));
    assert!(has_cursor(&core.set_mode(Mode::Add), CURSOR_ADD));
}

#[test]
fn set_mode_leaves_path_and_view_alone() {
    let mut core = ready_core();
    core.on_pointer_up(pt(100.0, 60.0), Button::Primary);
    core.zoom_in();
    let before = (core.path.len(), scale(&core));
    core.set_mode(Mode::Pan);
    core.set_mode(Mode::Add);
    assert_eq!((core.path.len(), scale(&core)), before);
}

// =============================================================
// Adding points
// =============================================================

#[test]
fn click_in_add_mode_places_an_image_space_point() {
    let mut core = ready_core();
    let actions = core.on_pointer_up(pt(100.0, 60.0), Button::Primary);
    assert!(has_render_needed(&actions));
    assert_eq!(core.path.points(), &[pt(50.0, 30.0)]);
}

#[test]
fn click_outside_the_image_is_ignored() {
    // 200x300 image fits height-first: scaled extent 400x600, x offset 200.
    let mut core = core_with(800.0, 600.0, 200.0, 300.0);
    let actions = core.on_pointer_up(pt(100.0, 50.0), Button::Primary);
    assert!(actions.is_empty());
    assert!(core.path.is_empty());

    let actions = core.on_pointer_up(pt(300.0, 50.0), Button::Primary);
    assert!(has_render_needed(&actions));
    assert_eq!(core.path.points(), &[pt(50.0, 25.0)]);
}

#[test]
fn click_before_the_image_is_ready_is_ignored() {
    let mut core = EditorCore::new();
    core.set_container(800.0, 600.0);
    let actions = core.on_pointer_up(pt(100.0, 100.0), Button::Primary);
    assert!(actions.is_empty());
    assert!(core.path.is_empty());
}

#[test]
fn secondary_button_does_not_place_points() {
    let mut core = ready_core();
    let actions = core.on_pointer_up(pt(100.0, 60.0), Button::Secondary);
    assert!(actions.is_empty());
    assert!(core.path.is_empty());
}

#[test]
fn placed_points_account_for_zoom_and_pan() {
    let mut core = ready_core();
    core.zoom_in();
    core.set_mode(Mode::Pan);
    core.on_pointer_down(pt(400.0, 300.0), Button::Primary);
    core.on_pointer_move(pt(390.0, 295.0));
    core.on_pointer_up(pt(390.0, 295.0), Button::Primary);
    core.set_mode(Mode::Add);

    let screen = pt(400.0, 300.0);
    core.on_pointer_up(screen, Button::Primary);
    let placed = core.path.points()[0];
    let round_trip = core.view().map(|v| v.image_to_screen(placed));
    let Some(back) = round_trip else {
        unreachable!("view exists after setup");
    };
    assert!((back.x - screen.x).abs() < 1e-9);
    assert!((back.y - screen.y).abs() < 1e-9);
}

// =============================================================
// Panning
// =============================================================

#[test]
fn pointer_down_in_pan_mode_starts_a_drag() {
    let mut core = ready_core();
    core.set_mode(Mode::Pan);
    let actions = core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    assert!(has_cursor(&actions, CURSOR_PANNING));
    assert!(matches!(core.input, InputState::Panning { .. }));
}

#[test]
fn pointer_down_in_add_mode_does_not_drag() {
    let mut core = ready_core();
    let actions = core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    assert!(actions.is_empty());
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn drag_moves_the_view_by_the_pointer_delta() {
    let mut core = ready_core();
    core.zoom_in();
    let start_x = core.view().map_or(0.0, |v| v.offset_x);
    core.set_mode(Mode::Pan);
    core.on_pointer_down(pt(400.0, 300.0), Button::Primary);
    let actions = core.on_pointer_move(pt(390.0, 300.0));
    assert!(has_render_needed(&actions));
    let end_x = core.view().map_or(0.0, |v| v.offset_x);
    assert_eq!(end_x, start_x - 10.0);
}

#[test]
fn move_without_a_drag_is_a_no_op() {
    let mut core = ready_core();
    assert!(core.on_pointer_move(pt(10.0, 10.0)).is_empty());
}

#[test]
fn pointer_up_ends_the_drag_and_restores_the_mode_cursor() {
    let mut core = ready_core();
    core.set_mode(Mode::Pan);
    core.on_pointer_down(pt(10.0, 10.0), Button::Primary);
    let actions = core.on_pointer_up(pt(20.0, 20.0), Button::Primary);
    assert!(has_cursor(&actions, CURSOR_PAN));
    assert!(matches!(core.input, InputState::Idle));
}

#[test]
fn releasing_a_drag_never_places_a_point() {
    let mut core = ready_core();
    core.set_mode(Mode::Pan);
    core.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    core.on_pointer_move(pt(110.0, 100.0));
    // Mode flips mid-drag; the release must still only end the drag.
    core.set_mode(Mode::Add);
    core.on_pointer_up(pt(110.0, 100.0), Button::Primary);
    assert!(core.path.is_empty());
}

// =============================================================
// Zoom commands
// =============================================================

#[test]
fn zoom_in_raises_scale_and_requests_a_render() {
    let mut core = ready_core();
    let actions = core.zoom_in();
    assert!(has_render_needed(&actions));
    assert_eq!(scale(&core), 2.2);
}

#[test]
fn zoom_out_at_fit_scale_is_rejected() {
    let mut core = ready_core();
    let actions = core.zoom_out();
    assert!(actions.is_empty());
    assert_eq!(scale(&core), 2.0);
}

#[test]
fn zoom_out_returns_to_fit_after_zoom_in() {
    let mut core = ready_core();
    core.zoom_in();
    let actions = core.zoom_out();
    assert!(has_render_needed(&actions));
    assert!((scale(&core) - 2.0).abs() < 1e-9);
}

#[test]
fn zoom_before_the_view_exists_is_ignored() {
    let mut core = EditorCore::new();
    assert!(core.zoom_in().is_empty());
    assert!(core.zoom_out().is_empty());
}

// =============================================================
// Undo / clear
// =============================================================

#[test]
fn undo_removes_the_last_point() {
    let mut core = ready_core();
    core.on_pointer_up(pt(100.0, 60.0), Button::Primary);
    core.on_pointer_up(pt(200.0, 60.0), Button::Primary);
    let actions = core.undo();
    assert!(has_render_needed(&actions));
    assert_eq!(core.path.len(), 1);
}

#[test]
fn undo_on_an_empty_path_does_nothing() {
    let mut core = ready_core();
    assert!(core.undo().is_empty());
    assert!(core.path.is_empty());
}

#[test]
fn clear_path_empties_and_renders_once() {
    let mut core = ready_core();
    core.on_pointer_up(pt(100.0, 60.0), Button::Primary);
    assert!(has_render_needed(&core.clear_path()));
    assert!(core.clear_path().is_empty());
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn ctrl_z_undoes() {
    let mut core = ready_core();
    core.on_pointer_up(pt(100.0, 60.0), Button::Primary);
    let mods = Modifiers { ctrl: true, ..Modifiers::default() };
    let actions = core.on_key_down(&Key("z".into()), mods);
    assert!(has_render_needed(&actions));
    assert!(core.path.is_empty());
}

#[test]
fn plain_z_does_not_undo() {
    let mut core = ready_core();
    core.on_pointer_up(pt(100.0, 60.0), Button::Primary);
    assert!(core.on_key_down(&Key("z".into()), Modifiers::default()).is_empty());
    assert_eq!(core.path.len(), 1);
}

#[test]
fn plus_and_minus_zoom() {
    let mut core = ready_core();
    core.on_key_down(&Key("+".into()), Modifiers::default());
    assert_eq!(scale(&core), 2.2);
    core.on_key_down(&Key("-".into()), Modifiers::default());
    assert!((scale(&core) - 2.0).abs() < 1e-9);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut core = ready_core();
    assert!(core.on_key_down(&Key("Escape".into()), Modifiers::default()).is_empty());
}

// =============================================================
// Dash animation
// =============================================================

#[test]
fn open_path_needs_no_animation() {
    let mut core = ready_core();
    core.on_pointer_up(pt(100.0, 60.0), Button::Primary);
    assert!(!core.needs_animation());
}

#[test]
fn closed_path_needs_animation() {
    let mut core = ready_core();
    core.on_pointer_up(pt(20.0, 20.0), Button::Primary);
    core.on_pointer_up(pt(120.0, 20.0), Button::Primary);
    core.on_pointer_up(pt(24.0, 24.0), Button::Primary);
    assert!(core.needs_animation());
}

#[test]
fn advance_dash_decrements_the_offset() {
    let mut core = ready_core();
    assert_eq!(core.dash_offset(), 0.0);
    core.advance_dash();
    core.advance_dash();
    assert_eq!(core.dash_offset(), -2.0);
}
