use crate::app::{AppCommand, AppIntent, AppState};
use crate::shared::ViewerOptions;
use glam::Vec2;

use super::map_intent_to_commands;

fn state() -> AppState {
    AppState::new(ViewerOptions::default(), Vec2::new(800.0, 600.0)).expect("Standard-Szene")
}

#[test]
fn resize_to_new_size_reloads_default_layout() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: Vec2::new(1600.0, 1200.0),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::SetViewportSize { size } if size.x == 1600.0));
    match &commands[1] {
        AppCommand::ReloadControlPoints { points } => {
            assert_eq!(points.len(), 4);
            assert_eq!(points[0].position, Vec2::new(200.0, 1000.0));
            assert_eq!(points[3].position, Vec2::new(1400.0, 1000.0));
        }
        other => panic!("Reload erwartet, erhalten: {other:?}"),
    }
}

#[test]
fn resize_to_same_size_emits_nothing() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: Vec2::new(800.0, 600.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn degenerate_resize_is_ignored() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: Vec2::new(0.0, 600.0),
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn toggle_playback_depends_on_pause_flag() {
    let mut state = state();

    let commands = map_intent_to_commands(&state, AppIntent::TogglePlaybackRequested);
    assert!(matches!(commands[..], [AppCommand::Pause]));

    state.curve.pause();
    let commands = map_intent_to_commands(&state, AppIntent::TogglePlaybackRequested);
    assert!(matches!(commands[..], [AppCommand::Run]));
}

#[test]
fn toggle_interpolation_inverts_overlay_flag() {
    let mut state = state();

    let commands = map_intent_to_commands(&state, AppIntent::ToggleInterpolationRequested);
    assert!(matches!(
        commands[..],
        [AppCommand::SetInterpolating { enabled: true }]
    ));

    state.curve.set_interpolating(true);
    let commands = map_intent_to_commands(&state, AppIntent::ToggleInterpolationRequested);
    assert!(matches!(
        commands[..],
        [AppCommand::SetInterpolating { enabled: false }]
    ));
}

#[test]
fn pointer_intents_map_one_to_one() {
    let state = state();
    let pos = Vec2::new(3.0, 4.0);

    let down = map_intent_to_commands(&state, AppIntent::PointerPressed { pos });
    let moved = map_intent_to_commands(&state, AppIntent::PointerMoved { pos });
    let up = map_intent_to_commands(&state, AppIntent::PointerReleased { pos });

    assert!(matches!(down[..], [AppCommand::BeginPointerDrag { .. }]));
    assert!(matches!(moved[..], [AppCommand::UpdatePointer { .. }]));
    assert!(matches!(up[..], [AppCommand::EndPointerDrag { .. }]));
}

#[test]
fn reset_scene_uses_current_viewport() {
    let state = state();

    let commands = map_intent_to_commands(&state, AppIntent::ResetSceneRequested);

    match &commands[..] {
        [AppCommand::ReloadControlPoints { points }] => {
            assert_eq!(points[0].position, Vec2::new(100.0, 500.0));
            assert_eq!(points[0].label, "P0");
        }
        other => panic!("Reload erwartet, erhalten: {other:?}"),
    }
}
