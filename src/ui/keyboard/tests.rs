use super::*;

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn collect_with_key_event(event: egui::Event, options_dialog_open: bool) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    raw_input.modifiers = match &event {
        egui::Event::Key { modifiers, .. } => *modifiers,
        _ => egui::Modifiers::default(),
    };
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, options_dialog_open);
        });
    });

    events
}

#[test]
fn test_i_toggles_interpolation() {
    let events = collect_with_key_event(
        key_event(egui::Key::I, egui::Modifiers::default()),
        false,
    );

    assert!(matches!(
        events[..],
        [AppIntent::ToggleInterpolationRequested]
    ));
}

#[test]
fn test_space_toggles_playback() {
    let events = collect_with_key_event(
        key_event(egui::Key::Space, egui::Modifiers::default()),
        false,
    );

    assert!(matches!(events[..], [AppIntent::TogglePlaybackRequested]));
}

#[test]
fn test_r_resets_scene() {
    let events = collect_with_key_event(
        key_event(egui::Key::R, egui::Modifiers::default()),
        false,
    );

    assert!(matches!(events[..], [AppIntent::ResetSceneRequested]));
}

#[test]
fn test_ctrl_q_exits_without_reset() {
    let events = collect_with_key_event(key_event(egui::Key::Q, egui::Modifiers::COMMAND), false);

    assert!(matches!(events[..], [AppIntent::ExitRequested]));
}

#[test]
fn test_escape_closes_only_open_dialog() {
    let closed = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        false,
    );
    let open = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        true,
    );

    assert!(closed.is_empty());
    assert!(matches!(open[..], [AppIntent::CloseOptionsRequested]));
}
