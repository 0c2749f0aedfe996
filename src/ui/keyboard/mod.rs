//! Keyboard-Shortcuts für die Zeichenfläche.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Buchstaben- und Leertaste werden ignoriert, solange ein Eingabefeld
/// (z.B. im Options-Dialog) den Fokus hat.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, options_dialog_open: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, key_i, key_r, key_q, key_space, key_escape) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::I),
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Q),
            i.key_pressed(egui::Key::Space),
            i.key_pressed(egui::Key::Escape),
        )
    });

    if modifiers.command && key_q {
        events.push(AppIntent::ExitRequested);
    }

    if key_escape && options_dialog_open {
        events.push(AppIntent::CloseOptionsRequested);
    }

    if ui.ctx().wants_keyboard_input() || modifiers.command {
        return events;
    }

    if key_i {
        events.push(AppIntent::ToggleInterpolationRequested);
    }

    if key_space {
        events.push(AppIntent::TogglePlaybackRequested);
    }

    if key_r {
        events.push(AppIntent::ResetSceneRequested);
    }

    events
}

#[cfg(test)]
mod tests;
