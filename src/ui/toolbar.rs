//! Toolbar für Overlay, Animation und Szene.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let paused = state.curve.is_paused();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let overlay_label = if state.curve.is_interpolating() {
                "Hide interpolation"
            } else {
                "Show interpolation"
            };
            if ui
                .button(overlay_label)
                .on_hover_text("Konstruktionslinien und Marker (I)")
                .clicked()
            {
                events.push(AppIntent::ToggleInterpolationRequested);
            }

            ui.separator();

            if ui
                .add_enabled(!paused, egui::Button::new("Pause"))
                .on_hover_text("t anhalten (Leertaste)")
                .clicked()
            {
                events.push(AppIntent::PauseRequested);
            }
            if ui
                .add_enabled(paused, egui::Button::new("Run"))
                .on_hover_text("t fortsetzen (Leertaste)")
                .clicked()
            {
                events.push(AppIntent::RunRequested);
            }

            ui.separator();

            if ui
                .button("Reset")
                .on_hover_text("Kontrollpunkte zurücksetzen (R)")
                .clicked()
            {
                events.push(AppIntent::ResetSceneRequested);
            }
            if ui.button("Options…").clicked() {
                events.push(AppIntent::OpenOptionsRequested);
            }
        });
    });

    events
}
