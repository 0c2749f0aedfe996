//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("t = {:.3}", state.t()));

            ui.separator();

            ui.label(if state.is_paused() { "Paused" } else { "Running" });

            ui.separator();

            ui.label(format!(
                "Overlay: {}",
                if state.curve.is_interpolating() { "on" } else { "off" }
            ));

            if let Some(index) = state.curve.dragged_index() {
                ui.separator();
                ui.label(format!("Dragging P{}", index));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let size = state.view.viewport_size;
                ui.label(format!("{:.0} × {:.0}", size.x, size.y));
            });
        });
    });
}
