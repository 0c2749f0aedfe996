//! Optionen-Dialog für Radien, Animation, Linien und Farben.

use crate::app::{AppIntent, AppState};
use crate::shared::options::{from_color32, to_color32};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(340.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(480.0)
                .show(ui, |ui| {
                    // ── Punkte ──────────────────────────────────────
                    ui.collapsing("Punkte", |ui| {
                        changed |= drag_value(
                            ui,
                            "Kontrollpunkt-Radius:",
                            &mut opts.control_radius,
                            2.0..=40.0,
                            0.5,
                        );
                        changed |= drag_value(
                            ui,
                            "Marker-Radius:",
                            &mut opts.marker_radius,
                            1.0..=20.0,
                            0.25,
                        );
                        changed |= drag_value(
                            ui,
                            "Schriftgröße:",
                            &mut opts.label_font_size,
                            8.0..=40.0,
                            0.5,
                        );
                    });

                    // ── Animation ───────────────────────────────────
                    ui.collapsing("Animation", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Schritte pro Durchlauf:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.total_steps)
                                        .range(1..=2000)
                                        .speed(1.0),
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(&mut opts.start_interpolating, "Overlay beim Start")
                            .changed();
                        changed |= ui
                            .checkbox(&mut opts.start_paused, "Pausiert starten")
                            .changed();
                    });

                    // ── Linien ──────────────────────────────────────
                    ui.collapsing("Linien", |ui| {
                        changed |= drag_value(ui, "Kurve:", &mut opts.curve_width, 0.5..=10.0, 0.1);
                        changed |= drag_value(
                            ui,
                            "Kontrollpolygon:",
                            &mut opts.polygon_width,
                            0.5..=10.0,
                            0.1,
                        );
                        changed |= drag_value(
                            ui,
                            "Konstruktion:",
                            &mut opts.construction_width,
                            0.5..=10.0,
                            0.1,
                        );
                    });

                    // ── Farben ──────────────────────────────────────
                    ui.collapsing("Farben", |ui| {
                        changed |= color_edit(ui, "Kontrollpunkt:", &mut opts.color_control_idle);
                        changed |= color_edit(ui, "Hover:", &mut opts.color_control_hover);
                        changed |= color_edit(ui, "Drag:", &mut opts.color_control_drag);
                        changed |= color_edit(ui, "Q (1. Stufe):", &mut opts.color_first_order);
                        changed |= color_edit(ui, "R (2. Stufe):", &mut opts.color_second_order);
                        changed |= color_edit(ui, "B (Kurvenpunkt):", &mut opts.color_curve_point);
                        changed |= color_edit(ui, "Kurve:", &mut opts.color_curve);
                        changed |= color_edit(
                            ui,
                            "Kontrollpolygon:",
                            &mut opts.color_control_polygon,
                        );
                        changed |= color_edit(ui, "Beschriftung:", &mut opts.color_label);
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.color_background);
                    });
                });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsRequested);
                }
            });
        });

    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Beschriftetes DragValue-Feld für f32-Werte.
fn drag_value(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Farbwähler für RGBA-Werte (0..1).
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = from_color32(c);
            changed = true;
        }
    });
    changed
}
