//! Handler für Dialog-State und Anwendungssteuerung.

use super::scene;
use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
///
/// Die Kurve wird zuerst mit den neuen Parametern an den aktuellen Positionen
/// aufgebaut; erst danach werden die Optionen übernommen. Ungültige Werte
/// lassen Optionen und Kurve unverändert.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) -> anyhow::Result<()> {
    let points = state.curve.control_point_specs();
    scene::reload_with_config(state, &points, options.curve_config())?;
    state.options = options;
    let path = ViewerOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, ViewerOptions::default())
}
