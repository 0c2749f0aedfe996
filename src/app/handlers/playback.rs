//! Handler für Overlay-Sichtbarkeit und Pause/Run.

use crate::app::AppState;

/// Blendet das Konstruktions-Overlay ein oder aus.
pub fn set_interpolating(state: &mut AppState, enabled: bool) {
    state.curve.set_interpolating(enabled);
    log::info!(
        "Interpolation {}",
        if enabled { "eingeblendet" } else { "ausgeblendet" }
    );
}

/// Friert t ein.
pub fn pause(state: &mut AppState) {
    state.curve.pause();
    log::info!("Animation pausiert bei t = {:.3}", state.curve.t());
}

/// Setzt die Animation fort.
pub fn run(state: &mut AppState) {
    state.curve.run();
    log::info!("Animation läuft ab t = {:.3}", state.curve.t());
}
