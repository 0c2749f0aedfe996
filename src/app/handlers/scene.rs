//! Handler für Viewport-Größe und Kontrollpunkt-Szene.

use crate::app::AppState;
use crate::core::{BezierCurve, ControlPointSpec, CurveConfig, CurveError};
use glam::Vec2;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: Vec2) {
    log::debug!("Viewport: {:.0} × {:.0}", size.x, size.y);
    state.view.viewport_size = size;
}

/// Ersetzt alle Kontrollpunkte mit den Kurvenparametern der aktuellen Optionen.
pub fn reload(state: &mut AppState, points: &[ControlPointSpec]) -> Result<(), CurveError> {
    let config = state.options.curve_config();
    reload_with_config(state, points, config)
}

/// Ersetzt alle Kontrollpunkte mit den Kurvenparametern `config`.
///
/// Weicht `config` von der laufenden Kurve ab (Radien, Linienstärken,
/// Schrittzahl), wird die Kurve neu aufgebaut. Overlay, Pause und t bleiben
/// in beiden Fällen erhalten. Bei einem Fehler bleibt die Kurve unverändert.
pub fn reload_with_config(
    state: &mut AppState,
    points: &[ControlPointSpec],
    config: CurveConfig,
) -> Result<(), CurveError> {
    if *state.curve.config() == config {
        state.curve.reload(points)?;
    } else {
        state.curve = rebuild(&state.curve, points, config)?;
        log::info!(
            "Kurve neu aufgebaut (Radius {}, {} Schritte)",
            config.control_radius,
            state.curve.config().total_steps
        );
    }
    log::info!("Szene neu geladen: {} Kontrollpunkte", points.len());
    Ok(())
}

fn rebuild(
    previous: &BezierCurve,
    points: &[ControlPointSpec],
    config: CurveConfig,
) -> Result<BezierCurve, CurveError> {
    let mut curve = BezierCurve::new(points, config)?;
    curve.set_interpolating(previous.is_interpolating());
    if previous.is_paused() {
        curve.pause();
    }
    // t auf die neue Schrittweite abbilden
    let step = (previous.t() * curve.config().total_steps as f32).round() as u32;
    curve.seek_step(step);
    curve.recompute_markers();
    Ok(curve)
}
