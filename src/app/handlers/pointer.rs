//! Handler für Pointer-Events auf der Zeichenfläche.

use crate::app::AppState;
use crate::core::CurveError;
use glam::Vec2;

/// Greift den ersten Kontrollpunkt unter dem Pointer.
pub fn begin_drag(state: &mut AppState, pos: Vec2) {
    if let Some(index) = state.curve.pointer_down(pos) {
        log::debug!("Drag gestartet: P{} bei ({:.1}, {:.1})", index, pos.x, pos.y);
    }
}

/// Zieht den gegriffenen Punkt mit bzw. aktualisiert den Hover-Zustand.
pub fn update(state: &mut AppState, pos: Vec2) -> Result<(), CurveError> {
    state.curve.pointer_move(pos)
}

/// Beendet einen laufenden Drag an `pos`.
pub fn end_drag(state: &mut AppState, pos: Vec2) -> Result<(), CurveError> {
    if let Some(index) = state.curve.pointer_up(pos)? {
        log::debug!("Drag beendet: P{} bei ({:.1}, {:.1})", index, pos.x, pos.y);
    }
    Ok(())
}
