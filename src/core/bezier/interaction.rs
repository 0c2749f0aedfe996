//! Pointer-Zustandsmaschine der Kontrollpunkte.
//!
//! Zustände pro Punkt: Idle, Hovering, Dragging. `any_dragging` sorgt auf
//! Kurvenebene dafür, dass höchstens ein Punkt gleichzeitig gezogen wird.

use super::BezierCurve;
use crate::core::point::CanvasItem;
use crate::core::CurveError;
use glam::Vec2;

impl BezierCurve {
    /// Pointer gedrückt: erster getroffener Kontrollpunkt wird gezogen.
    ///
    /// Gibt den Index des neu gezogenen Punkts zurück. Läuft bereits ein Drag,
    /// passiert nichts.
    pub fn pointer_down(&mut self, pos: Vec2) -> Option<usize> {
        for (index, control_point) in self.control_points.iter_mut().enumerate() {
            if !self.any_dragging && control_point.contains(pos) {
                control_point.drag();
                self.any_dragging = true;
                return Some(index);
            }
        }
        None
    }

    /// Pointer bewegt: gezogener Punkt folgt exakt, Hover nur ohne laufenden Drag.
    pub fn pointer_move(&mut self, pos: Vec2) -> Result<(), CurveError> {
        for control_point in &mut self.control_points {
            if control_point.is_dragging() {
                control_point.move_to(pos)?;
            } else if !self.any_dragging && control_point.contains(pos) {
                control_point.hover();
            } else {
                control_point.reset_to_idle();
            }
        }
        Ok(())
    }

    /// Pointer losgelassen: letzte Verschiebung, dann zurück in den Leerlauf.
    ///
    /// Gibt den Index des losgelassenen Punkts zurück.
    pub fn pointer_up(&mut self, pos: Vec2) -> Result<Option<usize>, CurveError> {
        let mut released = None;
        for (index, control_point) in self.control_points.iter_mut().enumerate() {
            if control_point.is_dragging() {
                control_point.move_to(pos)?;
                control_point.reset_to_idle();
                self.any_dragging = false;
                released = Some(index);
            }
        }
        Ok(released)
    }
}
