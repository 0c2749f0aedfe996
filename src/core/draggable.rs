//! Ziehbarer Kontrollpunkt: Punktgeometrie plus Interaktionszustand.

use super::point::{CanvasItem, Point};
use super::{CurveError, PaletteColor};
use crate::render::Surface;
use glam::Vec2;

/// Interaktionszustand eines Kontrollpunkts.
///
/// Einzige Quelle der Wahrheit; die Farbe wird daraus abgeleitet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovering,
    Dragging,
}

impl InteractionState {
    /// Farb-Lookup pro Zustand.
    pub fn color(self) -> PaletteColor {
        match self {
            InteractionState::Idle => PaletteColor::ControlIdle,
            InteractionState::Hovering => PaletteColor::ControlHover,
            InteractionState::Dragging => PaletteColor::ControlDrag,
        }
    }
}

/// Kontrollpunkt der Kurve.
///
/// Gegenseitiger Ausschluss beim Ziehen wird NICHT hier erzwungen,
/// sondern vom Aufrufer (`BezierCurve::pointer_down`).
#[derive(Debug, Clone, PartialEq)]
pub struct DraggablePoint {
    shape: Point,
    state: InteractionState,
}

impl DraggablePoint {
    /// Erstellt einen Kontrollpunkt im Leerlauf.
    pub fn new(position: Vec2, radius: f32, label: &str) -> Result<Self, CurveError> {
        let shape = Point::new(position, radius, PaletteColor::ControlIdle)?.with_label(label);
        Ok(Self {
            shape,
            state: InteractionState::Idle,
        })
    }

    /// Aktuelle Position.
    pub fn position(&self) -> Vec2 {
        self.shape.position
    }

    /// Zugrunde liegende Punktgeometrie.
    pub fn shape(&self) -> &Point {
        &self.shape
    }

    /// Aktueller Interaktionszustand.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Aus dem Zustand abgeleitete Farbe.
    pub fn color(&self) -> PaletteColor {
        self.state.color()
    }

    pub fn is_dragging(&self) -> bool {
        self.state == InteractionState::Dragging
    }

    pub fn hover(&mut self) {
        self.state = InteractionState::Hovering;
    }

    pub fn drag(&mut self) {
        self.state = InteractionState::Dragging;
    }

    pub fn reset_to_idle(&mut self) {
        self.state = InteractionState::Idle;
    }

    /// Überschreibt die Position. Nur im Zustand `Dragging` erlaubt.
    pub fn move_to(&mut self, pos: Vec2) -> Result<(), CurveError> {
        if !self.is_dragging() {
            return Err(CurveError::PointNotDragging);
        }
        self.shape.position = pos;
        Ok(())
    }
}

impl CanvasItem for DraggablePoint {
    fn contains(&self, pos: Vec2) -> bool {
        self.shape.contains(pos)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.shape.draw_with_color(surface, self.color());
    }
}
