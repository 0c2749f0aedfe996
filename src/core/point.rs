//! Geometrischer Punkt mit Hit-Test und Zeichenvertrag.

use super::{geometry, CurveError, PaletteColor};
use crate::render::Surface;
use glam::Vec2;

/// Horizontaler Versatz der Beschriftung relativ zum Punktmittelpunkt.
pub const LABEL_OFFSET_X: f32 = -16.0;
/// Vertikaler Versatz der Beschriftung als Vielfaches des Radius.
pub const LABEL_OFFSET_RADIUS_FACTOR: f32 = -2.2;

/// Gemeinsame Fähigkeiten von Markern und Kontrollpunkten.
pub trait CanvasItem {
    /// Hit-Test gegen die achsparallele Box [x−r, x+r] × [y−r, y+r].
    fn contains(&self, pos: Vec2) -> bool;

    /// Zeichnet das Element auf die Fläche.
    fn draw(&self, surface: &mut dyn Surface);
}

/// Kreisförmiger Punkt mit optionaler Beschriftung.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Position in Flächenkoordinaten
    pub position: Vec2,
    radius: f32,
    color: PaletteColor,
    label: Option<String>,
}

impl Point {
    /// Erstellt einen Punkt ohne Beschriftung.
    ///
    /// Schlägt fehl, wenn `radius` nicht endlich oder ≤ 0 ist.
    pub fn new(position: Vec2, radius: f32, color: PaletteColor) -> Result<Self, CurveError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(CurveError::InvalidRadius { radius });
        }
        Ok(Self {
            position,
            radius,
            color,
            label: None,
        })
    }

    /// Setzt die Beschriftung. Leere Texte gelten als "keine Beschriftung".
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = if label.is_empty() { None } else { Some(label) };
        self
    }

    /// Gleicher Punkt mit anderer Farbe.
    pub(crate) fn recolored(mut self, color: PaletteColor) -> Self {
        self.color = color;
        self
    }

    /// Radius in Pixeln.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Farbe des Punkts.
    pub fn color(&self) -> PaletteColor {
        self.color
    }

    /// Beschriftung, falls vorhanden.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Position der Beschriftungs-Grundlinie.
    pub fn label_position(&self) -> Vec2 {
        self.position
            + Vec2::new(
                LABEL_OFFSET_X,
                LABEL_OFFSET_RADIUS_FACTOR * self.radius,
            )
    }

    /// Zeichnet den Punkt mit einer abweichenden Füllfarbe.
    pub(crate) fn draw_with_color(&self, surface: &mut dyn Surface, color: PaletteColor) {
        surface.fill_circle(self.position, self.radius, color);
        if let Some(label) = self.label() {
            surface.fill_text(self.label_position(), label, PaletteColor::Label);
        }
    }
}

impl CanvasItem for Point {
    fn contains(&self, pos: Vec2) -> bool {
        geometry::in_square(self.position, self.radius, pos)
    }

    fn draw(&self, surface: &mut dyn Surface) {
        self.draw_with_color(surface, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCall, RecordingSurface};

    fn point_at(x: f32, y: f32) -> Point {
        Point::new(Vec2::new(x, y), 12.0, PaletteColor::ControlIdle).expect("gültiger Radius")
    }

    #[test]
    fn test_contains_box_edges() {
        let p = point_at(100.0, 100.0);

        assert!(p.contains(Vec2::new(112.0, 100.0)));
        assert!(!p.contains(Vec2::new(113.0, 100.0)));
        assert!(p.contains(Vec2::new(88.0, 100.0)));
        assert!(p.contains(Vec2::new(100.0, 112.0)));
        assert!(p.contains(Vec2::new(100.0, 88.0)));
        assert!(!p.contains(Vec2::new(100.0, 87.9)));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        for radius in [0.0, -3.0, f32::NAN, f32::INFINITY] {
            let result = Point::new(Vec2::ZERO, radius, PaletteColor::FirstOrder);
            assert!(
                matches!(result, Err(CurveError::InvalidRadius { .. })),
                "Radius {radius} hätte abgelehnt werden müssen"
            );
        }
    }

    #[test]
    fn test_draw_without_label_emits_only_circle() {
        let p = Point::new(Vec2::new(5.0, 6.0), 3.0, PaletteColor::CurvePoint).unwrap();
        let mut surface = RecordingSurface::new();

        p.draw(&mut surface);

        assert_eq!(
            surface.calls(),
            &[DrawCall::Circle {
                center: Vec2::new(5.0, 6.0),
                radius: 3.0,
                color: PaletteColor::CurvePoint,
            }]
        );
    }

    #[test]
    fn test_draw_with_label_places_text_above_left() {
        let p = point_at(100.0, 100.0).with_label("P1");
        let mut surface = RecordingSurface::new();

        p.draw(&mut surface);

        assert_eq!(surface.calls().len(), 2);
        match &surface.calls()[1] {
            DrawCall::Text { pos, text, color } => {
                assert_eq!(text, "P1");
                assert_eq!(*color, PaletteColor::Label);
                approx::assert_relative_eq!(pos.x, 84.0);
                approx::assert_relative_eq!(pos.y, 100.0 - 2.2 * 12.0);
            }
            other => panic!("Text erwartet, erhalten: {other:?}"),
        }
    }

    #[test]
    fn test_empty_label_is_no_label() {
        let p = point_at(0.0, 0.0).with_label("");
        assert_eq!(p.label(), None);
    }
}
