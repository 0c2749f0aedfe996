//! Zeichenreihenfolge der Kurve.

use super::{BezierCurve, MarkerRole};
use crate::core::point::CanvasItem;
use crate::core::PaletteColor;
use crate::render::{StrokeStyle, Surface};

impl BezierCurve {
    /// Zeichnet die Szene in fester Z-Reihenfolge:
    /// Kurve, Kontrollpolygon, Kontrollpunkte und nur bei aktivem Overlay
    /// Q-Linie, R-Linie und alle Marker.
    pub fn draw(&self, surface: &mut dyn Surface) {
        let controls = self.control_positions();
        let config = &self.config;

        // Nativ von der Fläche, nicht aus den Markern nachgezeichnet
        surface.stroke_cubic(
            controls,
            StrokeStyle::new(PaletteColor::Curve, config.curve_width),
        );
        surface.stroke_polyline(
            &controls,
            StrokeStyle::new(PaletteColor::ControlPolygon, config.polygon_width),
        );

        for control_point in &self.control_points {
            control_point.draw(surface);
        }

        if !self.interpolating {
            return;
        }

        let q = [
            self.marker(MarkerRole::Q0).position,
            self.marker(MarkerRole::Q1).position,
            self.marker(MarkerRole::Q2).position,
        ];
        surface.stroke_polyline(
            &q,
            StrokeStyle::new(PaletteColor::FirstOrder, config.construction_width),
        );

        let r = [
            self.marker(MarkerRole::R0).position,
            self.marker(MarkerRole::R1).position,
        ];
        surface.stroke_polyline(
            &r,
            StrokeStyle::new(PaletteColor::SecondOrder, config.construction_width),
        );

        for marker in &self.markers {
            marker.draw(surface);
        }
    }
}
