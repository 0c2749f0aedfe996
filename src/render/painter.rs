//! egui-Implementierung der Zeichenfläche.

use super::{StrokeStyle, Surface};
use crate::core::PaletteColor;
use crate::shared::ViewerOptions;
use egui::epaint::CubicBezierShape;
use glam::Vec2;

/// Zeichnet über einen `egui::Painter` in ein Canvas-Rechteck.
///
/// Koordinaten werden um den Canvas-Ursprung verschoben, Farben über die
/// Palette der Optionen aufgelöst.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    options: &'a ViewerOptions,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2, options: &'a ViewerOptions) -> Self {
        Self {
            painter,
            origin,
            options,
        }
    }

    fn to_screen(&self, pos: Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(pos.x, pos.y)
    }

    fn color32(&self, color: PaletteColor) -> egui::Color32 {
        self.options.color32(color)
    }

    fn stroke(&self, stroke: StrokeStyle) -> egui::Stroke {
        egui::Stroke::new(stroke.width, self.color32(stroke.color))
    }
}

impl Surface for PainterSurface<'_> {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: PaletteColor) {
        self.painter
            .circle_filled(self.to_screen(center), radius, self.color32(color));
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: StrokeStyle) {
        if points.len() < 2 {
            return;
        }
        let screen: Vec<egui::Pos2> = points.iter().map(|&p| self.to_screen(p)).collect();
        self.painter.line(screen, self.stroke(stroke));
    }

    fn stroke_cubic(&mut self, points: [Vec2; 4], stroke: StrokeStyle) {
        let shape = CubicBezierShape::from_points_stroke(
            points.map(|p| self.to_screen(p)),
            false,
            egui::Color32::TRANSPARENT,
            self.stroke(stroke),
        );
        self.painter.add(shape);
    }

    fn fill_text(&mut self, pos: Vec2, text: &str, color: PaletteColor) {
        self.painter.text(
            self.to_screen(pos),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::monospace(self.options.label_font_size),
            self.color32(color),
        );
    }
}
