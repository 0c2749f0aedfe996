//! Aufzeichnende Zeichenfläche für Tests und Benchmarks.

use super::{StrokeStyle, Surface};
use crate::core::PaletteColor;
use glam::Vec2;

/// Ein aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Circle {
        center: Vec2,
        radius: f32,
        color: PaletteColor,
    },
    Polyline {
        points: Vec<Vec2>,
        stroke: StrokeStyle,
    },
    Cubic {
        points: [Vec2; 4],
        stroke: StrokeStyle,
    },
    Text {
        pos: Vec2,
        text: String,
        color: PaletteColor,
    },
}

/// Speichert alle Befehle in Aufrufreihenfolge (= Z-Reihenfolge).
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle bisher aufgezeichneten Befehle.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Anzahl gezeichneter Kreise.
    pub fn circle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
            .count()
    }

    /// Verwirft die Aufzeichnung (Kapazität bleibt erhalten).
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: PaletteColor) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], stroke: StrokeStyle) {
        self.calls.push(DrawCall::Polyline {
            points: points.to_vec(),
            stroke,
        });
    }

    fn stroke_cubic(&mut self, points: [Vec2; 4], stroke: StrokeStyle) {
        self.calls.push(DrawCall::Cubic { points, stroke });
    }

    fn fill_text(&mut self, pos: Vec2, text: &str, color: PaletteColor) {
        self.calls.push(DrawCall::Text {
            pos,
            text: text.to_owned(),
            color,
        });
    }
}
