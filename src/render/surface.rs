//! Zeichenfläche als Trait: primitive Zeichenbefehle ohne versteckten Style-Zustand.

use crate::core::PaletteColor;
use glam::Vec2;

/// Linienstil für Polylinien und Kurven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Symbolische Linienfarbe
    pub color: PaletteColor,
    /// Linienstärke in Pixeln
    pub width: f32,
}

impl StrokeStyle {
    /// Erstellt einen Linienstil.
    pub fn new(color: PaletteColor, width: f32) -> Self {
        Self { color, width }
    }
}

/// Immediate-Mode-Zeichenfläche.
///
/// Koordinaten sind lokal zur Zeichenfläche (Ursprung oben links, y nach unten).
/// Jeder Aufruf bringt seinen Stil selbst mit.
pub trait Surface {
    /// Gefüllter Kreis.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: PaletteColor);

    /// Offene Polylinie durch alle `points` (move-to + wiederholtes line-to).
    fn stroke_polyline(&mut self, points: &[Vec2], stroke: StrokeStyle);

    /// Kubische Bézier-Kurve, nativ von der Fläche gerendert.
    fn stroke_cubic(&mut self, points: [Vec2; 4], stroke: StrokeStyle);

    /// Text in der festen Beschriftungsschrift; `pos` ist der linke Rand der Grundlinie.
    fn fill_text(&mut self, pos: Vec2, text: &str, color: PaletteColor);
}
