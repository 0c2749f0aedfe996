//! Standard-Szene: Lage der Kontrollpunkte relativ zur Viewport-Größe.

use crate::core::ControlPointSpec;
use glam::Vec2;

/// Vier Kontrollpunkte als Bogen über den Viewport.
///
/// P0 = (w/8, 5h/6), P1 = (w/3, h/6), P2 = (2w/3, h/6), P3 = (7w/8, 5h/6)
pub fn default_control_points(viewport: Vec2) -> Vec<ControlPointSpec> {
    let (w, h) = (viewport.x, viewport.y);
    vec![
        ControlPointSpec::new(w / 8.0, 5.0 * h / 6.0, "P0"),
        ControlPointSpec::new(w / 3.0, h / 6.0, "P1"),
        ControlPointSpec::new(2.0 * w / 3.0, h / 6.0, "P2"),
        ControlPointSpec::new(7.0 * w / 8.0, 5.0 * h / 6.0, "P3"),
    ]
}
