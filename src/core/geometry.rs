//! Geometrie-Hilfsfunktionen (lineare Interpolation, geschlossene Bézier-Form).

use glam::Vec2;

/// L(t) = (1-t)·A + t·B, komponentenweise für x und y.
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    (1.0 - t) * a + t * b
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
///
/// Referenzform zur De-Casteljau-Konstruktion; beide liefern denselben Kurvenpunkt.
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Achsparalleler Box-Test: |dx| ≤ r und |dy| ≤ r (Ränder inklusive).
pub fn in_square(center: Vec2, half_extent: f32, query: Vec2) -> bool {
    query.x >= center.x - half_extent
        && query.x <= center.x + half_extent
        && query.y >= center.y - half_extent
        && query.y <= center.y + half_extent
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let a = Vec2::new(0.0, 10.0);
        let b = Vec2::new(20.0, -10.0);

        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, 0.5), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_cubic_bezier_midpoint() {
        let mid = cubic_bezier(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 0.0),
            0.5,
        );
        assert_relative_eq!(mid.x, 50.0);
        assert_relative_eq!(mid.y, 75.0);
    }

    #[test]
    fn test_in_square_is_inclusive() {
        let c = Vec2::new(100.0, 100.0);
        assert!(in_square(c, 12.0, Vec2::new(112.0, 112.0)));
        assert!(in_square(c, 12.0, Vec2::new(88.0, 88.0)));
        assert!(!in_square(c, 12.0, Vec2::new(112.01, 100.0)));
        // Ecke der Box liegt außerhalb des Kreises, zählt aber als Treffer
        assert!(in_square(c, 12.0, Vec2::new(111.0, 111.0)));
    }
}
