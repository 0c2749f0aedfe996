//! Symbolische Farben des Kurvenmodells.
//!
//! Der Kern kennt keine konkreten RGBA-Werte. Die Auflösung in echte Farben
//! passiert erst beim Zeichnen über die `ViewerOptions`.

/// Symbolischer Farbwert für Punkte, Linien und Text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    /// Kontrollpunkt im Leerlauf
    ControlIdle,
    /// Kontrollpunkt unter dem Mauszeiger
    ControlHover,
    /// Kontrollpunkt wird gezogen
    ControlDrag,
    /// Erste Interpolationsstufe (Q0..Q2) und deren Verbindungslinie
    FirstOrder,
    /// Zweite Interpolationsstufe (R0, R1) und deren Verbindungslinie
    SecondOrder,
    /// Punkt auf der Kurve (B)
    CurvePoint,
    /// Die Bézier-Kurve selbst
    Curve,
    /// Kontrollpolygon P0–P1–P2–P3
    ControlPolygon,
    /// Beschriftungen
    Label,
}
