//! Fehlertypen des Kurven-Kerns.

use thiserror::Error;

/// Verletzte Vorbedingungen im Kurvenmodell.
///
/// Alle übrigen Operationen (Hit-Test, Interpolation, Zeichnen) sind total
/// und können nicht fehlschlagen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// Die Kurve ist nur für genau vier Kontrollpunkte (kubisch) definiert.
    #[error("kubische Kurve benötigt {expected} Kontrollpunkte, erhalten: {actual}")]
    InvalidControlPointCount { expected: usize, actual: usize },
    /// Punktradius muss endlich und > 0 sein.
    #[error("ungültiger Punktradius: {radius}")]
    InvalidRadius { radius: f32 },
    /// `move_to` auf einem Punkt, der nicht gezogen wird.
    #[error("Punkt wird nicht gezogen, Verschieben nicht erlaubt")]
    PointNotDragging,
}
