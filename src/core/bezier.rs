//! Kubische Bézier-Kurve mit De-Casteljau-Konstruktion.
//!
//! Aufgeteilt in:
//! - `interpolation` — Markerberechnung und Zeitparameter t
//! - `draw` — feste Zeichenreihenfolge
//! - `interaction` — Pointer-Zustandsmaschine (down / move / up)

mod draw;
mod interaction;
mod interpolation;

use super::{CurveError, DraggablePoint, PaletteColor, Point};
use glam::Vec2;

/// Anzahl der Kontrollpunkte einer kubischen Kurve.
pub const CONTROL_POINT_COUNT: usize = 4;
/// Anzahl der Interpolationsmarker (Q0..Q2, R0, R1, B).
pub const MARKER_COUNT: usize = 6;

/// Eingabe für einen Kontrollpunkt: Position plus optionale Beschriftung.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPointSpec {
    pub position: Vec2,
    pub label: String,
}

impl ControlPointSpec {
    /// Kontrollpunkt an (x, y) mit Beschriftung (leer = keine).
    pub fn new(x: f32, y: f32, label: impl Into<String>) -> Self {
        Self {
            position: Vec2::new(x, y),
            label: label.into(),
        }
    }
}

/// Feste Parameter einer Kurveninstanz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    /// Radius der Kontrollpunkte
    pub control_radius: f32,
    /// Radius der Interpolationsmarker
    pub marker_radius: f32,
    /// Schritte pro Durchlauf von t (Schrittweite = 1 / total_steps)
    pub total_steps: u32,
    /// Linienstärke der Kurve
    pub curve_width: f32,
    /// Linienstärke des Kontrollpolygons
    pub polygon_width: f32,
    /// Linienstärke der Konstruktionslinien (Q, R)
    pub construction_width: f32,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            control_radius: 12.0,
            marker_radius: 3.0,
            total_steps: 200,
            curve_width: 3.0,
            polygon_width: 1.0,
            construction_width: 2.0,
        }
    }
}

/// Semantische Rolle eines Markers. Der Index ist fest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    Q0,
    Q1,
    Q2,
    R0,
    R1,
    B,
}

impl MarkerRole {
    /// Alle Rollen in Indexreihenfolge.
    pub const ALL: [MarkerRole; MARKER_COUNT] = [
        MarkerRole::Q0,
        MarkerRole::Q1,
        MarkerRole::Q2,
        MarkerRole::R0,
        MarkerRole::R1,
        MarkerRole::B,
    ];

    /// Position in der Marker-Sequenz.
    pub fn index(self) -> usize {
        match self {
            MarkerRole::Q0 => 0,
            MarkerRole::Q1 => 1,
            MarkerRole::Q2 => 2,
            MarkerRole::R0 => 3,
            MarkerRole::R1 => 4,
            MarkerRole::B => 5,
        }
    }

    /// Farbe nach Interpolationsstufe.
    pub fn color(self) -> PaletteColor {
        match self {
            MarkerRole::Q0 | MarkerRole::Q1 | MarkerRole::Q2 => PaletteColor::FirstOrder,
            MarkerRole::R0 | MarkerRole::R1 => PaletteColor::SecondOrder,
            MarkerRole::B => PaletteColor::CurvePoint,
        }
    }

    /// Index des Kontrollpunkts, den der Marker vor dem ersten Frame spiegelt.
    fn initial_source(self) -> usize {
        match self {
            MarkerRole::Q0 | MarkerRole::R0 | MarkerRole::B => 0,
            MarkerRole::Q1 | MarkerRole::R1 => 1,
            MarkerRole::Q2 => 2,
        }
    }
}

/// Kurve aus vier Kontrollpunkten P0..P3 und sechs abgeleiteten Markern.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    control_points: [DraggablePoint; CONTROL_POINT_COUNT],
    markers: [Point; MARKER_COUNT],
    /// t = step / total_steps
    step: u32,
    config: CurveConfig,
    /// Höchstens ein Kontrollpunkt ist im Zustand `Dragging`
    any_dragging: bool,
    /// Konstruktions-Overlay sichtbar
    interpolating: bool,
    /// t eingefroren
    paused: bool,
}

impl BezierCurve {
    /// Baut die Kurve aus genau vier Kontrollpunkten.
    pub fn new(points: &[ControlPointSpec], config: CurveConfig) -> Result<Self, CurveError> {
        let config = CurveConfig {
            total_steps: config.total_steps.max(1),
            ..config
        };
        let control_points = build_control_points(points, config.control_radius)?;

        // Radius einmal validieren, dann pro Rolle umfärben und positionieren
        let template = Point::new(Vec2::ZERO, config.marker_radius, PaletteColor::CurvePoint)?;
        let markers = MarkerRole::ALL.map(|role| {
            let mut marker = template.clone().recolored(role.color());
            marker.position = control_points[role.initial_source()].position();
            marker
        });

        Ok(Self {
            control_points,
            markers,
            step: 0,
            config,
            any_dragging: false,
            interpolating: false,
            paused: false,
        })
    }

    /// Ersetzt alle Kontrollpunkte.
    ///
    /// t, Overlay- und Pause-Flag bleiben erhalten. Ein laufender Drag endet,
    /// die Marker werden sofort aus den neuen Punkten neu berechnet (ohne t zu erhöhen).
    pub fn reload(&mut self, points: &[ControlPointSpec]) -> Result<(), CurveError> {
        self.control_points = build_control_points(points, self.config.control_radius)?;
        self.any_dragging = false;
        self.recompute_markers();
        Ok(())
    }

    /// Kontrollpunkte P0..P3.
    pub fn control_points(&self) -> &[DraggablePoint; CONTROL_POINT_COUNT] {
        &self.control_points
    }

    /// Positionen der Kontrollpunkte.
    pub fn control_positions(&self) -> [Vec2; CONTROL_POINT_COUNT] {
        self.control_points.each_ref().map(DraggablePoint::position)
    }

    /// Aktuelle Kontrollpunkte als Eingabe für `new` / `reload`.
    pub fn control_point_specs(&self) -> Vec<ControlPointSpec> {
        self.control_points
            .iter()
            .map(|cp| ControlPointSpec {
                position: cp.position(),
                label: cp.shape().label().unwrap_or_default().to_owned(),
            })
            .collect()
    }

    /// Marker Q0, Q1, Q2, R0, R1, B.
    pub fn markers(&self) -> &[Point; MARKER_COUNT] {
        &self.markers
    }

    /// Marker einer bestimmten Rolle.
    pub fn marker(&self, role: MarkerRole) -> &Point {
        &self.markers[role.index()]
    }

    /// Kurvenparameter.
    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Wird gerade ein Kontrollpunkt gezogen?
    pub fn any_dragging(&self) -> bool {
        self.any_dragging
    }

    /// Index des gezogenen Kontrollpunkts.
    pub fn dragged_index(&self) -> Option<usize> {
        self.control_points.iter().position(DraggablePoint::is_dragging)
    }

    pub fn is_interpolating(&self) -> bool {
        self.interpolating
    }

    /// Blendet das Konstruktions-Overlay ein oder aus.
    pub fn set_interpolating(&mut self, enabled: bool) {
        self.interpolating = enabled;
    }
}

/// Baut genau vier Kontrollpunkte in Eingabereihenfolge.
fn build_control_points(
    points: &[ControlPointSpec],
    radius: f32,
) -> Result<[DraggablePoint; CONTROL_POINT_COUNT], CurveError> {
    let [p0, p1, p2, p3] = points else {
        return Err(CurveError::InvalidControlPointCount {
            expected: CONTROL_POINT_COUNT,
            actual: points.len(),
        });
    };
    Ok([
        DraggablePoint::new(p0.position, radius, &p0.label)?,
        DraggablePoint::new(p1.position, radius, &p1.label)?,
        DraggablePoint::new(p2.position, radius, &p2.label)?,
        DraggablePoint::new(p3.position, radius, &p3.label)?,
    ])
}
