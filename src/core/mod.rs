//! Core-Domänentypen: Punkte, ziehbare Kontrollpunkte, Bézier-Kurve.

pub mod bezier;
pub mod draggable;
pub mod error;
pub mod geometry;
pub mod palette;
pub mod point;

pub use bezier::{BezierCurve, ControlPointSpec, CurveConfig, MarkerRole};
pub use draggable::{DraggablePoint, InteractionState};
pub use error::CurveError;
pub use palette::PaletteColor;
pub use point::{CanvasItem, Point};
