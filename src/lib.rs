//! Casteljau Viewer Library.
//! Interaktive kubische Bézier-Kurve mit animierter De-Casteljau-Konstruktion,
//! als Library exportiert für Tests, Benchmarks und Fuzzing.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, ViewState};
pub use core::{
    BezierCurve, CanvasItem, ControlPointSpec, CurveConfig, CurveError, DraggablePoint,
    InteractionState, MarkerRole, PaletteColor, Point,
};
pub use render::{DrawCall, PainterSurface, RecordingSurface, StrokeStyle, Surface};
pub use shared::{default_control_points, ViewerOptions};
