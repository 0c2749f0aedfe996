//! Zeichenflächen: Trait, egui-Painter und Aufzeichnung.

mod painter;
mod recording;
mod surface;

pub use painter::PainterSurface;
pub use recording::{DrawCall, RecordingSurface};
pub use surface::{StrokeStyle, Surface};
