//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Optionen und Standard-Szene, die zwischen `app`, `render` und `ui`
//! geteilt werden.

pub mod options;
pub mod scene;

pub use options::ViewerOptions;
pub use scene::default_control_points;
