//! Application State — zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{BezierCurve, CurveError};
use crate::shared::{default_control_points, ViewerOptions};
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewState {
    /// Aktuelle Größe der Zeichenfläche in Pixel
    pub viewport_size: Vec2,
}

impl ViewState {
    pub fn new(viewport_size: Vec2) -> Self {
        Self { viewport_size }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Die animierte Kurve samt Kontrollpunkten und Markern
    pub curve: BezierCurve,
    /// View-State
    pub view: ViewState,
    /// Laufzeit-Optionen (Farben, Radien, Linienstärken)
    pub options: ViewerOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand mit der Standard-Szene für `viewport_size`.
    ///
    /// Overlay und Pause werden aus den Optionen übernommen.
    pub fn new(options: ViewerOptions, viewport_size: Vec2) -> Result<Self, CurveError> {
        let mut curve = BezierCurve::new(
            &default_control_points(viewport_size),
            options.curve_config(),
        )?;
        curve.set_interpolating(options.start_interpolating);
        if options.start_paused {
            curve.pause();
        }

        Ok(Self {
            curve,
            view: ViewState::new(viewport_size),
            options,
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
        })
    }

    /// Aktueller Kurvenparameter (für UI-Anzeige)
    pub fn t(&self) -> f32 {
        self.curve.t()
    }

    pub fn is_paused(&self) -> bool {
        self.curve.is_paused()
    }
}
