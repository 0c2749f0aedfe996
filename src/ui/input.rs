//! Pointer-Input der Zeichenfläche → AppIntent.

use crate::app::AppIntent;
use glam::Vec2;

/// Verwaltet den Pointer-Zustand zwischen zwei Frames.
#[derive(Debug, Default)]
pub struct InputState {
    /// Letzte gemeldete Pointer-Position (lokal zur Zeichenfläche)
    last_pointer: Option<Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Pointer-Events der Zeichenfläche und gibt AppIntents zurück.
    ///
    /// Reihenfolge pro Frame: Move, Press, Release. Ein Release außerhalb des
    /// Fensters wird an der letzten bekannten Position gemeldet.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let origin = response.rect.min;

        let (pressed, released, latest) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });

        let local = latest.map(|p| Vec2::new(p.x - origin.x, p.y - origin.y));

        if let Some(pos) = local {
            if self.last_pointer != Some(pos) {
                events.push(AppIntent::PointerMoved { pos });
                self.last_pointer = Some(pos);
            }
            if pressed && response.hovered() {
                events.push(AppIntent::PointerPressed { pos });
            }
        }

        if released {
            if let Some(pos) = local.or(self.last_pointer) {
                events.push(AppIntent::PointerReleased { pos });
            }
        }

        events
    }
}
