use crate::core::ControlPointSpec;
use crate::shared::ViewerOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Pointer-Down: ersten getroffenen Kontrollpunkt greifen
    BeginPointerDrag { pos: Vec2 },
    /// Pointer-Move: Drag fortsetzen bzw. Hover aktualisieren
    UpdatePointer { pos: Vec2 },
    /// Pointer-Up: letzte Verschiebung, Drag beenden
    EndPointerDrag { pos: Vec2 },
    /// Viewport-Größe im State aktualisieren
    SetViewportSize { size: Vec2 },
    /// Alle Kontrollpunkte ersetzen
    ReloadControlPoints { points: Vec<ControlPointSpec> },
    /// Overlay-Sichtbarkeit setzen
    SetInterpolating { enabled: bool },
    /// t einfrieren
    Pause,
    /// t fortschreiben
    Run,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen übernehmen und speichern
    ApplyOptions { options: Box<ViewerOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
