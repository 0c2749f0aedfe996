use crate::shared::ViewerOptions;
use glam::Vec2;

/// App-Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Pointer-Positionen sind lokal zur Zeichenfläche.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Primäre Maustaste auf der Zeichenfläche gedrückt
    PointerPressed { pos: Vec2 },
    /// Pointer-Position hat sich geändert
    PointerMoved { pos: Vec2 },
    /// Primäre Maustaste losgelassen
    PointerReleased { pos: Vec2 },
    /// Größe der Zeichenfläche gemeldet (jeden Frame)
    ViewportResized { size: Vec2 },
    /// Konstruktions-Overlay ein-/ausblenden
    ToggleInterpolationRequested,
    /// Zwischen Pause und Lauf umschalten
    TogglePlaybackRequested,
    /// Animation anhalten
    PauseRequested,
    /// Animation fortsetzen
    RunRequested,
    /// Kontrollpunkte auf die Standard-Szene zurücksetzen
    ResetSceneRequested,
    /// Options-Dialog öffnen
    OpenOptionsRequested,
    /// Options-Dialog schließen
    CloseOptionsRequested,
    /// Optionen im Dialog geändert
    OptionsChanged { options: Box<ViewerOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
