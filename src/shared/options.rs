//! Zentrale Konfiguration für den Casteljau-Viewer.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurveConfig, PaletteColor};
use serde::{Deserialize, Serialize};

// ── Punkte ──────────────────────────────────────────────────────────

/// Radius der Kontrollpunkte in Pixeln.
pub const CONTROL_RADIUS: f32 = 12.0;
/// Radius der Interpolationsmarker in Pixeln.
pub const MARKER_RADIUS: f32 = 3.0;
/// Schriftgröße der Kontrollpunkt-Beschriftung.
pub const LABEL_FONT_SIZE: f32 = 16.0;

// ── Animation ───────────────────────────────────────────────────────

/// Schritte pro Durchlauf von t (Schrittweite 1/200).
pub const TOTAL_STEPS: u32 = 200;

// ── Linien ──────────────────────────────────────────────────────────

/// Linienstärke der Kurve.
pub const CURVE_WIDTH: f32 = 3.0;
/// Linienstärke des Kontrollpolygons.
pub const POLYGON_WIDTH: f32 = 1.0;
/// Linienstärke der Konstruktionslinien (Q, R).
pub const CONSTRUCTION_WIDTH: f32 = 2.0;

// ── Palette (RGBA) ──────────────────────────────────────────────────

/// Kontrollpunkt im Leerlauf (Dunkelgrau).
pub const COLOR_CONTROL_IDLE: [f32; 4] = [0.25, 0.25, 0.25, 1.0];
/// Kontrollpunkt unter dem Pointer (Blau).
pub const COLOR_CONTROL_HOVER: [f32; 4] = [0.2, 0.5, 1.0, 1.0];
/// Gezogener Kontrollpunkt (Rot).
pub const COLOR_CONTROL_DRAG: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
/// Erste Interpolationsstufe Q (Grün).
pub const COLOR_FIRST_ORDER: [f32; 4] = [0.1, 0.7, 0.3, 1.0];
/// Zweite Interpolationsstufe R (Violett).
pub const COLOR_SECOND_ORDER: [f32; 4] = [0.6, 0.3, 0.9, 1.0];
/// Kurvenpunkt B (Orange).
pub const COLOR_CURVE_POINT: [f32; 4] = [1.0, 0.5, 0.0, 1.0];
/// Kurve (Schwarz).
pub const COLOR_CURVE: [f32; 4] = [0.05, 0.05, 0.05, 1.0];
/// Kontrollpolygon (Hellgrau).
pub const COLOR_CONTROL_POLYGON: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Beschriftung (Schwarz).
pub const COLOR_LABEL: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Hintergrund der Zeichenfläche (Weiß).
pub const COLOR_BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Viewer-Optionen.
/// Wird als `casteljau_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Radius der Kontrollpunkte
    pub control_radius: f32,
    /// Radius der Marker
    pub marker_radius: f32,
    /// Schriftgröße der Beschriftungen
    pub label_font_size: f32,

    // ── Animation ───────────────────────────────────────────────
    /// Schritte pro Durchlauf von t
    pub total_steps: u32,
    /// Overlay beim Start sichtbar
    pub start_interpolating: bool,
    /// Animation beim Start pausiert
    pub start_paused: bool,

    // ── Linien ──────────────────────────────────────────────────
    pub curve_width: f32,
    pub polygon_width: f32,
    pub construction_width: f32,

    // ── Palette ─────────────────────────────────────────────────
    pub color_control_idle: [f32; 4],
    pub color_control_hover: [f32; 4],
    pub color_control_drag: [f32; 4],
    pub color_first_order: [f32; 4],
    pub color_second_order: [f32; 4],
    pub color_curve_point: [f32; 4],
    pub color_curve: [f32; 4],
    pub color_control_polygon: [f32; 4],
    pub color_label: [f32; 4],
    pub color_background: [f32; 4],
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            control_radius: CONTROL_RADIUS,
            marker_radius: MARKER_RADIUS,
            label_font_size: LABEL_FONT_SIZE,

            total_steps: TOTAL_STEPS,
            start_interpolating: false,
            start_paused: false,

            curve_width: CURVE_WIDTH,
            polygon_width: POLYGON_WIDTH,
            construction_width: CONSTRUCTION_WIDTH,

            color_control_idle: COLOR_CONTROL_IDLE,
            color_control_hover: COLOR_CONTROL_HOVER,
            color_control_drag: COLOR_CONTROL_DRAG,
            color_first_order: COLOR_FIRST_ORDER,
            color_second_order: COLOR_SECOND_ORDER,
            color_curve_point: COLOR_CURVE_POINT,
            color_curve: COLOR_CURVE,
            color_control_polygon: COLOR_CONTROL_POLYGON,
            color_label: COLOR_LABEL,
            color_background: COLOR_BACKGROUND,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("casteljau-viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("casteljau_viewer.toml")
    }

    /// Kurvenparameter für eine neue Szene.
    pub fn curve_config(&self) -> CurveConfig {
        CurveConfig {
            control_radius: self.control_radius,
            marker_radius: self.marker_radius,
            total_steps: self.total_steps,
            curve_width: self.curve_width,
            polygon_width: self.polygon_width,
            construction_width: self.construction_width,
        }
    }

    /// RGBA-Wert eines Paletteneintrags.
    pub fn color(&self, color: PaletteColor) -> [f32; 4] {
        match color {
            PaletteColor::ControlIdle => self.color_control_idle,
            PaletteColor::ControlHover => self.color_control_hover,
            PaletteColor::ControlDrag => self.color_control_drag,
            PaletteColor::FirstOrder => self.color_first_order,
            PaletteColor::SecondOrder => self.color_second_order,
            PaletteColor::CurvePoint => self.color_curve_point,
            PaletteColor::Curve => self.color_curve,
            PaletteColor::ControlPolygon => self.color_control_polygon,
            PaletteColor::Label => self.color_label,
        }
    }

    /// Paletteneintrag als egui-Farbe.
    pub fn color32(&self, color: PaletteColor) -> egui::Color32 {
        to_color32(self.color(color))
    }

    /// Hintergrundfarbe der Zeichenfläche.
    pub fn background_color32(&self) -> egui::Color32 {
        to_color32(self.color_background)
    }
}

/// RGBA (0..1, sRGB) → `Color32`.
pub fn to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// `Color32` → RGBA (0..1, sRGB). Umkehrung von [`to_color32`].
pub fn from_color32(color: egui::Color32) -> [f32; 4] {
    color.to_srgba_unmultiplied().map(|c| c as f32 / 255.0)
}
