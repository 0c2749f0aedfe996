//! UI-Komponenten: Toolbar, Status-Bar, Input-Handling, Options-Dialog.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Jede Komponente liefert `AppIntent`s zurück, mutiert aber keinen State.
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;

/// Sammelt Tastatur-Shortcuts für den aktuellen Frame.
pub fn collect_keyboard_intents(
    ui: &egui::Ui,
    options_dialog_open: bool,
) -> Vec<crate::app::AppIntent> {
    keyboard::collect_keyboard_intents(ui, options_dialog_open)
}
