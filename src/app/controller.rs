//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::render::Surface;

/// Orchestriert UI-Events, Animationstakt und Zeichnen auf dem AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer ===
            AppCommand::BeginPointerDrag { pos } => handlers::pointer::begin_drag(state, pos),
            AppCommand::UpdatePointer { pos } => handlers::pointer::update(state, pos)?,
            AppCommand::EndPointerDrag { pos } => handlers::pointer::end_drag(state, pos)?,

            // === Szene & Viewport ===
            AppCommand::SetViewportSize { size } => {
                handlers::scene::set_viewport_size(state, size)
            }
            AppCommand::ReloadControlPoints { points } => {
                handlers::scene::reload(state, &points)?
            }

            // === Animation ===
            AppCommand::SetInterpolating { enabled } => {
                handlers::playback::set_interpolating(state, enabled)
            }
            AppCommand::Pause => handlers::playback::pause(state),
            AppCommand::Run => handlers::playback::run(state),

            // === Dialoge & Anwendung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Ein Animationstakt: Marker neu berechnen, t fortschreiben (außer pausiert).
    pub fn advance_frame(&mut self, state: &mut AppState) {
        state.curve.interpolate();
    }

    /// Zeichnet die aktuelle Szene auf `surface`.
    pub fn draw(&self, state: &AppState, surface: &mut dyn Surface) {
        state.curve.draw(surface);
    }
}
