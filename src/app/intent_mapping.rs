//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::default_control_points;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { pos } => vec![AppCommand::BeginPointerDrag { pos }],
        AppIntent::PointerMoved { pos } => vec![AppCommand::UpdatePointer { pos }],
        AppIntent::PointerReleased { pos } => vec![AppCommand::EndPointerDrag { pos }],
        AppIntent::ViewportResized { size } => {
            // Minimierte oder noch nicht gelayoutete Fläche ignorieren
            if size.x <= 0.0 || size.y <= 0.0 {
                return Vec::new();
            }
            // Wird jeden Frame gemeldet: unveränderte Größe erzeugt keine Commands
            if size == state.view.viewport_size {
                return Vec::new();
            }
            vec![
                AppCommand::SetViewportSize { size },
                AppCommand::ReloadControlPoints {
                    points: default_control_points(size),
                },
            ]
        }
        AppIntent::ToggleInterpolationRequested => vec![AppCommand::SetInterpolating {
            enabled: !state.curve.is_interpolating(),
        }],
        AppIntent::TogglePlaybackRequested => {
            if state.curve.is_paused() {
                vec![AppCommand::Run]
            } else {
                vec![AppCommand::Pause]
            }
        }
        AppIntent::PauseRequested => vec![AppCommand::Pause],
        AppIntent::RunRequested => vec![AppCommand::Run],
        AppIntent::ResetSceneRequested => vec![AppCommand::ReloadControlPoints {
            points: default_control_points(state.view.viewport_size),
        }],
        AppIntent::OpenOptionsRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
