//! Begrenztes Command-Log für Diagnose und Tests.
//!
//! Pointer-Bewegungen kommen in dichter Folge; aufeinanderfolgende
//! `UpdatePointer` werden zu einem Eintrag mit der letzten Position
//! zusammengefasst, damit sie Drag-, Szenen- und Dialog-Commands nicht
//! aus dem Log verdrängen.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    /// Anzahl der seit dem letzten Eintrag zusammengefassten Pointer-Bewegungen
    coalesced_moves: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen ausgeführten Command hinzu.
    ///
    /// Folgt ein `UpdatePointer` direkt auf ein `UpdatePointer`, wird der
    /// letzte Eintrag ersetzt. Bei Überlauf wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        if let (
            AppCommand::UpdatePointer { pos },
            Some(AppCommand::UpdatePointer { pos: last }),
        ) = (command, self.entries.last_mut())
        {
            *last = *pos;
            self.coalesced_moves += 1;
            return;
        }

        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
        self.coalesced_moves = 0;
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }

    /// Wie viele Pointer-Bewegungen im letzten Eintrag zusammengefasst wurden.
    pub fn coalesced_moves(&self) -> usize {
        self.coalesced_moves
    }
}
