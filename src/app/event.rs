use crate::alerts::Snapshot;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The alert store published a new snapshot
    AlertsChanged(Snapshot),

    /// A data refresh settled, successfully or not
    RefreshFinished { outcome: Result<(), String> },

    /// Tick for UI refresh
    Tick,
}
