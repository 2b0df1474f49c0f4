use crossterm::event::Event;

/// Everything the event loop wakes up for.
#[derive(Debug, Clone)]
pub enum DomainEvent {
    Input(Event),
    InputError(String),
    /// Time to apply finished background lookups.
    LookupTick,
}
