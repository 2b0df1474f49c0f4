use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

impl PickerKey {
    /// Keys every keymap preset hands to the picker.
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        match key.code {
            KeyCode::Down => Some(Self::ArrowDown),
            KeyCode::Up => Some(Self::ArrowUp),
            KeyCode::Enter => Some(Self::Enter),
            KeyCode::Esc => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Result of feeding a key to the picker. Anything other than `Ignored`
/// means the host must suppress the key's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Consumed,
    Selected,
}

impl KeyOutcome {
    pub fn is_consumed(self) -> bool {
        !matches!(self, Self::Ignored)
    }
}
