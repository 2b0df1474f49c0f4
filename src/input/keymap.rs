use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::FormCommand;
use crate::picker::PickerKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Emacs,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "emacs" => Self::Emacs,
            _ => Self::Default,
        }
    }
}

/// Resolves a key press into a form command. `None` means the key belongs
/// to the focused input as text editing.
pub fn map_key_to_command(key: KeyEvent) -> Option<FormCommand> {
    map_key_to_command_with_preset(key, KeymapPreset::Default)
}

pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    preset: KeymapPreset,
) -> Option<FormCommand> {
    match preset {
        KeymapPreset::Default => map_key_default(key),
        KeymapPreset::Emacs => map_key_emacs(key),
    }
}

fn map_key_default(key: KeyEvent) -> Option<FormCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(FormCommand::Quit);
    }

    match key.code {
        KeyCode::Tab => Some(FormCommand::FocusNext),
        KeyCode::BackTab => Some(FormCommand::FocusPrev),
        _ => PickerKey::from_key_event(key).map(FormCommand::Picker),
    }
}

fn map_key_emacs(key: KeyEvent) -> Option<FormCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('n') => return Some(FormCommand::Picker(PickerKey::ArrowDown)),
            KeyCode::Char('p') => return Some(FormCommand::Picker(PickerKey::ArrowUp)),
            KeyCode::Char('g') => return Some(FormCommand::Picker(PickerKey::Escape)),
            KeyCode::Char('m') | KeyCode::Char('j') => {
                return Some(FormCommand::Picker(PickerKey::Enter));
            }
            _ => {}
        }
    }
    map_key_default(key)
}
