use crate::picker::PickerKey;

/// Intent resolved from a key press before it reaches the form. Keys that
/// map to nothing are treated as text editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    Picker(PickerKey),
    FocusNext,
    FocusPrev,
    Quit,
}
