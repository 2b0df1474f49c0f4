use std::sync::Arc;

use crossterm::event::Event;
use ratatui::layout::{Position, Rect};

use crate::command::FormCommand;
use crate::config::PickerConfig;
use crate::directory::{Airport, Directory, Guest, Supplier};
use crate::error::AppResult;
use crate::lookup::{CandidateSource, LookupOptions, RemotePicker};
use crate::picker::{
    BlurOutcome, ContainsMatcher, KeyOutcome, Picker, PickerKey, PickerOptions, PickerRegions,
    PointerOutcome, PointerTarget,
};

use super::field::{FormField, SuggestField, TextField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Guest,
    Supplier,
    Airport,
    Notes,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [Self::Guest, Self::Supplier, Self::Airport, Self::Notes];

    pub fn next(self) -> Self {
        match self {
            Self::Guest => Self::Supplier,
            Self::Supplier => Self::Airport,
            Self::Airport => Self::Notes,
            Self::Notes => Self::Guest,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Guest => Self::Notes,
            Self::Supplier => Self::Guest,
            Self::Airport => Self::Supplier,
            Self::Notes => Self::Airport,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub guest: Guest,
    pub supplier: Supplier,
    pub airport: Airport,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Ignored,
    Changed,
    Submitted(Box<BookingDraft>),
    Rejected,
    Quit,
}

/// Screen areas captured from the last drawn frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRegions {
    pub fields: Vec<(FieldId, Rect)>,
    pub picker: Option<PickerRegions>,
}

impl FormRegions {
    pub fn field_at(&self, column: u16, row: u16) -> Option<FieldId> {
        let position = Position::new(column, row);
        self.fields
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(id, _)| *id)
    }
}

pub struct BookingForm {
    guest: SuggestField<Guest, Picker<Guest>>,
    supplier: SuggestField<Supplier, Picker<Supplier>>,
    airport: SuggestField<Airport, RemotePicker<Airport>>,
    notes: TextField,
    focus: FieldId,
    errors: Vec<FieldError>,
    drafts: Vec<BookingDraft>,
}

impl BookingForm {
    pub fn new(directory: &Directory, config: &PickerConfig) -> AppResult<Self> {
        let airports = directory.airport_index(config.airport_max_results);
        Self::with_airport_source(directory, config, Arc::new(airports))
    }

    pub fn with_airport_source(
        directory: &Directory,
        config: &PickerConfig,
        airports: Arc<dyn CandidateSource<Airport>>,
    ) -> AppResult<Self> {
        let static_options = PickerOptions::default()
            .with_min_chars(config.min_chars)
            .with_max_results(config.static_cap());
        let airport_options = PickerOptions::default()
            .with_min_chars(config.min_chars)
            .with_max_results(Some(config.airport_max_results))
            .strict();
        let lookup = LookupOptions {
            max_results: Some(config.airport_max_results),
            cache_entries: config.lookup_cache_entries,
        };

        Ok(Self {
            guest: SuggestField::new(
                "Guest",
                Picker::with_matcher(
                    directory.guests.clone(),
                    ContainsMatcher,
                    static_options,
                ),
            ),
            supplier: SuggestField::new(
                "Supplier",
                Picker::with_matcher(
                    directory.suppliers.clone(),
                    ContainsMatcher,
                    static_options,
                ),
            ),
            airport: SuggestField::new(
                "Airport",
                RemotePicker::new(airports, airport_options, lookup)?,
            ),
            notes: TextField::new("Notes"),
            focus: FieldId::Guest,
            errors: Vec::new(),
            drafts: Vec::new(),
        })
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn error_for(&self, id: FieldId) -> Option<&str> {
        self.errors
            .iter()
            .find(|err| err.field == id)
            .map(|err| err.message.as_str())
    }

    pub fn drafts(&self) -> &[BookingDraft] {
        &self.drafts
    }

    pub fn field(&self, id: FieldId) -> &dyn FormField {
        match id {
            FieldId::Guest => &self.guest,
            FieldId::Supplier => &self.supplier,
            FieldId::Airport => &self.airport,
            FieldId::Notes => &self.notes,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut dyn FormField {
        match id {
            FieldId::Guest => &mut self.guest,
            FieldId::Supplier => &mut self.supplier,
            FieldId::Airport => &mut self.airport,
            FieldId::Notes => &mut self.notes,
        }
    }

    pub fn handle_command(&mut self, command: FormCommand) -> FormAction {
        match command {
            FormCommand::Quit => FormAction::Quit,
            FormCommand::FocusNext => self.set_focus(self.focus.next()),
            FormCommand::FocusPrev => self.set_focus(self.focus.prev()),
            FormCommand::Picker(key) => {
                let focus = self.focus;
                let outcome = self.field_mut(focus).picker_key(key);
                if outcome == KeyOutcome::Selected {
                    self.clear_error(focus);
                }
                if outcome.is_consumed() {
                    return FormAction::Changed;
                }
                match key {
                    PickerKey::Enter => self.submit(),
                    PickerKey::ArrowDown | PickerKey::ArrowUp | PickerKey::Escape => {
                        FormAction::Ignored
                    }
                }
            }
        }
    }

    pub fn handle_text_event(&mut self, event: &Event) -> FormAction {
        if self.field_mut(self.focus).edit(event) {
            FormAction::Changed
        } else {
            FormAction::Ignored
        }
    }

    /// Moves focus, blurring the field that loses it.
    pub fn set_focus(&mut self, id: FieldId) -> FormAction {
        if id == self.focus {
            return FormAction::Ignored;
        }
        let previous = self.focus;
        if self.field_mut(previous).blur() == BlurOutcome::Cleared {
            tracing::debug!(field = ?previous, "uncommitted value cleared on blur");
        }
        self.focus = id;
        FormAction::Changed
    }

    /// Pointer-down at a screen cell. The focused picker sees the event
    /// first; focus only moves once it did not land inside the panel.
    pub fn handle_pointer(&mut self, column: u16, row: u16, regions: &FormRegions) -> FormAction {
        let focus = self.focus;
        let target = regions
            .picker
            .map(|picker| picker.hit_test(column, row))
            .unwrap_or(PointerTarget::Outside);

        let target = match (target, regions.field_at(column, row)) {
            (PointerTarget::Outside, Some(id)) if id == focus => PointerTarget::Input,
            (target, _) => target,
        };

        match self.field_mut(focus).pointer_down(target) {
            PointerOutcome::Selected => {
                self.clear_error(focus);
                return FormAction::Changed;
            }
            PointerOutcome::Kept => {
                if matches!(target, PointerTarget::Row(_) | PointerTarget::Panel) {
                    return FormAction::Ignored;
                }
            }
            PointerOutcome::Dismissed => {}
        }

        match regions.field_at(column, row) {
            Some(id) => {
                self.set_focus(id);
                FormAction::Changed
            }
            None => FormAction::Changed,
        }
    }

    /// Applies background lookup results. Returns `true` if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for id in FieldId::ALL {
            changed |= self.field_mut(id).poll();
        }
        changed
    }

    pub fn submit(&mut self) -> FormAction {
        // Submitting counts as leaving the field.
        self.field_mut(self.focus).blur();

        match self.validate() {
            Ok(draft) => {
                tracing::info!(
                    guest = %draft.guest.name,
                    supplier = %draft.supplier.name,
                    airport = %draft.airport.code,
                    "booking draft recorded"
                );
                self.drafts.push(draft.clone());
                self.errors.clear();
                for id in FieldId::ALL {
                    self.field_mut(id).reset();
                }
                self.focus = FieldId::Guest;
                FormAction::Submitted(Box::new(draft))
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "booking rejected");
                self.errors = errors;
                FormAction::Rejected
            }
        }
    }

    fn validate(&self) -> Result<BookingDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let guest = required(&self.guest, FieldId::Guest, "guest", &mut errors);
        let supplier = required(&self.supplier, FieldId::Supplier, "supplier", &mut errors);
        let airport = required(&self.airport, FieldId::Airport, "airport", &mut errors);

        match (guest, supplier, airport) {
            (Some(guest), Some(supplier), Some(airport)) if errors.is_empty() => Ok(BookingDraft {
                guest: guest.clone(),
                supplier: supplier.clone(),
                airport: airport.clone(),
                notes: self.notes.value().trim().to_string(),
            }),
            _ => Err(errors),
        }
    }

    fn clear_error(&mut self, id: FieldId) {
        self.errors.retain(|err| err.field != id);
    }
}

fn required<'a, C, P>(
    field: &'a SuggestField<C, P>,
    id: FieldId,
    noun: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a C>
where
    C: crate::picker::Candidate + Clone,
    P: super::field::FieldPicker<C>,
{
    if let Some(selection) = field.selection() {
        return Some(selection);
    }
    let message = if field.value().trim().is_empty() {
        format!("{noun} is required")
    } else {
        format!("choose a {noun} from the suggestions")
    };
    errors.push(FieldError { field: id, message });
    None
}
