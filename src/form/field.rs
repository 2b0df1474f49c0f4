use crossterm::event::Event;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::lookup::RemotePicker;
use crate::picker::{
    BlurOutcome, Candidate, KeyOutcome, MatchPredicate, Picker, PickerKey, PointerOutcome,
    PointerTarget, SuggestionState, SuggestionView,
};

/// The picker operations a form field drives, shared by static and
/// lookup-backed pickers.
pub trait FieldPicker<C> {
    fn query_changed(&mut self, text: &str);
    fn key(&mut self, key: PickerKey, on_select: &mut dyn FnMut(&C)) -> KeyOutcome;
    fn pointer_down(
        &mut self,
        target: PointerTarget,
        on_select: &mut dyn FnMut(&C),
    ) -> PointerOutcome;
    fn blur(&mut self, on_change: &mut dyn FnMut(&str)) -> BlurOutcome;
    fn suggestions(&self) -> &SuggestionState<C>;
    fn query(&self) -> &str;
    fn is_committed(&self) -> bool;
    fn reset(&mut self);
    fn poll(&mut self) -> bool {
        false
    }
}

impl<C, M> FieldPicker<C> for Picker<C, M>
where
    C: Candidate + Clone,
    M: MatchPredicate<C>,
{
    fn query_changed(&mut self, text: &str) {
        self.on_query_change(text);
    }

    fn key(&mut self, key: PickerKey, on_select: &mut dyn FnMut(&C)) -> KeyOutcome {
        self.on_key(key, |candidate| on_select(candidate))
    }

    fn pointer_down(
        &mut self,
        target: PointerTarget,
        on_select: &mut dyn FnMut(&C),
    ) -> PointerOutcome {
        self.on_pointer_down(target, |candidate| on_select(candidate))
    }

    fn blur(&mut self, on_change: &mut dyn FnMut(&str)) -> BlurOutcome {
        self.on_blur(|value| on_change(value))
    }

    fn suggestions(&self) -> &SuggestionState<C> {
        self.state()
    }

    fn query(&self) -> &str {
        Picker::query(self)
    }

    fn is_committed(&self) -> bool {
        Picker::is_committed(self)
    }

    fn reset(&mut self) {
        Picker::reset(self);
    }
}

impl<C> FieldPicker<C> for RemotePicker<C>
where
    C: Candidate + Clone + Send + 'static,
{
    fn query_changed(&mut self, text: &str) {
        self.on_query_change(text);
    }

    fn key(&mut self, key: PickerKey, on_select: &mut dyn FnMut(&C)) -> KeyOutcome {
        self.on_key(key, |candidate| on_select(candidate))
    }

    fn pointer_down(
        &mut self,
        target: PointerTarget,
        on_select: &mut dyn FnMut(&C),
    ) -> PointerOutcome {
        self.on_pointer_down(target, |candidate| on_select(candidate))
    }

    fn blur(&mut self, on_change: &mut dyn FnMut(&str)) -> BlurOutcome {
        self.on_blur(|value| on_change(value))
    }

    fn suggestions(&self) -> &SuggestionState<C> {
        self.state()
    }

    fn query(&self) -> &str {
        RemotePicker::query(self)
    }

    fn is_committed(&self) -> bool {
        RemotePicker::is_committed(self)
    }

    fn reset(&mut self) {
        RemotePicker::reset(self);
    }

    fn poll(&mut self) -> bool {
        self.drain()
    }
}

/// Object-safe view of a form field for focus routing and rendering.
pub trait FormField {
    fn label(&self) -> &str;
    fn value(&self) -> &str;
    fn cursor(&self) -> usize;
    /// Applies a text-editing event. Returns `true` if the value changed.
    fn edit(&mut self, event: &Event) -> bool;
    fn is_committed(&self) -> bool;
    fn reset(&mut self);

    fn picker_key(&mut self, _key: PickerKey) -> KeyOutcome {
        KeyOutcome::Ignored
    }

    fn pointer_down(&mut self, target: PointerTarget) -> PointerOutcome {
        match target {
            PointerTarget::Outside => PointerOutcome::Dismissed,
            _ => PointerOutcome::Kept,
        }
    }

    fn blur(&mut self) -> BlurOutcome {
        BlurOutcome::Dismissed
    }

    fn poll(&mut self) -> bool {
        false
    }

    fn suggestions(&self) -> Option<SuggestionView> {
        None
    }
}

/// A text input backed by a suggestion picker. The selected candidate is
/// kept alongside the text it wrote.
pub struct SuggestField<C, P> {
    label: &'static str,
    input: Input,
    picker: P,
    selection: Option<C>,
}

impl<C, P> SuggestField<C, P>
where
    C: Candidate + Clone,
    P: FieldPicker<C>,
{
    pub fn new(label: &'static str, picker: P) -> Self {
        Self {
            label,
            input: Input::default(),
            picker,
            selection: None,
        }
    }

    pub fn picker(&self) -> &P {
        &self.picker
    }

    /// The selected candidate, as long as the text still matches it.
    pub fn selection(&self) -> Option<&C> {
        if self.picker.is_committed() {
            self.selection.as_ref()
        } else {
            None
        }
    }

    fn sync_input_from_picker(&mut self) {
        if self.input.value() != self.picker.query() {
            self.input = Input::new(self.picker.query().to_string());
        }
    }
}

impl<C, P> FormField for SuggestField<C, P>
where
    C: Candidate + Clone,
    P: FieldPicker<C>,
{
    fn label(&self) -> &str {
        self.label
    }

    fn value(&self) -> &str {
        self.input.value()
    }

    fn cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    fn edit(&mut self, event: &Event) -> bool {
        let before = self.input.value().to_string();
        self.input.handle_event(event);
        if self.input.value() == before {
            return false;
        }
        self.picker.query_changed(self.input.value());
        true
    }

    fn is_committed(&self) -> bool {
        self.selection().is_some()
    }

    fn reset(&mut self) {
        self.input.reset();
        self.picker.reset();
        self.selection = None;
    }

    fn picker_key(&mut self, key: PickerKey) -> KeyOutcome {
        let selection = &mut self.selection;
        let outcome = self
            .picker
            .key(key, &mut |candidate| *selection = Some(candidate.clone()));
        if outcome == KeyOutcome::Selected {
            self.sync_input_from_picker();
        }
        outcome
    }

    fn pointer_down(&mut self, target: PointerTarget) -> PointerOutcome {
        let selection = &mut self.selection;
        let outcome = self
            .picker
            .pointer_down(target, &mut |candidate| *selection = Some(candidate.clone()));
        if outcome == PointerOutcome::Selected {
            self.sync_input_from_picker();
        }
        outcome
    }

    fn blur(&mut self) -> BlurOutcome {
        let input = &mut self.input;
        let selection = &mut self.selection;
        self.picker.blur(&mut |value| {
            *input = Input::new(value.to_string());
            *selection = None;
        })
    }

    fn poll(&mut self) -> bool {
        self.picker.poll()
    }

    fn suggestions(&self) -> Option<SuggestionView> {
        SuggestionView::from_state(self.picker.suggestions())
    }
}

/// Plain free-text field.
pub struct TextField {
    label: &'static str,
    input: Input,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            input: Input::default(),
        }
    }
}

impl FormField for TextField {
    fn label(&self) -> &str {
        self.label
    }

    fn value(&self) -> &str {
        self.input.value()
    }

    fn cursor(&self) -> usize {
        self.input.visual_cursor()
    }

    fn edit(&mut self, event: &Event) -> bool {
        let before = self.input.value().to_string();
        self.input.handle_event(event);
        self.input.value() != before
    }

    fn is_committed(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.input.reset();
    }
}
