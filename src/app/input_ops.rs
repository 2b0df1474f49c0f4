use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};

use crate::form::FormAction;
use crate::input::map_key_to_command_with_preset;

use super::core::App;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct InputEventOutcome {
    pub(crate) redraw: bool,
    pub(crate) quit_requested: bool,
}

impl App {
    pub(crate) fn handle_input_event(&mut self, event: Event) -> InputEventOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                let action = match map_key_to_command_with_preset(key, self.keymap) {
                    Some(command) => self.form.handle_command(command),
                    None => self.form.handle_text_event(&Event::Key(key)),
                };
                self.apply_form_action(action)
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let action = self
                    .form
                    .handle_pointer(mouse.column, mouse.row, &self.regions);
                self.apply_form_action(action)
            }
            Event::Resize(_, _) => InputEventOutcome {
                redraw: true,
                quit_requested: false,
            },
            _ => InputEventOutcome::default(),
        }
    }

    fn apply_form_action(&mut self, action: FormAction) -> InputEventOutcome {
        match action {
            FormAction::Ignored => InputEventOutcome::default(),
            FormAction::Changed => {
                self.status.clear();
                InputEventOutcome {
                    redraw: true,
                    quit_requested: false,
                }
            }
            FormAction::Submitted(draft) => {
                self.status.set(format!(
                    "draft #{} recorded: {} with {} via {}",
                    self.form.drafts().len(),
                    draft.guest.name,
                    draft.supplier.name,
                    draft.airport.label()
                ));
                InputEventOutcome {
                    redraw: true,
                    quit_requested: false,
                }
            }
            FormAction::Rejected => {
                let count = self.form.errors().len();
                self.status.set(match count {
                    1 => "1 field needs attention".to_string(),
                    _ => format!("{count} fields need attention"),
                });
                InputEventOutcome {
                    redraw: true,
                    quit_requested: false,
                }
            }
            FormAction::Quit => InputEventOutcome {
                redraw: false,
                quit_requested: true,
            },
        }
    }
}
