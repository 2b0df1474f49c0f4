use crossterm::event::KeyCode;

use crate::app::App;
use crate::config::Config;
use crate::directory::Directory;
use crate::form::FieldId;

use super::{ctrl, key, type_text};

#[test]
fn new_with_config_applies_min_chars() {
    let mut config = Config::default();
    config.picker.min_chars = 3;
    let mut app = App::new_with_config(&Directory::builtin(), config).expect("app init");

    type_text(&mut app, "ra");
    assert!(app.form.field(FieldId::Guest).suggestions().is_none());

    type_text(&mut app, "j");
    let view = app
        .form
        .field(FieldId::Guest)
        .suggestions()
        .expect("third character opens the panel");
    assert_eq!(view.items.len(), 1);
}

#[test]
fn new_with_config_applies_static_cap() {
    let mut config = Config::default();
    config.picker.max_results = 1;
    let mut app = App::new_with_config(&Directory::builtin(), config).expect("app init");

    type_text(&mut app, "ra");
    let view = app.form.field(FieldId::Guest).suggestions().expect("panel open");
    assert_eq!(view.items.len(), 1);
    assert_eq!(view.items[0].label, "Rajesh Kumar");
}

#[test]
fn emacs_keymap_closes_panel_with_ctrl_g() {
    let mut config = Config::default();
    config.keymap.preset = "emacs".to_string();
    let mut app = App::new_with_config(&Directory::builtin(), config).expect("app init");

    type_text(&mut app, "ra");
    app.handle_input_event(ctrl('n'));
    assert_eq!(
        app.form
            .field(FieldId::Guest)
            .suggestions()
            .and_then(|view| view.highlighted),
        Some(0)
    );

    let outcome = app.handle_input_event(ctrl('g'));
    assert!(outcome.redraw);
    assert!(app.form.field(FieldId::Guest).suggestions().is_none());

    app.handle_input_event(key(KeyCode::Backspace));
    assert_eq!(app.form.field(FieldId::Guest).value(), "r");
}
