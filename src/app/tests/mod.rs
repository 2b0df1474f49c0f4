mod config_init;
mod terminal_surface;

use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;
use crate::form::FieldId;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn ctrl(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.handle_input_event(key(KeyCode::Char(ch)));
    }
}

fn wait_for_suggestions(app: &mut App, id: FieldId) {
    let start = Instant::now();
    while app.form.field(id).suggestions().is_none() {
        app.form.poll();
        assert!(
            start.elapsed() <= Duration::from_secs(3),
            "timed out waiting for suggestions"
        );
        thread::sleep(Duration::from_millis(10));
    }
}
