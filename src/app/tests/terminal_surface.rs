use std::convert::Infallible;
use std::io;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::app::App;
use crate::config::Config;
use crate::directory::Directory;
use crate::form::FieldId;

use super::super::terminal_session::TerminalSurface;
use super::type_text;

struct TestTerminalSurface {
    terminal: Terminal<TestBackend>,
}

impl TestTerminalSurface {
    fn new(width: u16, height: u16) -> io::Result<Self> {
        let terminal = infallible_to_io(Terminal::new(TestBackend::new(width, height)))?;
        Ok(Self { terminal })
    }

    fn row(&self, y: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }
}

impl TerminalSurface for TestTerminalSurface {
    fn draw<F>(&mut self, render: F) -> io::Result<()>
    where
        F: FnOnce(&mut Frame<'_>),
    {
        infallible_to_io(self.terminal.draw(render)).map(|_| ())
    }
}

fn infallible_to_io<T>(result: Result<T, Infallible>) -> io::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => match err {},
    }
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn app() -> App {
    App::new_with_config(&Directory::builtin(), Config::default()).expect("app init")
}

#[test]
fn clicking_a_drawn_row_selects_it() {
    let mut session = TestTerminalSurface::new(80, 24).expect("test terminal should initialize");
    let mut app = app();
    type_text(&mut app, "ra");
    app.render_frame(&mut session).expect("frame should draw");
    assert!(session.row(5).contains("Rahul Singh"));

    let outcome = app.handle_input_event(click(6, 5));
    assert!(outcome.redraw);
    assert_eq!(app.form.field(FieldId::Guest).value(), "Rahul Singh");
    assert_eq!(app.form.focus(), FieldId::Guest);

    app.render_frame(&mut session).expect("frame should draw");
    assert!(session.row(0).contains("Guest ✓"));
}

#[test]
fn clicking_another_field_moves_focus_and_closes_panel() {
    let mut session = TestTerminalSurface::new(80, 24).expect("test terminal should initialize");
    let mut app = app();
    type_text(&mut app, "ra");
    app.render_frame(&mut session).expect("frame should draw");

    // Notes sits below the open panel.
    app.handle_input_event(click(6, 10));
    assert_eq!(app.form.focus(), FieldId::Notes);
    assert!(app.form.field(FieldId::Guest).suggestions().is_none());
    assert_eq!(app.form.field(FieldId::Guest).value(), "ra");
}

#[test]
fn status_bar_shows_focused_field_and_hints() {
    let mut session = TestTerminalSurface::new(100, 20).expect("test terminal should initialize");
    let mut app = app();
    app.render_frame(&mut session).expect("frame should draw");
    let status = session.row(19);
    assert!(status.contains("Guest"));
    assert!(status.contains("ctrl-c quit"));
}
