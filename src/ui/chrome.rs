use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::form::BookingForm;

const HINTS: &str = "tab next · ↑↓ choose · enter select/submit · esc close · ctrl-c quit";

pub fn draw_chrome(frame: &mut Frame<'_>, area: Rect, form: &BookingForm, message: &str) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let focus = form.field(form.focus()).label();
    let message = if message.is_empty() { HINTS } else { message };
    let line = Line::from(vec![
        Span::styled(format!(" {focus} "), Style::default().fg(Color::Black).bg(Color::Cyan)),
        Span::raw(" "),
        Span::styled(message.to_string(), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
