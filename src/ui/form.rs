use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::form::{BookingForm, FormField, FormRegions};
use crate::picker::PickerRegions;

use super::layout::UiLayout;
use super::overlay::{build_input_line, draw_suggestion_panel};

/// Draws the booking form and returns the regions pointer events are
/// resolved against until the next frame.
pub fn draw_form(frame: &mut Frame<'_>, layout: &UiLayout, form: &BookingForm) -> FormRegions {
    let focus = form.focus();
    let mut regions = FormRegions {
        fields: layout.fields.clone(),
        picker: None,
    };

    for (id, area) in &layout.fields {
        let focused = *id == focus;
        draw_field(frame, *area, form.field(*id), focused, form.error_for(*id));
    }

    draw_drafts(frame, layout.drafts, form);

    // The panel goes last so it overlaps the fields below the focused one.
    if let Some((_, area)) = layout.fields.iter().find(|(id, _)| *id == focus) {
        regions.picker = Some(match form.field(focus).suggestions() {
            Some(view) => draw_suggestion_panel(frame, *area, layout.form, &view),
            None => PickerRegions::input_only(*area),
        });
    }

    regions
}

fn draw_field(
    frame: &mut Frame<'_>,
    area: Rect,
    field: &dyn FormField,
    focused: bool,
    error: Option<&str>,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let border = match (focused, error) {
        (_, Some(_)) => Color::Red,
        (true, None) => Color::Cyan,
        (false, None) => Color::DarkGray,
    };
    let mut title = format!(" {} ", field.label());
    if field.is_committed() && !field.value().is_empty() {
        title.push_str("✓ ");
    }

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    let cursor = focused.then(|| field.cursor());
    let line = build_input_line(field.value(), cursor, inner.width as usize);
    frame.render_widget(Paragraph::new(line), inner);
}

fn draw_drafts(frame: &mut Frame<'_>, area: Rect, form: &BookingForm) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(format!(" Drafts ({}) ", form.drafts().len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line<'_>> = form
        .drafts()
        .iter()
        .rev()
        .map(|draft| {
            Line::from(vec![
                Span::raw(" "),
                Span::raw(draft.guest.name.as_str()),
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::raw(draft.supplier.name.as_str()),
                Span::styled(" · ", Style::default().fg(Color::DarkGray)),
                Span::raw(draft.airport.code.as_str()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
