use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::picker::{PickerRegions, SuggestionView};

use super::layout::panel_rect;

pub const MAX_PANEL_ROWS: usize = 8;

/// Draws the open suggestion panel for the field at `field` and reports
/// where its rows landed, for pointer hit-testing.
pub fn draw_suggestion_panel(
    frame: &mut Frame<'_>,
    field: Rect,
    bounds: Rect,
    view: &SuggestionView,
) -> PickerRegions {
    let wanted_rows = view.items.len().clamp(1, MAX_PANEL_ROWS);
    let panel = panel_rect(field, bounds, wanted_rows);
    if panel.width == 0 || panel.height == 0 {
        return PickerRegions::input_only(field);
    }
    frame.render_widget(Clear, panel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut regions = PickerRegions {
        input: field,
        panel: Some(panel),
        rows: Rect::new(inner.x, inner.y, inner.width, 0),
        first_row: 0,
        row_count: 0,
    };
    if inner.width == 0 || inner.height == 0 {
        return regions;
    }

    if view.is_empty() {
        let empty = Paragraph::new(Line::from(vec![
            Span::raw("   "),
            Span::styled("no matches", Style::default().fg(Color::DarkGray)),
        ]));
        frame.render_widget(empty, inner);
        return regions;
    }

    let max_items = inner.height as usize;
    let start_idx = scroll_start(view.items.len(), view.highlighted, max_items);
    let width = inner.width as usize;

    let mut lines = Vec::new();
    for item in view.items.iter().skip(start_idx).take(max_items) {
        let mut spans = Vec::new();
        if item.highlighted {
            spans.push(Span::styled(" ┃ ", Style::default().fg(Color::White)));
        } else {
            spans.push(Span::raw("   "));
        }

        let label = truncate_to_width(&item.label, width.saturating_sub(3));
        let mut used = 3 + label.width();
        spans.push(Span::raw(label));

        if let Some(detail) = &item.detail {
            let room = width.saturating_sub(used + 2);
            if room > 0 {
                let detail = truncate_to_width(detail, room);
                used += 2 + detail.width();
                spans.push(Span::raw("  "));
                spans.push(Span::styled(detail, Style::default().fg(Color::DarkGray)));
            }
        }

        // Pad so the highlight background spans the row.
        spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));

        let line_style = if item.highlighted {
            Style::default().bg(Color::Rgb(45, 45, 50))
        } else {
            Style::default()
        };
        lines.push(Line::from(spans).style(line_style));
    }

    let shown = lines.len();
    frame.render_widget(Paragraph::new(lines), inner);

    regions.rows.height = u16::try_from(shown).unwrap_or(inner.height);
    regions.first_row = start_idx;
    regions.row_count = shown;
    regions
}

/// First visible index so the highlighted row stays on screen.
fn scroll_start(len: usize, highlighted: Option<usize>, max_items: usize) -> usize {
    let Some(selected) = highlighted else {
        return 0;
    };
    if max_items == 0 || len <= max_items || selected < max_items / 2 {
        0
    } else if selected >= len - max_items / 2 {
        len.saturating_sub(max_items)
    } else {
        selected.saturating_sub(max_items / 2)
    }
}

fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w + 1 > width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push('…');
    out
}

/// Renders an input value with a software caret at display column
/// `cursor`, scrolled so the caret stays visible.
pub(crate) fn build_input_line(
    value: &str,
    cursor: Option<usize>,
    width: usize,
) -> Line<'static> {
    let graphemes: Vec<&str> = value.graphemes(true).collect();
    let count = graphemes.len();

    let Some(cursor) = cursor else {
        let text = truncate_to_width(value, width);
        return Line::from(Span::raw(format!(" {text}")));
    };

    let mut caret = count;
    let mut column = 0;
    for (idx, grapheme) in graphemes.iter().enumerate() {
        if column >= cursor {
            caret = idx;
            break;
        }
        column += grapheme.width();
    }

    let max_text_width = width.saturating_sub(1);
    let text_width = max_text_width.max(1);
    let start = if max_text_width == 0 {
        count
    } else if caret >= max_text_width {
        (caret + 1 - max_text_width).min(count)
    } else {
        0
    };
    let end = (start + text_width).min(count);

    let mut visible: Vec<&str> = graphemes[start..end].to_vec();
    if visible.len() < text_width {
        visible.extend(std::iter::repeat_n(" ", text_width - visible.len()));
    }
    let caret_idx = (caret - start.min(caret)).min(text_width.saturating_sub(1));

    let mut spans = vec![Span::raw(" ")];
    for (idx, grapheme) in visible.into_iter().enumerate() {
        if idx == caret_idx {
            spans.push(Span::styled(grapheme.to_string(), Style::default().reversed()));
        } else {
            spans.push(Span::raw(grapheme.to_string()));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::style::Modifier;

    use crate::picker::{SuggestionItemView, SuggestionView};

    use super::{build_input_line, draw_suggestion_panel, scroll_start, truncate_to_width};

    fn view(count: usize, highlighted: Option<usize>) -> SuggestionView {
        SuggestionView {
            items: (0..count)
                .map(|idx| SuggestionItemView {
                    label: format!("Guest {idx}"),
                    detail: Some("Golden Triangle".to_string()),
                    highlighted: highlighted == Some(idx),
                })
                .collect(),
            highlighted,
        }
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn caret_highlights_character_under_cursor() {
        let line = build_input_line("abc", Some(1), 12);
        assert_eq!(line.spans[2].content.as_ref(), "b");
        assert!(line.spans[2].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn caret_at_end_highlights_trailing_space() {
        let line = build_input_line("abc", Some(3), 12);
        assert_eq!(line.spans[4].content.as_ref(), " ");
        assert!(line.spans[4].style.add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn unfocused_input_has_no_caret() {
        let line = build_input_line("Rahul Singh", None, 20);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].content.as_ref(), " Rahul Singh");
    }

    #[test]
    fn scroll_keeps_highlight_visible() {
        assert_eq!(scroll_start(20, None, 5), 0);
        assert_eq!(scroll_start(20, Some(1), 5), 0);
        assert_eq!(scroll_start(20, Some(10), 5), 8);
        assert_eq!(scroll_start(20, Some(19), 5), 15);
    }

    #[test]
    fn truncation_respects_wide_characters() {
        assert_eq!(truncate_to_width("Malé", 10), "Malé");
        assert_eq!(truncate_to_width("東京国際空港", 5), "東京…");
    }

    #[test]
    fn panel_reports_row_regions_below_field() {
        let backend = TestBackend::new(40, 16);
        let mut terminal = Terminal::new(backend).expect("test terminal should initialize");
        let field = Rect::new(0, 0, 40, 3);
        let mut regions = None;
        terminal
            .draw(|frame| {
                let area = frame.area();
                regions = Some(draw_suggestion_panel(frame, field, area, &view(3, Some(1))));
            })
            .expect("draw should pass");

        let regions = regions.expect("regions should be reported");
        assert_eq!(regions.panel, Some(Rect::new(0, 3, 40, 5)));
        assert_eq!(regions.rows, Rect::new(1, 4, 38, 3));
        assert_eq!(regions.row_count, 3);
        assert!(row_text(&terminal, 5).contains("┃ Guest 1"));
    }

    #[test]
    fn empty_panel_says_no_matches() {
        let backend = TestBackend::new(30, 10);
        let mut terminal = Terminal::new(backend).expect("test terminal should initialize");
        let mut regions = None;
        terminal
            .draw(|frame| {
                let area = frame.area();
                regions = Some(draw_suggestion_panel(
                    frame,
                    Rect::new(0, 0, 30, 3),
                    area,
                    &view(0, None),
                ));
            })
            .expect("draw should pass");

        assert!(row_text(&terminal, 4).contains("no matches"));
        assert_eq!(regions.map(|r| r.row_count), Some(0));
    }
}
