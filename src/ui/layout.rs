use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::form::FieldId;

pub const FIELD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLayout {
    pub form: Rect,
    pub fields: Vec<(FieldId, Rect)>,
    pub drafts: Rect,
    pub status: Rect,
}

pub fn split_layout(area: Rect) -> UiLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);
    let form = columns[0];

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); FieldId::ALL.len()];
    constraints.push(Constraint::Min(0));
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(form);
    let fields = FieldId::ALL
        .iter()
        .zip(slots.iter())
        .map(|(id, rect)| (*id, *rect))
        .collect();

    UiLayout {
        form,
        fields,
        drafts: columns[1],
        status: rows[1],
    }
}

/// Where the suggestion panel for `field` goes: directly below it when the
/// rows fit, otherwise above, clipped to `bounds` either way.
pub(crate) fn panel_rect(field: Rect, bounds: Rect, rows: usize) -> Rect {
    let wanted = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
    let bottom = bounds.y.saturating_add(bounds.height);
    let below = bottom.saturating_sub(field.y.saturating_add(field.height));
    let above = field.y.saturating_sub(bounds.y);

    if below >= wanted || below >= above {
        let height = wanted.min(below);
        Rect::new(field.x, field.y + field.height, field.width, height)
    } else {
        let height = wanted.min(above);
        Rect::new(field.x, field.y - height, field.width, height)
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use crate::form::FieldId;

    use super::{FIELD_HEIGHT, panel_rect, split_layout};

    #[test]
    fn split_layout_stacks_fields_and_reserves_status_bar() {
        let layout = split_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.status.y, 29);
        assert_eq!(layout.fields.len(), 4);
        assert_eq!(layout.fields[0].0, FieldId::Guest);
        assert_eq!(layout.fields[1].1.y, FIELD_HEIGHT);
        assert_eq!(layout.drafts.x, layout.form.width);
    }

    #[test]
    fn panel_opens_below_the_field_when_it_fits() {
        let bounds = Rect::new(0, 0, 60, 30);
        let panel = panel_rect(Rect::new(0, 3, 60, 3), bounds, 4);
        assert_eq!(panel, Rect::new(0, 6, 60, 6));
    }

    #[test]
    fn panel_flips_above_near_the_bottom() {
        let bounds = Rect::new(0, 0, 60, 20);
        let panel = panel_rect(Rect::new(0, 16, 60, 3), bounds, 6);
        assert_eq!(panel, Rect::new(0, 8, 60, 8));
    }
}
