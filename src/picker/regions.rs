use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Input,
    /// Index into the current matches.
    Row(usize),
    Panel,
    Outside,
}

/// Screen areas owned by one picker, captured when the frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickerRegions {
    pub input: Rect,
    pub panel: Option<Rect>,
    pub rows: Rect,
    pub first_row: usize,
    pub row_count: usize,
}

impl PickerRegions {
    pub fn input_only(input: Rect) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    pub fn hit_test(&self, column: u16, row: u16) -> PointerTarget {
        let position = Position::new(column, row);
        if let Some(panel) = self.panel
            && panel.contains(position)
        {
            if self.rows.contains(position) {
                let offset = usize::from(row - self.rows.y);
                if offset < self.row_count {
                    return PointerTarget::Row(self.first_row + offset);
                }
            }
            return PointerTarget::Panel;
        }
        if self.input.contains(position) {
            return PointerTarget::Input;
        }
        PointerTarget::Outside
    }
}
