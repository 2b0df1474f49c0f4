/// What the suggestion panel shows. Derived from the query and the
/// candidate list; only [`super::Picker`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionState<C> {
    visible: bool,
    matches: Vec<C>,
    highlighted: Option<usize>,
}

impl<C> Default for SuggestionState<C> {
    fn default() -> Self {
        Self {
            visible: false,
            matches: Vec::new(),
            highlighted: None,
        }
    }
}

impl<C> SuggestionState<C> {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn matches(&self) -> &[C] {
        &self.matches
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Highlight as a signed index, `-1` meaning nothing is highlighted.
    pub fn highlighted_index(&self) -> isize {
        self.highlighted.map_or(-1, |idx| idx as isize)
    }

    pub fn highlighted_candidate(&self) -> Option<&C> {
        self.highlighted.and_then(|idx| self.matches.get(idx))
    }

    /// Visible with at least one match, i.e. keys are consumed.
    pub fn is_navigable(&self) -> bool {
        self.visible && !self.matches.is_empty()
    }

    pub(crate) fn show(&mut self, matches: Vec<C>) {
        self.visible = true;
        self.matches = matches;
        self.highlighted = None;
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
        self.highlighted = None;
    }

    pub(crate) fn clear(&mut self) {
        self.hide();
        self.matches.clear();
    }

    pub(crate) fn take_match(&mut self, idx: usize) -> Option<C> {
        if idx >= self.matches.len() {
            return None;
        }
        let mut matches = std::mem::take(&mut self.matches);
        let chosen = matches.swap_remove(idx);
        self.clear();
        Some(chosen)
    }

    pub(crate) fn highlight_next(&mut self) {
        let Some(last) = self.matches.len().checked_sub(1) else {
            self.highlighted = None;
            return;
        };
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(idx) => (idx + 1).min(last),
        });
    }

    pub(crate) fn highlight_prev(&mut self) {
        self.highlighted = match self.highlighted {
            None | Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
    }
}
