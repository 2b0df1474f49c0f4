use super::candidate::Candidate;
use super::state::SuggestionState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItemView {
    pub label: String,
    pub detail: Option<String>,
    pub highlighted: bool,
}

/// Render snapshot of an open suggestion panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionView {
    pub items: Vec<SuggestionItemView>,
    pub highlighted: Option<usize>,
}

impl SuggestionView {
    /// `None` while the panel is hidden.
    pub fn from_state<C: Candidate>(state: &SuggestionState<C>) -> Option<Self> {
        if !state.visible() {
            return None;
        }
        let highlighted = state.highlighted();
        let items = state
            .matches()
            .iter()
            .enumerate()
            .map(|(idx, candidate)| SuggestionItemView {
                label: candidate.display_name().to_string(),
                detail: candidate.detail(),
                highlighted: highlighted == Some(idx),
            })
            .collect();
        Some(Self { items, highlighted })
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
