use unicode_segmentation::UnicodeSegmentation;

use super::candidate::Candidate;
use super::key::{KeyOutcome, PickerKey};
use super::matcher::{ContainsMatcher, MatchPredicate};
use super::regions::PointerTarget;
use super::state::SuggestionState;

pub const DEFAULT_MIN_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommitPolicy {
    /// Typed text is an acceptable value on its own.
    #[default]
    FreeText,
    /// On blur, text that did not come from a selection is cleared.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerOptions {
    pub min_chars: usize,
    pub max_results: Option<usize>,
    pub commit: CommitPolicy,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            max_results: None,
            commit: CommitPolicy::FreeText,
        }
    }
}

impl PickerOptions {
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn strict(mut self) -> Self {
        self.commit = CommitPolicy::Strict;
        self
    }

    pub fn accepts_query(&self, text: &str) -> bool {
        text.graphemes(true).count() >= self.min_chars
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Selected,
    Kept,
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlurOutcome {
    Dismissed,
    /// Strict commit rejected the typed text and the field was emptied.
    Cleared,
}

/// Filterable suggestion picker over a fixed candidate list.
///
/// One instance lives for one input session. Selection results are handed to
/// the caller through the `on_select` closure of the operation that caused
/// them, invoked once and synchronously before the state resets.
pub struct Picker<C, M = ContainsMatcher> {
    candidates: Vec<C>,
    matcher: M,
    options: PickerOptions,
    query: String,
    state: SuggestionState<C>,
    committed: Option<String>,
}

impl<C: Candidate + Clone> Picker<C, ContainsMatcher> {
    pub fn new(candidates: Vec<C>) -> Self {
        Self::with_matcher(candidates, ContainsMatcher, PickerOptions::default())
    }
}

impl<C, M> Picker<C, M>
where
    C: Candidate + Clone,
    M: MatchPredicate<C>,
{
    pub fn with_matcher(candidates: Vec<C>, matcher: M, options: PickerOptions) -> Self {
        Self {
            candidates,
            matcher,
            options,
            query: String::new(),
            state: SuggestionState::default(),
            committed: None,
        }
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn candidates(&self) -> &[C] {
        &self.candidates
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SuggestionState<C> {
        &self.state
    }

    /// Commit value of the last selection, if any.
    pub fn committed_value(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// True when the current text is exactly what the last selection wrote.
    pub fn is_committed(&self) -> bool {
        self.committed.as_deref() == Some(self.query.as_str())
    }

    pub fn on_query_change(&mut self, text: &str) -> &SuggestionState<C> {
        self.query.clear();
        self.query.push_str(text);
        self.recompute();
        &self.state
    }

    /// Swaps the candidate list and refilters against the current query.
    pub fn replace_candidates(&mut self, candidates: Vec<C>) -> &SuggestionState<C> {
        self.candidates = candidates;
        self.recompute();
        &self.state
    }

    /// Starts a fresh input session over the same candidates.
    pub fn reset(&mut self) {
        self.query.clear();
        self.committed = None;
        self.state.clear();
    }

    /// Sets the query without computing matches, leaving the panel hidden.
    pub(crate) fn set_query_pending(&mut self, text: &str) {
        self.query.clear();
        self.query.push_str(text);
        self.state.clear();
    }

    /// Hides suggestions without touching the query, e.g. after a failed
    /// lookup.
    pub(crate) fn clear_suggestions(&mut self) {
        self.state.clear();
    }

    pub fn on_key<F>(&mut self, key: PickerKey, on_select: F) -> KeyOutcome
    where
        F: FnOnce(&C),
    {
        if !self.state.is_navigable() {
            return KeyOutcome::Ignored;
        }

        match key {
            PickerKey::ArrowDown => {
                self.state.highlight_next();
                KeyOutcome::Consumed
            }
            PickerKey::ArrowUp => {
                self.state.highlight_prev();
                KeyOutcome::Consumed
            }
            PickerKey::Enter => {
                let Some(idx) = self.state.highlighted() else {
                    return KeyOutcome::Ignored;
                };
                if self.select_match(idx, on_select) {
                    KeyOutcome::Selected
                } else {
                    KeyOutcome::Ignored
                }
            }
            PickerKey::Escape => {
                self.state.hide();
                KeyOutcome::Consumed
            }
        }
    }

    /// Commits `candidate`: notifies the caller, records the commit value as
    /// the new query and resets the suggestion state.
    pub fn select<F>(&mut self, candidate: C, on_select: F)
    where
        F: FnOnce(&C),
    {
        let value = candidate.commit_value();
        tracing::debug!(value = %value, "suggestion selected");
        on_select(&candidate);
        self.query = value.clone();
        self.committed = Some(value);
        self.state.clear();
    }

    /// Selects the match at `idx`. Returns `false` when the index is stale.
    pub fn select_match<F>(&mut self, idx: usize, on_select: F) -> bool
    where
        F: FnOnce(&C),
    {
        if !self.state.visible() {
            return false;
        }
        match self.state.take_match(idx) {
            Some(candidate) => {
                self.select(candidate, on_select);
                true
            }
            None => false,
        }
    }

    /// Pointer-down routing. Panel and row hits are resolved here before any
    /// focus change, so a click on a row is never pre-empted by dismissal.
    pub fn on_pointer_down<F>(&mut self, target: PointerTarget, on_select: F) -> PointerOutcome
    where
        F: FnOnce(&C),
    {
        match target {
            PointerTarget::Row(idx) => {
                if self.select_match(idx, on_select) {
                    PointerOutcome::Selected
                } else {
                    PointerOutcome::Kept
                }
            }
            PointerTarget::Panel | PointerTarget::Input => PointerOutcome::Kept,
            PointerTarget::Outside => {
                self.on_outside_interaction();
                PointerOutcome::Dismissed
            }
        }
    }

    pub fn on_outside_interaction(&mut self) {
        self.state.hide();
    }

    /// Focus left the input. Under strict commit, uncommitted text is
    /// cleared and `on_change("")` is reported.
    pub fn on_blur<F>(&mut self, on_change: F) -> BlurOutcome
    where
        F: FnOnce(&str),
    {
        self.state.hide();
        if self.options.commit == CommitPolicy::Strict
            && !self.query.is_empty()
            && !self.is_committed()
        {
            tracing::debug!(query = %self.query, "rejecting uncommitted text");
            self.query.clear();
            self.committed = None;
            self.state.clear();
            on_change("");
            return BlurOutcome::Cleared;
        }
        BlurOutcome::Dismissed
    }

    fn recompute(&mut self) {
        if !self.options.accepts_query(&self.query) {
            self.state.clear();
            return;
        }

        let limit = self.options.max_results.unwrap_or(usize::MAX);
        let matches = self
            .candidates
            .iter()
            .filter(|candidate| self.matcher.matches(candidate, &self.query))
            .take(limit)
            .cloned()
            .collect();
        self.state.show(matches);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::picker::{
        BlurOutcome, Candidate, FnMatcher, KeyOutcome, Picker, PickerKey, PickerOptions,
        PointerOutcome, PointerTarget,
    };

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Guest {
        name: &'static str,
    }

    impl Candidate for Guest {
        fn display_name(&self) -> &str {
            self.name
        }
    }

    fn guests() -> Vec<Guest> {
        vec![
            Guest {
                name: "Rajesh Kumar",
            },
            Guest {
                name: "Rahul Singh",
            },
            Guest {
                name: "Priya Sharma",
            },
        ]
    }

    fn names(picker: &Picker<Guest>) -> Vec<&str> {
        picker.state().matches().iter().map(|g| g.name).collect()
    }

    #[test]
    fn short_queries_stay_hidden() {
        let mut picker = Picker::new(guests());
        let state = picker.on_query_change("r");
        assert!(!state.visible());
        assert!(state.matches().is_empty());
        assert_eq!(state.highlighted_index(), -1);

        assert!(!picker.on_query_change("").visible());
    }

    #[test]
    fn matches_keep_candidate_order() {
        let mut picker = Picker::new(guests());
        picker.on_query_change("ra");
        assert!(picker.state().visible());
        assert_eq!(names(&picker), vec!["Rajesh Kumar", "Rahul Singh"]);

        picker.on_query_change("RA");
        assert_eq!(names(&picker).len(), 2);

        picker.on_query_change("sh");
        assert_eq!(names(&picker), vec!["Rajesh Kumar", "Priya Sharma"]);
    }

    #[test]
    fn custom_predicate_and_cap_apply() {
        let prefix = FnMatcher(|guest: &Guest, query: &str| {
            guest.name.to_lowercase().starts_with(&query.to_lowercase())
        });
        let options = PickerOptions::default().with_max_results(Some(1));
        let mut picker = Picker::with_matcher(guests(), prefix, options);

        picker.on_query_change("ra");
        let matched: Vec<&str> = picker.state().matches().iter().map(|g| g.name).collect();
        assert_eq!(matched, vec!["Rajesh Kumar"]);
    }

    #[test]
    fn keyboard_walkthrough_selects_second_match_once() {
        let mut picker = Picker::new(guests());
        let selected = RefCell::new(Vec::new());

        picker.on_query_change("ra");
        assert_eq!(picker.state().matches().len(), 2);
        assert_eq!(picker.state().highlighted_index(), -1);

        for expected in [0, 1, 1] {
            let outcome = picker.on_key(PickerKey::ArrowDown, |_| unreachable!());
            assert_eq!(outcome, KeyOutcome::Consumed);
            assert_eq!(picker.state().highlighted(), Some(expected));
        }

        let outcome = picker.on_key(PickerKey::Enter, |guest| {
            selected.borrow_mut().push(guest.clone())
        });
        assert_eq!(outcome, KeyOutcome::Selected);
        assert_eq!(
            selected.into_inner(),
            vec![Guest {
                name: "Rahul Singh"
            }]
        );
        assert!(!picker.state().visible());
        assert!(picker.state().matches().is_empty());
        assert_eq!(picker.state().highlighted_index(), -1);
        assert_eq!(picker.query(), "Rahul Singh");
        assert!(picker.is_committed());
    }

    #[test]
    fn enter_without_highlight_is_a_noop() {
        let mut picker = Picker::new(guests());
        picker.on_query_change("ra");
        let before = picker.state().clone();

        let mut calls = 0;
        let outcome = picker.on_key(PickerKey::Enter, |_| calls += 1);
        assert_eq!(outcome, KeyOutcome::Ignored);
        assert_eq!(calls, 0);
        assert_eq!(picker.state(), &before);
    }

    #[test]
    fn arrow_up_bottoms_out_at_no_highlight() {
        let mut picker = Picker::new(guests());
        picker.on_query_change("ra");
        picker.on_key(PickerKey::ArrowDown, |_| {});
        picker.on_key(PickerKey::ArrowDown, |_| {});

        for _ in 0..5 {
            picker.on_key(PickerKey::ArrowUp, |_| {});
        }
        assert_eq!(picker.state().highlighted_index(), -1);
    }

    #[test]
    fn keys_are_ignored_when_hidden_or_empty() {
        let mut picker = Picker::new(guests());
        assert_eq!(
            picker.on_key(PickerKey::ArrowDown, |_| {}),
            KeyOutcome::Ignored
        );

        picker.on_query_change("zz");
        assert!(picker.state().visible());
        assert!(picker.state().matches().is_empty());
        assert_eq!(picker.on_key(PickerKey::Escape, |_| {}), KeyOutcome::Ignored);
    }

    #[test]
    fn escape_hides_and_retained_matches_are_inert() {
        let mut picker = Picker::new(guests());
        picker.on_query_change("ra");
        picker.on_key(PickerKey::ArrowDown, |_| {});

        assert_eq!(picker.on_key(PickerKey::Escape, |_| {}), KeyOutcome::Consumed);
        assert!(!picker.state().visible());
        assert_eq!(picker.state().highlighted_index(), -1);
        assert_eq!(
            picker.on_key(PickerKey::ArrowDown, |_| {}),
            KeyOutcome::Ignored
        );
    }

    #[test]
    fn requery_resets_highlight() {
        let mut picker = Picker::new(guests());
        picker.on_query_change("ra");
        picker.on_key(PickerKey::ArrowDown, |_| {});
        picker.on_query_change("raj");
        assert_eq!(picker.state().highlighted_index(), -1);
    }

    #[test]
    fn pointer_row_selects_and_outside_dismisses() {
        let mut picker = Picker::new(guests());
        picker.on_query_change("sh");

        let mut chosen = None;
        assert_eq!(
            picker.on_pointer_down(PointerTarget::Panel, |_| unreachable!()),
            PointerOutcome::Kept
        );
        assert!(picker.state().visible());

        let outcome = picker.on_pointer_down(PointerTarget::Row(1), |g| chosen = Some(g.name));
        assert_eq!(outcome, PointerOutcome::Selected);
        assert_eq!(chosen, Some("Priya Sharma"));
        assert!(!picker.state().visible());

        picker.on_query_change("ra");
        assert_eq!(
            picker.on_pointer_down(PointerTarget::Outside, |_| unreachable!()),
            PointerOutcome::Dismissed
        );
        assert!(!picker.state().visible());
    }

    #[test]
    fn stale_row_index_is_kept_not_selected() {
        let mut picker = Picker::new(guests());
        picker.on_query_change("sh");
        assert_eq!(
            picker.on_pointer_down(PointerTarget::Row(9), |_| unreachable!()),
            PointerOutcome::Kept
        );
    }

    #[test]
    fn strict_blur_clears_uncommitted_text() {
        let options = PickerOptions::default().strict();
        let mut picker = Picker::with_matcher(guests(), crate::picker::ContainsMatcher, options);
        picker.on_query_change("Par");

        let mut changes = Vec::new();
        let outcome = picker.on_blur(|value| changes.push(value.to_string()));
        assert_eq!(outcome, BlurOutcome::Cleared);
        assert_eq!(changes, vec![String::new()]);
        assert_eq!(picker.query(), "");
    }

    #[test]
    fn strict_blur_keeps_committed_selection() {
        let options = PickerOptions::default().strict();
        let mut picker = Picker::with_matcher(guests(), crate::picker::ContainsMatcher, options);
        picker.on_query_change("pri");
        picker.on_key(PickerKey::ArrowDown, |_| {});
        picker.on_key(PickerKey::Enter, |_| {});

        let outcome = picker.on_blur(|_| unreachable!());
        assert_eq!(outcome, BlurOutcome::Dismissed);
        assert_eq!(picker.query(), "Priya Sharma");

        picker.on_query_change("Priya Sharm");
        assert_eq!(picker.on_blur(|_| {}), BlurOutcome::Cleared);
        assert_eq!(picker.committed_value(), None);
    }

    #[test]
    fn free_text_blur_only_dismisses() {
        let mut picker = Picker::new(guests());
        picker.on_query_change("Someone new");
        assert_eq!(picker.on_blur(|_| unreachable!()), BlurOutcome::Dismissed);
        assert_eq!(picker.query(), "Someone new");
    }

    #[test]
    fn min_chars_counts_graphemes() {
        let options = PickerOptions::default().with_min_chars(2);
        let mut picker =
            Picker::with_matcher(vec!["e\u{301}x".to_string()], crate::picker::AcceptAll, options);
        assert!(!picker.on_query_change("e\u{301}").visible());
        assert!(picker.on_query_change("e\u{301}x").visible());
    }
}
