use super::candidate::Candidate;

pub trait MatchPredicate<C>: Send + Sync {
    fn matches(&self, candidate: &C, query: &str) -> bool;
}

/// Case-insensitive substring match on the display name.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContainsMatcher;

impl<C: Candidate> MatchPredicate<C> for ContainsMatcher {
    fn matches(&self, candidate: &C, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        candidate
            .display_name()
            .to_lowercase()
            .contains(&query.to_lowercase())
    }
}

/// Keeps every candidate. Used when the source already filtered.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl<C> MatchPredicate<C> for AcceptAll {
    fn matches(&self, _candidate: &C, _query: &str) -> bool {
        true
    }
}

/// Adapts a closure into a [`MatchPredicate`].
#[derive(Clone, Copy)]
pub struct FnMatcher<F>(pub F);

impl<C, F> MatchPredicate<C> for FnMatcher<F>
where
    F: Fn(&C, &str) -> bool + Send + Sync,
{
    fn matches(&self, candidate: &C, query: &str) -> bool {
        (self.0)(candidate, query)
    }
}
