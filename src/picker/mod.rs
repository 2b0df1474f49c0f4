mod candidate;
mod core;
mod key;
mod matcher;
mod regions;
mod state;
mod view;

pub use candidate::Candidate;
pub use core::{
    BlurOutcome, CommitPolicy, DEFAULT_MIN_CHARS, Picker, PickerOptions, PointerOutcome,
};
pub use key::{KeyOutcome, PickerKey};
pub use matcher::{AcceptAll, ContainsMatcher, FnMatcher, MatchPredicate};
pub use regions::{PickerRegions, PointerTarget};
pub use state::SuggestionState;
pub use view::{SuggestionItemView, SuggestionView};
