mod cache;
mod engine;
mod remote;

pub use cache::{CacheCounters, LookupCache};
pub use engine::{CandidateSource, LookupEngine, LookupEvent, LookupOptions};
pub use remote::RemotePicker;
