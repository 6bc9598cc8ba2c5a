mod source;
mod worker;

pub use source::{FetchError, HttpSuggestSource, SuggestSource, parse_suggestions};
pub use worker::{SuggestRequest, SuggestResponse, spawn_worker};
