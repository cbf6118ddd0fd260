//! Searching catalog records: free-text queries, field filters, suggestions.

mod engine;
mod filters;
mod query;
mod suggest;

pub use engine::{execute, SearchMode, SearchRequest};
pub use filters::{DateFilter, FieldFilter, FilterError};
pub use query::TextQuery;
pub use suggest::{suggest, SuggestSource};
