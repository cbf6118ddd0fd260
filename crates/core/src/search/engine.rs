//! Search execution over an in-memory catalog.

use tracing::debug;

use crate::catalog::Artwork;

use super::filters::FieldFilter;
use super::query::TextQuery;

/// How a search interprets its input.
///
/// Basic mode runs one free-text query across every text field of a record;
/// expert mode combines per-field filters, all of which must hold. The two
/// correspond to the two faces of the search form.
#[derive(Debug, Clone)]
pub enum SearchMode {
    Basic(TextQuery),
    Expert(Vec<FieldFilter>),
}

/// A complete search request: mode plus result windowing.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub mode: SearchMode,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl SearchRequest {
    pub fn new(mode: SearchMode) -> Self {
        Self { mode, offset: 0, limit: None }
    }
}

/// Run a search, returning matching records in catalog order.
pub fn execute<'a>(records: &'a [Artwork], request: &SearchRequest) -> Vec<&'a Artwork> {
    let matches = records.iter().filter(|artwork| match &request.mode {
        SearchMode::Basic(query) => query.matches(&artwork.search_text()),
        SearchMode::Expert(filters) => {
            filters.iter().all(|filter| filter.matches(artwork))
        }
    });

    let windowed = matches.skip(request.offset);
    let results: Vec<&Artwork> = match request.limit {
        Some(limit) => windowed.take(limit).collect(),
        None => windowed.collect(),
    };

    debug!(hits = results.len(), total = records.len(), "search executed");
    results
}
