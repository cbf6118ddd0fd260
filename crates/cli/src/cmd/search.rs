//! Search command implementation.

use std::path::Path;

use kunstdb_core::search::{
    execute, DateFilter, FieldFilter, SearchMode, SearchRequest, TextQuery,
};
use tracing::debug;

use super::output::{
    print_artworks_json, print_artworks_quiet, print_artworks_table, resolve_format,
};
use crate::{OutputFormat, SearchArgs};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: SearchArgs) {
    let path = super::resolve_catalog(config, profile, args.catalog.as_deref());
    let records = super::load_catalog(&path);

    let mode = match build_mode(&args) {
        Ok(mode) => mode,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let request = SearchRequest { mode, offset: args.offset, limit: args.limit };
    debug!(offset = request.offset, limit = ?request.limit, "running search");
    let results = execute(&records, &request);

    match resolve_format(args.output, args.json, args.quiet) {
        OutputFormat::Table => print_artworks_table(&results),
        OutputFormat::Json => print_artworks_json(&results),
        OutputFormat::Quiet => print_artworks_quiet(&results),
    }
}

/// Build the search mode from the command line.
///
/// A positional query selects basic mode; field flags select expert mode.
/// The two are mutually exclusive, like the two faces of the search form.
fn build_mode(args: &SearchArgs) -> Result<SearchMode, String> {
    let mut filters: Vec<FieldFilter> = Vec::new();

    if let Some(ref title) = args.title {
        filters.push(FieldFilter::Title(TextQuery::parse(title)));
    }
    if let Some(ref artist) = args.artist {
        filters.push(FieldFilter::Artist(TextQuery::parse(artist)));
    }
    if let Some(ref keyword) = args.keyword {
        filters.push(FieldFilter::Keyword(TextQuery::parse(keyword)));
    }
    if let Some(ref location) = args.location {
        filters.push(FieldFilter::Location(TextQuery::parse(location)));
    }
    if let Some(ref place) = args.place_of_production {
        filters.push(FieldFilter::PlaceOfProduction(TextQuery::parse(place)));
    }
    if args.date_from.is_some() || args.date_to.is_some() {
        let filter = DateFilter::new(args.date_from, args.date_to)
            .map_err(|e| e.to_string())?;
        filters.push(FieldFilter::Date(filter));
    }

    match (&args.query, filters.is_empty()) {
        (Some(_), false) => {
            Err("a free-text query cannot be combined with field filters".to_string())
        }
        (Some(query), true) => Ok(SearchMode::Basic(TextQuery::parse(query))),
        (None, false) => Ok(SearchMode::Expert(filters)),
        (None, true) => {
            Err("provide a free-text query or at least one field filter".to_string())
        }
    }
}
