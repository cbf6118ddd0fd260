//! Suggest command implementation.

use std::path::Path;

use kunstdb_core::search::{suggest, SuggestSource};

use crate::{SuggestArgs, SuggestSourceArg};

impl From<SuggestSourceArg> for SuggestSource {
    fn from(arg: SuggestSourceArg) -> Self {
        match arg {
            SuggestSourceArg::Titles => SuggestSource::Titles,
            SuggestSourceArg::Artists => SuggestSource::Artists,
            SuggestSourceArg::Keywords => SuggestSource::Keywords,
            SuggestSourceArg::Locations => SuggestSource::Locations,
        }
    }
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &SuggestArgs) {
    let path = super::resolve_catalog(config, profile, args.catalog.as_deref());
    let records = super::load_catalog(&path);

    for value in suggest(&records, args.source.into(), &args.prefix, args.limit) {
        println!("{value}");
    }
}
