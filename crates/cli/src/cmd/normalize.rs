//! Normalize command implementation.
//!
//! Batch counterpart of the form behavior: re-derive every record's
//! `date_year_from`/`date_year_to` from its free-text dating. Unrecognized
//! dating texts leave their record untouched.

use std::path::Path;

use chrono::Utc;
use kunstdb_core::catalog;
use tracing::debug;

use super::output::truncate;
use crate::NormalizeArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &NormalizeArgs) {
    let path = super::resolve_catalog(config, profile, args.catalog.as_deref());
    let mut records = super::load_catalog(&path);

    let mut changed = 0usize;
    let mut unmatched = 0usize;

    for artwork in &mut records {
        if artwork.date.is_empty() {
            continue;
        }

        let before = (artwork.date_year_from, artwork.date_year_to);
        if artwork.refresh_year_range() {
            if (artwork.date_year_from, artwork.date_year_to) != before {
                artwork.updated_at = Some(Utc::now());
                changed += 1;
                println!(
                    "{:>6}  {:<24}  {:>6}  {:>6}",
                    artwork.id,
                    truncate(&artwork.date, 24),
                    artwork.date_year_from.unwrap_or_default(),
                    artwork.date_year_to.unwrap_or_default(),
                );
            }
        } else {
            unmatched += 1;
            debug!(id = artwork.id, date = %artwork.date, "dating not recognized");
        }
    }

    println!();
    println!(
        "-- {} of {} records changed, {} unrecognized datings --",
        changed,
        records.len(),
        unmatched
    );

    if !args.write {
        println!("(dry run, pass --write to save)");
        return;
    }

    if changed > 0 {
        if let Err(e) = catalog::save(&path, &records) {
            eprintln!("Error saving catalog: {e}");
            std::process::exit(1);
        }
        println!("saved: {}", path.display());
    }
}
