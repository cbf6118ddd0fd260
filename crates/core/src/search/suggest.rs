//! Autocomplete suggestions drawn from catalog fields.

use std::collections::BTreeSet;

use crate::catalog::Artwork;

/// Which record field a suggestion lookup draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestSource {
    Titles,
    Artists,
    Keywords,
    Locations,
}

/// Collect up to `limit` distinct values starting with `prefix`,
/// case-insensitively, in sorted order.
pub fn suggest(
    records: &[Artwork],
    source: SuggestSource,
    prefix: &str,
    limit: usize,
) -> Vec<String> {
    let prefix_lower = prefix.to_lowercase();
    let mut candidates: BTreeSet<String> = BTreeSet::new();

    let mut consider = |value: &str| {
        if !value.is_empty() && value.to_lowercase().starts_with(&prefix_lower) {
            candidates.insert(value.to_string());
        }
    };

    for artwork in records {
        match source {
            SuggestSource::Titles => {
                consider(&artwork.title);
                consider(&artwork.title_english);
            }
            SuggestSource::Artists => artwork.artists.iter().for_each(|a| consider(a)),
            SuggestSource::Keywords => {
                artwork.keywords.iter().for_each(|k| consider(k));
            }
            SuggestSource::Locations => {
                if let Some(ref location) = artwork.location {
                    consider(location);
                }
                artwork.place_of_production.iter().for_each(|p| consider(p));
            }
        }
    }

    candidates.into_iter().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Artwork> {
        serde_json::from_str(
            r#"[
                {"id": 1, "title": "Der Kuss", "artists": ["Gustav Klimt"],
                 "location": "Wien", "keywords": ["Malerei"]},
                {"id": 2, "title": "Die Braut", "artists": ["Gustav Klimt"],
                 "place_of_production": ["Wien"]},
                {"id": 3, "title": "Landschaft", "artists": ["Egon Schiele"],
                 "keywords": ["Malerei", "Landschaft"]}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn suggestions_are_deduplicated_and_sorted() {
        let records = catalog();
        assert_eq!(
            suggest(&records, SuggestSource::Artists, "g", 10),
            vec!["Gustav Klimt"]
        );
        assert_eq!(
            suggest(&records, SuggestSource::Titles, "d", 10),
            vec!["Der Kuss", "Die Braut"]
        );
    }

    #[test]
    fn prefix_match_is_case_insensitive() {
        let records = catalog();
        assert_eq!(
            suggest(&records, SuggestSource::Keywords, "MAL", 10),
            vec!["Malerei"]
        );
    }

    #[test]
    fn locations_cover_both_location_fields() {
        let records = catalog();
        assert_eq!(
            suggest(&records, SuggestSource::Locations, "wi", 10),
            vec!["Wien"]
        );
    }

    #[test]
    fn limit_caps_the_result_count() {
        let records = catalog();
        let titles = suggest(&records, SuggestSource::Titles, "", 2);
        assert_eq!(titles.len(), 2);
    }
}
