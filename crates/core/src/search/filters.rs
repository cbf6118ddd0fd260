//! Field filters for expert-mode search.

use thiserror::Error;

use crate::catalog::Artwork;

use super::query::TextQuery;

/// Errors raised when a filter is built from invalid values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("date filter needs at least one of 'from' and 'to'")]
    EmptyDateFilter,

    #[error("date filter 'from' year {from} must not be greater than 'to' year {to}")]
    InvertedDateFilter { from: i32, to: i32 },
}

/// A validated year-range filter over the derived dating fields.
///
/// With only a lower bound it finds records dated at or after that year, with
/// only an upper bound records dated at or before it, and with both bounds
/// records whose dating overlaps the given span. Records without derived
/// years never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFilter {
    from: Option<i32>,
    to: Option<i32>,
}

impl DateFilter {
    pub fn new(from: Option<i32>, to: Option<i32>) -> Result<Self, FilterError> {
        match (from, to) {
            (None, None) => Err(FilterError::EmptyDateFilter),
            (Some(f), Some(t)) if t < f => {
                Err(FilterError::InvertedDateFilter { from: f, to: t })
            }
            _ => Ok(Self { from, to }),
        }
    }

    pub fn matches(&self, artwork: &Artwork) -> bool {
        self.matches_years(artwork.date_year_from, artwork.date_year_to)
    }

    fn matches_years(&self, year_from: Option<i32>, year_to: Option<i32>) -> bool {
        match (self.from, self.to) {
            (Some(from), None) => {
                year_from.is_some_and(|y| y >= from)
                    || year_to.is_some_and(|y| y >= from)
            }
            (None, Some(to)) => {
                year_from.is_some_and(|y| y <= to) || year_to.is_some_and(|y| y <= to)
            }
            (Some(from), Some(to)) => {
                let inside = |y: i32| (from..=to).contains(&y);
                year_from.is_some_and(inside)
                    || year_to.is_some_and(inside)
                    || (year_from.is_some_and(|y| y <= from)
                        && year_to.is_some_and(|y| y >= to))
            }
            (None, None) => false,
        }
    }
}

/// One expert-mode filter, scoped to a single record field.
#[derive(Debug, Clone)]
pub enum FieldFilter {
    Title(TextQuery),
    Artist(TextQuery),
    PlaceOfProduction(TextQuery),
    Location(TextQuery),
    Keyword(TextQuery),
    Date(DateFilter),
}

impl FieldFilter {
    pub fn matches(&self, artwork: &Artwork) -> bool {
        match self {
            FieldFilter::Title(query) => {
                query.matches(&artwork.title) || query.matches(&artwork.title_english)
            }
            FieldFilter::Artist(query) => {
                artwork.artists.iter().any(|artist| query.matches(artist))
            }
            FieldFilter::PlaceOfProduction(query) => artwork
                .place_of_production
                .iter()
                .any(|place| query.matches(place)),
            FieldFilter::Location(query) => artwork
                .location
                .as_deref()
                .is_some_and(|location| query.matches(location)),
            FieldFilter::Keyword(query) => {
                artwork.keywords.iter().any(|keyword| query.matches(keyword))
            }
            FieldFilter::Date(filter) => filter.matches(artwork),
        }
    }
}
