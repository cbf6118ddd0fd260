//! The artwork record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dating;

/// One cataloged artwork.
///
/// `date` holds the dating as free text, the way it is written on the object
/// label; `date_year_from` and `date_year_to` are the machine-readable year
/// pair derived from it. The pair may be absent (never derived, or the text
/// was unrecognizable) and may disagree with the text after manual edits --
/// [`Artwork::refresh_year_range`] re-derives it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title_english: String,
    #[serde(default)]
    pub artists: Vec<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub date_year_from: Option<i32>,
    #[serde(default)]
    pub date_year_to: Option<i32>,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub credits: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub place_of_production: Vec<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Artwork {
    /// Re-derive `date_year_from`/`date_year_to` from the free-text `date`.
    ///
    /// When the text parses, both fields are overwritten and `true` is
    /// returned. When it does not, the fields keep their previous values and
    /// the call is a no-op returning `false`.
    pub fn refresh_year_range(&mut self) -> bool {
        match dating::parse(&self.date) {
            Some(range) => {
                self.date_year_from = Some(range.from);
                self.date_year_to = Some(range.to);
                true
            }
            None => false,
        }
    }

    /// All free-text fields a basic search looks at, joined for matching.
    pub(crate) fn search_text(&self) -> String {
        let mut text = String::new();
        for part in [
            self.title.as_str(),
            self.title_english.as_str(),
            self.date.as_str(),
            self.credits.as_str(),
        ] {
            text.push_str(part);
            text.push('\n');
        }
        for list in [
            &self.artists,
            &self.materials,
            &self.keywords,
            &self.place_of_production,
        ] {
            for entry in list {
                text.push_str(entry);
                text.push('\n');
            }
        }
        if let Some(ref location) = self.location {
            text.push_str(location);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str) -> Artwork {
        Artwork {
            id: 1,
            title: "Stillleben".to_string(),
            title_english: String::new(),
            artists: vec!["Anna Berger".to_string()],
            date: date.to_string(),
            date_year_from: None,
            date_year_to: None,
            materials: vec![],
            dimensions: None,
            credits: String::new(),
            keywords: vec![],
            location: None,
            place_of_production: vec![],
            checked: false,
            published: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn refresh_fills_both_year_fields() {
        let mut artwork = record("ca. 1850");
        assert!(artwork.refresh_year_range());
        assert_eq!(artwork.date_year_from, Some(1845));
        assert_eq!(artwork.date_year_to, Some(1855));
    }

    #[test]
    fn refresh_leaves_fields_untouched_on_no_match() {
        let mut artwork = record("undatiert");
        artwork.date_year_from = Some(1700);
        artwork.date_year_to = Some(1750);

        assert!(!artwork.refresh_year_range());
        assert_eq!(artwork.date_year_from, Some(1700));
        assert_eq!(artwork.date_year_to, Some(1750));
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut artwork = record("14.Jh.");
        assert!(artwork.refresh_year_range());
        let once = artwork.clone();
        assert!(artwork.refresh_year_range());
        assert_eq!(artwork, once);
    }

    #[test]
    fn minimal_json_deserializes_with_defaults() {
        let artwork: Artwork =
            serde_json::from_str(r#"{"id": 7, "title": "Fragment"}"#).unwrap();
        assert_eq!(artwork.id, 7);
        assert!(artwork.date.is_empty());
        assert_eq!(artwork.date_year_from, None);
        assert!(!artwork.published);
    }

    #[test]
    fn search_text_covers_list_fields() {
        let mut artwork = record("1850");
        artwork.keywords.push("Malerei".to_string());
        artwork.location = Some("Wien".to_string());

        let text = artwork.search_text();
        assert!(text.contains("Stillleben"));
        assert!(text.contains("Anna Berger"));
        assert!(text.contains("Malerei"));
        assert!(text.contains("Wien"));
    }
}
