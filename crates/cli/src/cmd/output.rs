//! Shared output formatting for record-listing commands.

use kunstdb_core::catalog::Artwork;
use serde::Serialize;

use crate::OutputFormat;

/// Formatted record for JSON output.
#[derive(Debug, Serialize)]
pub struct ArtworkOutput {
    pub id: u64,
    pub title: String,
    pub artists: Vec<String>,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_year_from: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_year_to: Option<i32>,
}

impl From<&&Artwork> for ArtworkOutput {
    fn from(artwork: &&Artwork) -> Self {
        Self {
            id: artwork.id,
            title: artwork.title.clone(),
            artists: artwork.artists.clone(),
            date: artwork.date.clone(),
            date_year_from: artwork.date_year_from,
            date_year_to: artwork.date_year_to,
        }
    }
}

/// Print records as a table.
pub fn print_artworks_table(artworks: &[&Artwork]) {
    if artworks.is_empty() {
        println!("(no records found)");
        return;
    }

    let title_width =
        artworks.iter().map(|a| a.title.len()).max().unwrap_or(5).clamp(5, 40);
    let artist_width = artworks
        .iter()
        .map(|a| a.artists.join(", ").len())
        .max()
        .unwrap_or(7)
        .clamp(7, 30);
    let date_width =
        artworks.iter().map(|a| a.date.len()).max().unwrap_or(4).clamp(4, 20);

    println!(
        "{:>6}  {:<title_width$}  {:<artist_width$}  {:<date_width$}  {:>6}  {:>6}",
        "ID",
        "TITLE",
        "ARTISTS",
        "DATE",
        "FROM",
        "TO",
        title_width = title_width,
        artist_width = artist_width,
        date_width = date_width,
    );
    println!(
        "{:->6}  {:-<title_width$}  {:-<artist_width$}  {:-<date_width$}  {:->6}  {:->6}",
        "",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
        artist_width = artist_width,
        date_width = date_width,
    );

    for artwork in artworks {
        let title = truncate(&artwork.title, title_width);
        let artists = truncate(&artwork.artists.join(", "), artist_width);
        let date = truncate(&artwork.date, date_width);
        let from = year_cell(artwork.date_year_from);
        let to = year_cell(artwork.date_year_to);

        println!(
            "{:>6}  {:<title_width$}  {:<artist_width$}  {:<date_width$}  {:>6}  {:>6}",
            artwork.id,
            title,
            artists,
            date,
            from,
            to,
            title_width = title_width,
            artist_width = artist_width,
            date_width = date_width,
        );
    }

    println!();
    println!("-- {} records --", artworks.len());
}

/// Print records as JSON.
pub fn print_artworks_json(artworks: &[&Artwork]) {
    let output: Vec<ArtworkOutput> = artworks.iter().map(ArtworkOutput::from).collect();
    println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
}

/// Print record ids only (quiet mode).
pub fn print_artworks_quiet(artworks: &[&Artwork]) {
    for artwork in artworks {
        println!("{}", artwork.id);
    }
}

/// Resolve the output format from flags.
pub fn resolve_format(output: OutputFormat, json: bool, quiet: bool) -> OutputFormat {
    if json {
        OutputFormat::Json
    } else if quiet {
        OutputFormat::Quiet
    } else {
        output
    }
}

fn year_cell(year: Option<i32>) -> String {
    year.map_or_else(|| "-".to_string(), |y| y.to_string())
}

/// Truncate string with ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else if max_len > 3 {
        format!("{}...", &s[..max_len - 3])
    } else {
        s[..max_len].to_string()
    }
}
