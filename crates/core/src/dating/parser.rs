//! Recognizer cascade for German historical date notation.
//!
//! Supported shapes, tried in priority order:
//! - explicit year range: `1921-1923`, `1943/1972`, `-20000-0`
//! - day.month.year, optionally as a range: `5.3.1799`, `24.10.1929-28.10.1929`
//! - century, optionally as a range: `14.Jh.`, `13.Jh.-14.Jh.`
//! - bare year: `1850`, `-300`
//!
//! A leading preposition (`ca.`, `um`, `vor`, `nach`, `Ende`, `Anfang`) is
//! split off first and widens or shifts the nominal years of the matched
//! shape. All whitespace is insignificant: `"ca. 1850"` parses like
//! `"ca.1850"`.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{Preposition, YearRange};

static PREPOSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(ca\.|um|vor|nach|Ende|Anfang)(.*)$").expect("valid regex")
});

// Two signed years joined by `-` or `/`.
static YEAR_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d{1,5})[-/](-?\d{1,5})$").expect("valid regex")
});

// One or two full day.month.year dates; only the year groups are kept.
static DAY_SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}\.\d{1,2}\.(\d{1,4})(?:-\d{1,2}\.\d{1,2}\.(\d{1,4}))?$")
        .expect("valid regex")
});

// `N.Jh.` with an optional second century.
static CENTURY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})\.Jh\.(?:-(\d{1,2})\.Jh\.)?$").expect("valid regex")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d{1,5}$").expect("valid regex"));

/// Infer the year span a free-text dating expression stands for.
///
/// Returns `None` when no recognizer matches; that is the defined outcome for
/// unrecognized input, not an error. The parser is stateless and never
/// panics.
///
/// ```
/// use kunstdb_core::dating::{parse, YearRange};
///
/// assert_eq!(parse("ca. 1850"), Some(YearRange { from: 1845, to: 1855 }));
/// assert_eq!(parse("14.Jh."), Some(YearRange { from: 1301, to: 1400 }));
/// assert_eq!(parse("offen"), None);
/// ```
pub fn parse(input: &str) -> Option<YearRange> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let (preposition, rest) = split_preposition(&compact);

    if let Some(range) = recognize_year_span(rest) {
        // An explicit range takes both years exactly as typed; a preposition
        // in front of it does not shift them.
        return Some(range);
    }

    let range = recognize_day_span(rest)
        .or_else(|| recognize_century(rest, preposition))
        .or_else(|| recognize_year(rest))?;

    Some(apply_preposition(range, preposition))
}

fn split_preposition(compact: &str) -> (Option<Preposition>, &str) {
    let Some(caps) = PREPOSITION_RE.captures(compact) else {
        return (None, compact);
    };

    let preposition = match caps.get(1).map(|m| m.as_str()) {
        Some("ca.") => Preposition::Circa,
        Some("um") => Preposition::Um,
        Some("vor") => Preposition::Vor,
        Some("nach") => Preposition::Nach,
        Some("Ende") => Preposition::Ende,
        Some("Anfang") => Preposition::Anfang,
        _ => return (None, compact),
    };

    let rest = caps.get(2).map_or("", |m| m.as_str());
    (Some(preposition), rest)
}

fn recognize_year_span(rest: &str) -> Option<YearRange> {
    let caps = YEAR_SPAN_RE.captures(rest)?;
    let from: i32 = caps[1].parse().ok()?;
    let to: i32 = caps[2].parse().ok()?;
    Some(YearRange { from, to })
}

fn recognize_day_span(rest: &str) -> Option<YearRange> {
    let caps = DAY_SPAN_RE.captures(rest)?;
    let from: i32 = caps[1].parse().ok()?;
    let to = match caps.get(2) {
        Some(second) => second.as_str().parse().ok()?,
        None => from,
    };
    Some(YearRange { from, to })
}

fn recognize_century(rest: &str, preposition: Option<Preposition>) -> Option<YearRange> {
    let caps = CENTURY_RE.captures(rest)?;
    let century: i32 = caps[1].parse().ok()?;
    // Century N covers [(N-1)*100+1, (N-1)*100+100].
    let start = (century - 1) * 100 + 1;
    let end = (century - 1) * 100 + 100;

    let range = match (preposition, caps.get(2)) {
        (Some(Preposition::Anfang), _) => YearRange { from: start, to: start + 15 },
        (Some(Preposition::Ende), _) => YearRange { from: end - 15, to: end },
        (_, Some(second)) => {
            let second_century: i32 = second.as_str().parse().ok()?;
            YearRange { from: start, to: second_century * 100 }
        }
        (_, None) => YearRange { from: start, to: start + 99 },
    };
    Some(range)
}

fn recognize_year(rest: &str) -> Option<YearRange> {
    if !YEAR_RE.is_match(rest) {
        return None;
    }
    rest.parse().ok().map(YearRange::single)
}

fn apply_preposition(range: YearRange, preposition: Option<Preposition>) -> YearRange {
    match preposition {
        Some(Preposition::Circa | Preposition::Um) => {
            YearRange { from: range.from - 5, to: range.to + 5 }
        }
        Some(Preposition::Vor) => YearRange { from: range.from - 5, to: range.to },
        Some(Preposition::Nach) => YearRange { from: range.from, to: range.to + 5 },
        // Ende and Anfang only narrow century notation; they leave other
        // shapes alone.
        Some(Preposition::Ende | Preposition::Anfang) | None => range,
    }
}
