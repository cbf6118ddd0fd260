use std::fmt;

use serde::{Deserialize, Serialize};

/// German lead-in word of a dating expression.
///
/// Signals approximate (`ca.`, `um`), "before" (`vor`), "after" (`nach`),
/// "end of" (`Ende`) or "beginning of" (`Anfang`) semantics for the year
/// notation that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preposition {
    /// `ca.`
    Circa,
    /// `um`
    Um,
    /// `vor`
    Vor,
    /// `nach`
    Nach,
    /// `Ende`
    Ende,
    /// `Anfang`
    Anfang,
}

impl Preposition {
    pub fn as_str(self) -> &'static str {
        match self {
            Preposition::Circa => "ca.",
            Preposition::Um => "um",
            Preposition::Vor => "vor",
            Preposition::Nach => "nach",
            Preposition::Ende => "Ende",
            Preposition::Anfang => "Anfang",
        }
    }
}

impl fmt::Display for Preposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive year span inferred from a dating expression.
///
/// Years may be negative (BCE) or zero. `from <= to` is not enforced: an
/// explicit range is taken exactly as typed, inverted or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    pub fn single(year: i32) -> Self {
        Self { from: year, to: year }
    }
}

impl fmt::Display for YearRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            write!(f, "{}", self.from)
        } else {
            write!(f, "{} to {}", self.from, self.to)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preposition_round_trips_through_display() {
        assert_eq!(Preposition::Circa.to_string(), "ca.");
        assert_eq!(Preposition::Anfang.to_string(), "Anfang");
    }

    #[test]
    fn single_year_displays_without_span() {
        assert_eq!(YearRange::single(1850).to_string(), "1850");
        assert_eq!(YearRange { from: 1301, to: 1400 }.to_string(), "1301 to 1400");
    }
}
