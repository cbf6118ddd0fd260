//! Historical-date parsing: free-text dating strings to year spans.
//!
//! Catalog records carry their dating as free text the way it appears on the
//! object label (`"ca. 1850"`, `"14.Jh."`, `"1921-1923"`). This module infers
//! the inclusive from/to year pair that text stands for.

mod parser;
mod types;

pub use parser::parse;
pub use types::{Preposition, YearRange};
