#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod dating;
pub mod search;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
