//! Shared runtime helpers for the board crates.

pub mod utils;
