//! Formatting helpers for rendering terms.

pub mod term;

pub use term::pretty;
