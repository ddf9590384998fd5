//! Bundler utilities.

pub mod fs;
