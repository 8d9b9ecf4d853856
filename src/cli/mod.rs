//! Command-line interface helpers

pub mod output;
