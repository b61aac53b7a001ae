//! Output formatting for calculation results.
//!
//! - [`terminal`] - colored label/value output
//! - [`csv`] - CSV output
//! - [`json`] - JSON output

mod csv;
mod json;
mod terminal;

pub use csv::{ranges_csv, result_csv};
pub use json::outcome_json;
pub use terminal::{format_errors, format_field, format_ranges, format_result, group_thousands};
