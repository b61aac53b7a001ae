//! Subnet calculator
//!
//! Splits an IPv4 network into equal-size subnets:
//! - [`models`] - address/mask validation, classification and conversions
//! - [`processing`] - the subnet calculation and form submission
//! - [`output`] - terminal, CSV and JSON rendering

pub mod cmd;
pub mod config;
pub mod models;
pub mod output;
pub mod processing;

use cmd::OutputFormat;
use models::SubnetRange;
use processing::{enumerate_subnets, FormOutcome};
use std::error::Error;

// Re-exports for convenience
pub use models::{
    cidr_to_mask, get_default_mask, get_ip_class, is_valid_ip, is_valid_mask, mask_to_cidr,
    IpClass, SubnetResult,
};
pub use processing::{calculate_subnets, submit, SubnetForm};

/// List subnets for a successful outcome, `None` when there is no result or no limit.
pub fn list_subnets(
    outcome: &FormOutcome,
    limit: Option<usize>,
) -> Result<Option<Vec<SubnetRange>>, Box<dyn Error>> {
    match (&outcome.result, limit) {
        (Some(result), Some(limit)) => Ok(Some(enumerate_subnets(
            &outcome.form.ip,
            result,
            limit,
        )?)),
        _ => Ok(None),
    }
}

/// Render a submission in the requested format.
pub fn render(
    outcome: &FormOutcome,
    format: OutputFormat,
    list_limit: Option<usize>,
) -> Result<String, Box<dyn Error>> {
    let subnets = list_subnets(outcome, list_limit)?;
    log::debug!(
        "render({format:?}) errors={} subnets={:?}",
        outcome.errors.len(),
        subnets.as_ref().map(|s| s.len())
    );

    let out = match format {
        OutputFormat::Json => output::outcome_json(outcome, subnets.as_deref())? + "\n",
        OutputFormat::Csv | OutputFormat::Terminal if !outcome.errors.is_empty() => {
            output::format_errors(&outcome.errors)
        }
        OutputFormat::Csv => {
            let mut out = String::new();
            if let Some(result) = &outcome.result {
                out.push_str(&output::result_csv(result));
            }
            if let Some(subnets) = &subnets {
                out.push_str(&output::ranges_csv(subnets));
            }
            out
        }
        OutputFormat::Terminal => {
            let mut out = String::new();
            if let Some(result) = &outcome.result {
                out.push_str(&output::format_result(result));
                if let Some(subnets) = &subnets {
                    out.push_str(&output::format_ranges(subnets, result.total_subnets));
                }
            }
            out
        }
    };
    Ok(out)
}
