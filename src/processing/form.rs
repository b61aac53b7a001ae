//! Form submission: validate the three text inputs and run the calculation.
//!
//! Every failing input is reported, not just the first one, so the caller can show
//! the whole list at once.

use super::calculate::calculate_subnets;
use crate::models::{is_valid_ip, is_valid_mask, SubnetResult, MAX_LENGTH};
use serde::Serialize;
use std::num::IntErrorKind;

pub const INVALID_IP: &str = "Invalid IP address";
pub const INVALID_MASK: &str = "Invalid subnet mask";
pub const INVALID_SUBNET_COUNT: &str = "Number of subnets must be greater than 0";

/// Raw text inputs, as typed.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetForm {
    pub ip: String,
    pub mask: String,
    pub desired_subnets: String,
}

impl Default for SubnetForm {
    fn default() -> Self {
        SubnetForm {
            ip: "12.3.2.5".to_string(),
            mask: "255.0.0.0".to_string(),
            desired_subnets: "5".to_string(),
        }
    }
}

/// The inputs, any validation errors, and the result when there were none.
#[derive(Serialize, Debug, Clone)]
pub struct FormOutcome {
    pub form: SubnetForm,
    pub errors: Vec<String>,
    pub result: Option<SubnetResult>,
}

impl FormOutcome {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && self.result.is_some()
    }
}

/// A subnet count that failed to parse.
enum CountError {
    /// Not a whole number above 0.
    Invalid,
    /// A whole number too large for any prefix.
    TooLarge,
}

/// Parse the subnet count. Only whole numbers above 0 are accepted.
fn parse_subnet_count(s: &str) -> Result<u64, CountError> {
    match s.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(CountError::TooLarge),
        _ => Err(CountError::Invalid),
    }
}

/// Validate `form` and calculate when every input is acceptable.
pub fn submit(form: SubnetForm) -> FormOutcome {
    log::info!(
        "submit(ip={}, mask={}, subnets={})",
        form.ip,
        form.mask,
        form.desired_subnets
    );
    let mut errors: Vec<String> = Vec::new();

    if !is_valid_ip(&form.ip) {
        errors.push(INVALID_IP.to_string());
    }
    let mask_ok = is_valid_mask(&form.mask);
    if !mask_ok {
        errors.push(INVALID_MASK.to_string());
    }
    let subnet_count = match parse_subnet_count(&form.desired_subnets) {
        Ok(n) => Some(n),
        Err(CountError::Invalid) => {
            errors.push(INVALID_SUBNET_COUNT.to_string());
            None
        }
        Err(CountError::TooLarge) => {
            errors.push(format!(
                "Too many subnets requested: {} exceeds /{MAX_LENGTH}",
                form.desired_subnets.trim()
            ));
            None
        }
    };

    // The calculation itself reports a prefix past /32.
    let mut result = None;
    if let (true, Some(n)) = (mask_ok, subnet_count) {
        match calculate_subnets(&form.ip, &form.mask, n) {
            Ok(r) => result = Some(r),
            Err(e) => errors.push(e.to_string()),
        }
    }

    if !errors.is_empty() {
        log::warn!("submit() rejected: {}", errors.join("; "));
        result = None;
    }
    FormOutcome {
        form,
        errors,
        result,
    }
}
