//! Subnet calculation logic.
//!
//! - [`calculate`] - borrowed bits, new mask and per-subnet counts
//! - [`form`] - input validation and submission

mod calculate;
mod form;

// Re-export public functions
pub use calculate::{borrowed_bits, calculate_subnets, enumerate_subnets};
pub use form::{
    submit, FormOutcome, SubnetForm, INVALID_IP, INVALID_MASK, INVALID_SUBNET_COUNT,
};
