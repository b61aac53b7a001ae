//! Domain models for the subnet calculator.
//!
//! - [`ipv4`] - address/mask validation, classification and prefix conversions
//! - [`SubnetResult`] and [`SubnetRange`] - calculation output

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cidr_to_mask, cut_addr, get_cidr_mask, get_default_mask, get_ip_class,
    ip_after_subnet, is_valid_ip, is_valid_mask, mask_to_cidr, parse_octets, IpClass, MAX_LENGTH,
};
pub use subnet::{SubnetRange, SubnetResult};
