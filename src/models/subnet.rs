//! Subnet calculation result model.

use super::IpClass;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Values derived from one address/mask/subnet-count request.
///
/// Built once by [`crate::processing::calculate_subnets`] and never modified.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// Classful address class of the input address.
    pub class: IpClass,
    /// The mask exactly as it was entered.
    pub original_mask: String,
    /// Prefix length of the original mask.
    pub original_cidr: u8,
    /// Bits taken from the host portion, `ceil(log2(requested_subnets))`.
    pub borrowed_bits: u8,
    /// `2^borrowed_bits`.
    pub total_subnets: u64,
    /// Total subnets minus the all-zeros and all-ones subnet, floored at 0.
    pub usable_subnets: u64,
    /// Addresses in each subnet, `2^host_bits`.
    pub hosts_per_subnet: u64,
    /// Addresses per subnet minus network and broadcast, floored at 0.
    pub usable_hosts: u64,
    /// Mask after borrowing.
    pub new_mask: Ipv4Addr,
    /// Prefix length after borrowing.
    pub new_cidr: u8,
    /// Bits left for hosts after borrowing.
    pub host_bits: u8,
    /// Address increment between consecutive subnet base addresses.
    pub jump: u64,
    /// Subnet count as requested.
    pub requested_subnets: u64,
}

impl SubnetResult {
    /// Jump expressed in blocks of 8 addresses, rounded down.
    pub fn jump_div_8(&self) -> u64 {
        self.jump / 8
    }
}

/// One of the equal-size subnets carved out of the original network.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubnetRange {
    /// Position of the subnet, starting at 0 (the all-zeros subnet).
    pub index: u64,
    pub network: Ipv4Addr,
    pub prefix: u8,
    /// First assignable host, `None` for /31 and /32.
    pub first_host: Option<Ipv4Addr>,
    /// Last assignable host, `None` for /31 and /32.
    pub last_host: Option<Ipv4Addr>,
    pub broadcast: Ipv4Addr,
}

impl std::fmt::Display for SubnetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}
