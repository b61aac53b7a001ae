//! Equal-size subnetting arithmetic.
//!
//! Borrows host bits from the original mask until the requested number of
//! subnets fits, then derives the new mask and per-subnet counts.

use crate::models::{
    broadcast_addr, cidr_to_mask, cut_addr, get_ip_class, ip_after_subnet, mask_to_cidr,
    parse_octets, SubnetRange, SubnetResult, MAX_LENGTH,
};
use std::error::Error;
use std::net::Ipv4Addr;

/// Minimum number of bits `k` so that `2^k >= n`, i.e. `ceil(log2(n))`.
///
/// `n` of 0 or 1 needs no bits.
///
/// # Examples
/// ```
/// use subnet_calculator::processing::borrowed_bits;
/// assert_eq!(borrowed_bits(5), 3);
/// assert_eq!(borrowed_bits(8), 3);
/// assert_eq!(borrowed_bits(9), 4);
/// ```
pub fn borrowed_bits(n: u64) -> u8 {
    if n <= 1 {
        0
    } else {
        (u64::BITS - (n - 1).leading_zeros()) as u8
    }
}

/// Calculate the subnetting values for `ip`/`mask` split into `requested_subnets`.
///
/// The address and mask are expected to be validated already; the class is only
/// informational and the mask's set bits are counted without a contiguity check.
///
/// # Returns
/// * `Ok(SubnetResult)` - the derived values
/// * `Err` - `requested_subnets` is 0, the mask is malformed, or the new prefix
///   would be longer than /32
pub fn calculate_subnets(
    ip: &str,
    mask: &str,
    requested_subnets: u64,
) -> Result<SubnetResult, Box<dyn Error>> {
    if requested_subnets == 0 {
        return Err("Number of subnets must be greater than 0".into());
    }
    let class = get_ip_class(ip);
    let original_cidr = mask_to_cidr(mask)?;
    let borrowed_bits = borrowed_bits(requested_subnets);

    let new_cidr = original_cidr + borrowed_bits;
    if new_cidr > MAX_LENGTH {
        log::warn!(
            "calculate_subnets({ip}, {mask}, {requested_subnets}) prefix overflow /{original_cidr}+{borrowed_bits}"
        );
        return Err(format!("Too many subnets requested: /{new_cidr} exceeds /{MAX_LENGTH}").into());
    }
    let new_mask = cidr_to_mask(new_cidr)?;
    let host_bits = MAX_LENGTH - new_cidr;

    let total_subnets = 1u64 << borrowed_bits;
    let hosts_per_subnet = 1u64 << host_bits;

    let result = SubnetResult {
        class,
        original_mask: mask.to_string(),
        original_cidr,
        borrowed_bits,
        total_subnets,
        usable_subnets: total_subnets.saturating_sub(2),
        hosts_per_subnet,
        usable_hosts: hosts_per_subnet.saturating_sub(2),
        new_mask,
        new_cidr,
        host_bits,
        jump: hosts_per_subnet,
        requested_subnets,
    };
    log::debug!("calculate_subnets({ip}, {mask}, {requested_subnets}) = {result:?}");
    Ok(result)
}

/// List the first `limit` subnets of a calculation, starting at the network that
/// contains `ip` and stepping by the jump.
pub fn enumerate_subnets(
    ip: &str,
    result: &SubnetResult,
    limit: usize,
) -> Result<Vec<SubnetRange>, Box<dyn Error>> {
    let addr = Ipv4Addr::from(parse_octets(ip).ok_or_else(|| format!("Invalid address {ip}"))?);
    let count = result.total_subnets.min(limit as u64);
    let mut network = cut_addr(addr, result.original_cidr)?;
    let mut ranges = Vec::with_capacity(count as usize);

    for index in 0..count {
        let broadcast = broadcast_addr(network, result.new_cidr)?;
        // /31 and /32 have no network/broadcast pair to skip
        let (first_host, last_host) = if result.new_cidr <= MAX_LENGTH - 2 {
            (
                Some(Ipv4Addr::from(u32::from(network) + 1)),
                Some(Ipv4Addr::from(u32::from(broadcast) - 1)),
            )
        } else {
            (None, None)
        };
        ranges.push(SubnetRange {
            index,
            network,
            prefix: result.new_cidr,
            first_host,
            last_host,
            broadcast,
        });
        if index + 1 < count {
            network = ip_after_subnet(network, result.new_cidr)?;
        }
    }
    log::debug!(
        "enumerate_subnets({ip}) listed {} of {} subnets",
        ranges.len(),
        result.total_subnets
    );
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IpClass;

    #[test]
    fn test_calculate_subnets_class_a() {
        let r = calculate_subnets("12.3.2.5", "255.0.0.0", 5).unwrap();
        assert_eq!(r.class, IpClass::A);
        assert_eq!(r.original_mask, "255.0.0.0");
        assert_eq!(r.original_cidr, 8);
        assert_eq!(r.borrowed_bits, 3);
        assert_eq!(r.new_cidr, 11);
        assert_eq!(r.new_mask, Ipv4Addr::new(255, 224, 0, 0));
        assert_eq!(r.total_subnets, 8);
        assert_eq!(r.usable_subnets, 6);
        assert_eq!(r.host_bits, 21);
        assert_eq!(r.hosts_per_subnet, 2097152);
        assert_eq!(r.usable_hosts, 2097150);
        assert_eq!(r.jump, 2097152);
        assert_eq!(r.jump_div_8(), 262144);
        assert_eq!(r.requested_subnets, 5);
    }

    #[test]
    fn test_calculate_subnets_class_c() {
        let r = calculate_subnets("192.168.1.10", "255.255.255.0", 4).unwrap();
        assert_eq!(r.class, IpClass::C);
        assert_eq!(r.borrowed_bits, 2);
        assert_eq!(r.new_mask, Ipv4Addr::new(255, 255, 255, 192));
        assert_eq!(r.total_subnets, 4);
        assert_eq!(r.usable_subnets, 2);
        assert_eq!(r.hosts_per_subnet, 64);
        assert_eq!(r.usable_hosts, 62);
        assert_eq!(r.jump, 64);
    }

    #[test]
    fn test_borrowed_bits_step() {
        assert_eq!(borrowed_bits(1), 0);
        assert_eq!(borrowed_bits(2), 1);
        for k in 1..=63u64 {
            let lo = (1u64 << (k - 1)) + 1;
            let hi = 1u64 << k;
            assert_eq!(borrowed_bits(lo), k as u8, "n={lo}");
            assert_eq!(borrowed_bits(hi), k as u8, "n={hi}");
        }
        assert_eq!(borrowed_bits(u32::MAX as u64), 32);
        assert_eq!(borrowed_bits(1u64 << 32), 32);
        assert_eq!(borrowed_bits(u64::MAX), 64);
    }

    #[test]
    fn test_one_subnet_borrows_nothing() {
        let r = calculate_subnets("172.16.0.1", "255.255.0.0", 1).unwrap();
        assert_eq!(r.class, IpClass::B);
        assert_eq!(r.borrowed_bits, 0);
        assert_eq!(r.new_mask, Ipv4Addr::new(255, 255, 0, 0));
        assert_eq!(r.total_subnets, 1);
        assert_eq!(r.usable_subnets, 0);
        assert_eq!(r.hosts_per_subnet, 65536);
    }

    #[test]
    fn test_usable_counts_floor_at_zero() {
        let r = calculate_subnets("10.0.0.1", "255.255.255.252", 2).unwrap();
        assert_eq!(r.new_cidr, 31);
        assert_eq!(r.usable_subnets, 0);
        assert_eq!(r.hosts_per_subnet, 2);
        assert_eq!(r.usable_hosts, 0);

        let r = calculate_subnets("10.0.0.1", "255.255.255.255", 1).unwrap();
        assert_eq!(r.host_bits, 0);
        assert_eq!(r.hosts_per_subnet, 1);
        assert_eq!(r.usable_hosts, 0);
    }

    #[test]
    fn test_zero_length_mask() {
        let r = calculate_subnets("1.2.3.4", "0.0.0.0", 1).unwrap();
        assert_eq!(r.hosts_per_subnet, 1u64 << 32);
        assert_eq!(r.usable_hosts, (1u64 << 32) - 2);
    }

    #[test]
    fn test_prefix_overflow_is_an_error() {
        assert_eq!(
            calculate_subnets("192.168.1.1", "255.255.255.0", 512)
                .unwrap_err()
                .to_string(),
            "Too many subnets requested: /33 exceeds /32"
        );
        assert_eq!(
            calculate_subnets("10.0.0.1", "255.0.0.0", u64::MAX)
                .unwrap_err()
                .to_string(),
            "Too many subnets requested: /72 exceeds /32"
        );
        // /24 + 8 is exactly /32
        let r = calculate_subnets("192.168.1.1", "255.255.255.0", 256).unwrap();
        assert_eq!(r.new_cidr, 32);
        assert_eq!(r.hosts_per_subnet, 1);
    }

    #[test]
    fn test_zero_subnets_is_an_error() {
        assert_eq!(
            calculate_subnets("192.168.1.1", "255.255.255.0", 0)
                .unwrap_err()
                .to_string(),
            "Number of subnets must be greater than 0"
        );
    }

    #[test]
    fn test_calculate_subnets_is_repeatable() {
        let a = calculate_subnets("130.5.0.9", "255.255.0.0", 100).unwrap();
        let b = calculate_subnets("130.5.0.9", "255.255.0.0", 100).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_enumerate_subnets() {
        let r = calculate_subnets("192.168.1.77", "255.255.255.0", 4).unwrap();
        let ranges = enumerate_subnets("192.168.1.77", &r, 16).unwrap();
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[0].to_string(), "192.168.1.0/26");
        assert_eq!(ranges[0].first_host, Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(ranges[0].last_host, Some(Ipv4Addr::new(192, 168, 1, 62)));
        assert_eq!(ranges[0].broadcast, Ipv4Addr::new(192, 168, 1, 63));
        assert_eq!(ranges[1].network, Ipv4Addr::new(192, 168, 1, 64));
        assert_eq!(ranges[3].network, Ipv4Addr::new(192, 168, 1, 192));
        assert_eq!(ranges[3].broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(ranges[3].index, 3);
    }

    #[test]
    fn test_enumerate_subnets_limit_and_jump() {
        let r = calculate_subnets("12.3.2.5", "255.0.0.0", 5).unwrap();
        let ranges = enumerate_subnets("12.3.2.5", &r, 3).unwrap();
        assert_eq!(ranges.len(), 3);
        assert_eq!(ranges[0].network, Ipv4Addr::new(12, 0, 0, 0));
        assert_eq!(ranges[1].network, Ipv4Addr::new(12, 32, 0, 0));
        assert_eq!(ranges[2].network, Ipv4Addr::new(12, 64, 0, 0));
        assert_eq!(
            u32::from(ranges[1].network) - u32::from(ranges[0].network),
            r.jump as u32
        );
    }

    #[test]
    fn test_enumerate_subnets_point_to_point() {
        let r = calculate_subnets("10.0.0.1", "255.255.255.252", 2).unwrap();
        let ranges = enumerate_subnets("10.0.0.1", &r, 16).unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[1].network, Ipv4Addr::new(10, 0, 0, 2));
        assert_eq!(ranges[1].first_host, None);
        assert_eq!(ranges[1].broadcast, Ipv4Addr::new(10, 0, 0, 3));
    }

    #[test]
    fn test_enumerate_subnets_last_block() {
        let r = calculate_subnets("255.255.255.1", "255.255.255.0", 2).unwrap();
        let ranges = enumerate_subnets("255.255.255.1", &r, 16).unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[1].broadcast, Ipv4Addr::BROADCAST);
    }
}
