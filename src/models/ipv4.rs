//! IPv4 address and subnet mask utilities.
//!
//! Validation, classful classification and mask/prefix conversions work on the
//! dotted-decimal text the user typed. The `*_addr` helpers work on [`Ipv4Addr`]
//! once the text has been validated.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::error::Error;
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

lazy_static! {
    static ref OCTET_RE: Regex = Regex::new(r"^[0-9]+$").expect("Invalid Regex?");
    // No 0 may come before a 1.
    static ref CONTIGUOUS_MASK_RE: Regex = Regex::new(r"^1*0*$").expect("Invalid Regex?");
}

/// Legacy classful address class, decided by the first octet only.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IpClass {
    A,
    B,
    C,
    Unknown,
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            IpClass::A => "A",
            IpClass::B => "B",
            IpClass::C => "C",
            IpClass::Unknown => "Unknown",
        };
        write!(f, "{s}")
    }
}

/// Split dotted-decimal text into four octets.
///
/// Returns `None` unless there are exactly 4 parts, each ASCII digits with a value
/// in 0..=255. Leading zeros are allowed and whitespace around a part is ignored.
pub fn parse_octets(s: &str) -> Option<[u8; 4]> {
    let parts: Vec<&str> = s.split('.').map(str::trim).collect();
    if parts.len() != 4 {
        return None;
    }
    let mut octets = [0u8; 4];
    for (i, part) in parts.iter().enumerate() {
        if !OCTET_RE.is_match(part) {
            return None;
        }
        octets[i] = part.parse().ok()?;
    }
    Some(octets)
}

/// Check that `s` is a dotted-decimal IPv4 address.
///
/// # Examples
/// ```
/// use subnet_calculator::models::is_valid_ip;
/// assert!(is_valid_ip("192.168.1.1"));
/// assert!(!is_valid_ip("256.1.1.1"));
/// assert!(!is_valid_ip("1.2.3"));
/// ```
pub fn is_valid_ip(s: &str) -> bool {
    parse_octets(s).is_some()
}

/// Binary expansion of the four octets, MSB first, 32 characters.
fn mask_bit_string(octets: [u8; 4]) -> String {
    octets.iter().map(|o| format!("{o:08b}")).collect()
}

/// Check that `s` is a valid address whose bits are left-aligned contiguous ones.
///
/// # Examples
/// ```
/// use subnet_calculator::models::is_valid_mask;
/// assert!(is_valid_mask("255.255.255.0"));
/// assert!(!is_valid_mask("255.0.255.0"));
/// ```
pub fn is_valid_mask(s: &str) -> bool {
    match parse_octets(s) {
        Some(octets) => {
            let binary = mask_bit_string(octets);
            log::trace!("is_valid_mask({s}) binary={binary}");
            CONTIGUOUS_MASK_RE.is_match(&binary)
        }
        None => false,
    }
}

/// Classify an address by its first octet (1-126 A, 128-191 B, 192-223 C).
///
/// Loopback (127), 0 and everything from 224 up are `Unknown`.
pub fn get_ip_class(ip: &str) -> IpClass {
    let first_octet: Option<u32> = ip
        .split('.')
        .next()
        .and_then(|p| p.trim().parse().ok());
    match first_octet {
        Some(1..=126) => IpClass::A,
        Some(128..=191) => IpClass::B,
        Some(192..=223) => IpClass::C,
        _ => IpClass::Unknown,
    }
}

/// Default classful mask. Anything that is not A or B gets the class C mask.
pub fn get_default_mask(class: IpClass) -> Ipv4Addr {
    match class {
        IpClass::A => Ipv4Addr::new(255, 0, 0, 0),
        IpClass::B => Ipv4Addr::new(255, 255, 0, 0),
        IpClass::C | IpClass::Unknown => Ipv4Addr::new(255, 255, 255, 0),
    }
}

/// Count the set bits of a dotted mask, octet by octet.
///
/// Contiguity is not checked: `255.0.255.0` gives 16. Use [`is_valid_mask`] first
/// when that matters.
pub fn mask_to_cidr(mask: &str) -> Result<u8, Box<dyn Error>> {
    let octets = parse_octets(mask).ok_or_else(|| format!("Invalid mask {mask}"))?;
    let cidr: u32 = octets.iter().map(|o| o.count_ones()).sum();
    Ok(cidr as u8)
}

/// Convert a prefix length to a dotted mask.
///
/// Each octet gets `clamp(len - 8*i, 0, 8)` leading ones.
///
/// # Examples
/// ```
/// use subnet_calculator::models::cidr_to_mask;
/// assert_eq!(cidr_to_mask(24).unwrap().to_string(), "255.255.255.0");
/// assert_eq!(cidr_to_mask(11).unwrap().to_string(), "255.224.0.0");
/// ```
pub fn cidr_to_mask(len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    if len > MAX_LENGTH {
        return Err("Network length is too long".into());
    }
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let bits = (len as i16 - 8 * i as i16).clamp(0, 8) as u32;
        *octet = (256u16 - (1u16 << (8 - bits))) as u8;
    }
    Ok(Ipv4Addr::from(octets))
}

/// Prefix length as a u32 bit mask, e.g. /24 is `0xFFFFFF00`.
pub fn get_cidr_mask(len: u8) -> Result<u32, Box<dyn Error>> {
    Ok(u32::from(cidr_to_mask(len)?))
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Returns the network address of the subnet following the one containing `addr`.
///
/// Errors when the next subnet would run past 255.255.255.255.
pub fn ip_after_subnet(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, Box<dyn Error>> {
    let subnet_size = 1u64 << (MAX_LENGTH - len.min(MAX_LENGTH));
    let network_bits = u32::from(cut_addr(addr, len)?) as u64;
    let next_subnet_bits = network_bits + subnet_size;
    let next = u32::try_from(next_subnet_bits).map_err(|_| "Next subnet calculation overflowed")?;
    Ok(Ipv4Addr::from(next))
}
