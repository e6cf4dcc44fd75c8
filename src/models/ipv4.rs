//! IPv4 address value type.
//!
//! Provides [`Ipv4Address`], a dotted-decimal address stored as its big-endian
//! 32-bit integer, plus the parser every other part of the crate validates with.

use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Largest integer value of an IPv4 address (`255.255.255.255`).
pub const MAX_IPV4_LONG: i64 = u32::MAX as i64;

lazy_static! {
    // ASCII digits only, `\d` would also accept other Unicode digits.
    static ref DOTTED_DECIMAL: Regex =
        Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Invalid Regex?");
}

/// Split a dotted-decimal string into its four octets.
///
/// Leading zeros are accepted and read as decimal. Returns `None` for anything
/// else, including runs of digits too long to fit an integer.
pub(crate) fn parse_octets(ip: &str) -> Option<[u8; 4]> {
    let caps = DOTTED_DECIMAL.captures(ip)?;
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        *octet = caps.get(i + 1)?.as_str().parse().ok()?;
    }
    Some(octets)
}

/// Classification of an address for local/public checks.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub enum AddressKind {
    /// `127.0.0.0/8`
    Loopback,
    /// `10.0.0.0/8`, `172.16.0.0/12` or `192.168.0.0/16`
    Private,
    Public,
}

impl std::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            AddressKind::Loopback => "loopback",
            AddressKind::Private => "private",
            AddressKind::Public => "public",
        };
        write!(f, "{name}")
    }
}

/// IPv4 address held as its big-endian integer value.
///
/// Ordering follows the integer value, so `1.2.3.4 < 1.2.3.10`.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4Address {
    bits: u32,
}

impl Ipv4Address {
    /// Parse a dotted-decimal string (e.g. "192.168.0.1" or "127.0.0.01").
    ///
    /// # Examples
    /// ```
    /// use ipv4_toolkit::Ipv4Address;
    /// let ip = Ipv4Address::new("010.000.000.001").unwrap();
    /// assert_eq!(ip.to_string(), "10.0.0.1");
    /// ```
    pub fn new(ip: &str) -> Result<Ipv4Address, Box<dyn Error>> {
        let octets = parse_octets(ip).ok_or_else(|| format!("Invalid address {ip:?}"))?;
        Ok(Ipv4Address::from(octets))
    }

    /// Build an address from its integer value, which must lie in `[0, MAX_IPV4_LONG]`.
    pub fn from_long(value: i64) -> Result<Ipv4Address, Box<dyn Error>> {
        let bits = u32::try_from(value)
            .map_err(|_| format!("Value {value} is outside the IPv4 range 0..={MAX_IPV4_LONG}"))?;
        Ok(Ipv4Address { bits })
    }

    /// Integer value, always in `[0, MAX_IPV4_LONG]`.
    pub fn to_long(&self) -> i64 {
        i64::from(self.bits)
    }

    pub fn octets(&self) -> [u8; 4] {
        self.bits.to_be_bytes()
    }

    /// Dotted-decimal with every octet zero padded to three digits.
    pub fn to_fixed_width(&self) -> String {
        let [a, b, c, d] = self.octets();
        format!("{a:03}.{b:03}.{c:03}.{d:03}")
    }

    /// Bitwise AND with `mask`. The mask bits need not be contiguous.
    pub fn masked(&self, mask: Ipv4Address) -> Ipv4Address {
        Ipv4Address {
            bits: self.bits & mask.bits,
        }
    }

    pub fn is_loopback(&self) -> bool {
        Ipv4Addr::from(*self).is_loopback()
    }

    pub fn is_private(&self) -> bool {
        Ipv4Addr::from(*self).is_private()
    }

    /// Loopback or private.
    pub fn is_local(&self) -> bool {
        self.kind() != AddressKind::Public
    }

    pub fn kind(&self) -> AddressKind {
        if self.is_loopback() {
            AddressKind::Loopback
        } else if self.is_private() {
            AddressKind::Private
        } else {
            AddressKind::Public
        }
    }
}

impl FromStr for Ipv4Address {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Address::new(s)
    }
}

impl From<u32> for Ipv4Address {
    fn from(bits: u32) -> Self {
        Ipv4Address { bits }
    }
}

impl From<Ipv4Address> for u32 {
    fn from(addr: Ipv4Address) -> Self {
        addr.bits
    }
}

impl From<[u8; 4]> for Ipv4Address {
    fn from(octets: [u8; 4]) -> Self {
        Ipv4Address {
            bits: u32::from_be_bytes(octets),
        }
    }
}

impl From<Ipv4Addr> for Ipv4Address {
    fn from(addr: Ipv4Addr) -> Self {
        Ipv4Address {
            bits: u32::from(addr),
        }
    }
}

impl From<Ipv4Address> for Ipv4Addr {
    fn from(addr: Ipv4Address) -> Self {
        Ipv4Addr::from(addr.bits)
    }
}

impl std::fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [a, b, c, d] = self.octets();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4Address::new(&s).map_err(|_| de::Error::custom(format!("invalid IP address: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_octets() {
        assert_eq!(parse_octets("192.168.0.1"), Some([192, 168, 0, 1]));
        assert_eq!(parse_octets("127.0.0.01"), Some([127, 0, 0, 1]));
        assert_eq!(parse_octets("255.255.255.255"), Some([255, 255, 255, 255]));
        assert_eq!(parse_octets("0.0.0.0"), Some([0, 0, 0, 0]));
        // decimal, never octal
        assert_eq!(parse_octets("010.0.0.08"), Some([10, 0, 0, 8]));
    }

    #[test]
    fn test_parse_octets_rejects() {
        assert_eq!(parse_octets(""), None);
        assert_eq!(parse_octets("..."), None);
        assert_eq!(parse_octets("0.0.0.0.0"), None);
        assert_eq!(parse_octets("1.2.3"), None);
        assert_eq!(parse_octets("1.2.3."), None);
        assert_eq!(parse_octets(".1.2.3"), None);
        assert_eq!(parse_octets("192.168.0.256"), None);
        assert_eq!(parse_octets("1.2.3.-4"), None);
        assert_eq!(parse_octets("1.2.3.+4"), None);
        assert_eq!(parse_octets(" 1.2.3.4"), None);
        assert_eq!(parse_octets("1.2.3.4\n"), None);
        assert_eq!(parse_octets("1.2.3.a"), None);
        assert_eq!(parse_octets("1.2.3.99999999999999999999999"), None);
        // Arabic-Indic digit one
        assert_eq!(parse_octets("1.2.3.\u{0661}"), None);
    }

    #[test]
    fn test_new_error_message() {
        let err = Ipv4Address::new("1.2.3.256").unwrap_err();
        assert_eq!(err.to_string(), "Invalid address \"1.2.3.256\"");
    }

    #[test]
    fn test_from_long() {
        assert_eq!(Ipv4Address::from_long(0).unwrap().to_string(), "0.0.0.0");
        assert_eq!(
            Ipv4Address::from_long(MAX_IPV4_LONG).unwrap().to_string(),
            "255.255.255.255"
        );
        assert_eq!(
            Ipv4Address::from_long(2130706433).unwrap().to_string(),
            "127.0.0.1"
        );
        assert!(Ipv4Address::from_long(-1).is_err());
        assert!(Ipv4Address::from_long(MAX_IPV4_LONG + 1).is_err());
        assert!(Ipv4Address::from_long(99999999999).is_err());
    }

    #[test]
    fn test_to_long() {
        let ip = Ipv4Address::new("192.168.1.42").unwrap();
        assert_eq!(ip.to_long(), 3232235818);
        assert_eq!(ip.octets(), [192, 168, 1, 42]);
        // above 128.0.0.0 stays positive
        assert_eq!(Ipv4Address::new("128.0.0.0").unwrap().to_long(), 2147483648);
    }

    #[test]
    fn test_fixed_width() {
        let ip = Ipv4Address::new("1.2.13.224").unwrap();
        assert_eq!(ip.to_fixed_width(), "001.002.013.224");
        assert_eq!(ip.to_string(), "1.2.13.224");
    }

    #[test]
    fn test_masked() {
        let mask = Ipv4Address::new("255.255.255.0").unwrap();
        let ip = Ipv4Address::new("10.1.2.77").unwrap();
        assert_eq!(ip.masked(mask), Ipv4Address::new("10.1.2.0").unwrap());
        // non-contiguous mask is just ANDed
        let odd = Ipv4Address::new("255.0.255.0").unwrap();
        assert_eq!(ip.masked(odd), Ipv4Address::new("10.0.2.0").unwrap());
    }

    #[test]
    fn test_kind() {
        let kind = |s: &str| Ipv4Address::new(s).unwrap().kind();
        assert_eq!(kind("127.0.0.1"), AddressKind::Loopback);
        assert_eq!(kind("127.255.0.9"), AddressKind::Loopback);
        assert_eq!(kind("192.168.0.123"), AddressKind::Private);
        assert_eq!(kind("10.20.30.40"), AddressKind::Private);
        assert_eq!(kind("172.16.0.1"), AddressKind::Private);
        assert_eq!(kind("172.31.255.255"), AddressKind::Private);
        assert_eq!(kind("172.32.0.1"), AddressKind::Public);
        assert_eq!(kind("169.254.1.1"), AddressKind::Public);
        assert_eq!(kind("220.160.156.242"), AddressKind::Public);
        assert_eq!(AddressKind::Loopback.to_string(), "loopback");
    }

    #[test]
    fn test_ord() {
        let ip1 = Ipv4Address::new("1.2.3.4").unwrap();
        let ip2 = Ipv4Address::new("1.2.3.10").unwrap();
        let ip3 = Ipv4Address::new("200.0.0.0").unwrap();
        assert!(ip1 < ip2);
        assert!(ip2 < ip3);
        assert_eq!(ip1, "001.2.3.4".parse::<Ipv4Address>().unwrap());
    }

    #[test]
    fn test_std_conversions() {
        let std_ip = Ipv4Addr::new(10, 0, 0, 1);
        let ip = Ipv4Address::from(std_ip);
        assert_eq!(u32::from(ip), 0x0A000001);
        assert_eq!(Ipv4Addr::from(ip), std_ip);
        assert_eq!(Ipv4Address::from(0x0A000001u32), ip);
    }

    #[test]
    fn test_serde() {
        let ip = Ipv4Address::new("010.001.002.003").unwrap();
        let json = serde_json::to_string(&ip).unwrap();
        assert_eq!(json, "\"10.1.2.3\"");
        let back: Ipv4Address = serde_json::from_str("\"010.001.002.003\"").unwrap();
        assert_eq!(back, ip);

        let err = serde_json::from_str::<Ipv4Address>("\"10.1.2.300\"").unwrap_err();
        assert!(err.to_string().contains("invalid IP address: 10.1.2.300"));
    }
}
