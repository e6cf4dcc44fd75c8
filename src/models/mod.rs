//! Value types for IPv4 addresses.
//!
//! - [`Ipv4Address`] - a single address held as its 32-bit integer value
//! - [`Ipv4Range`] - an inclusive, order-normalized range of addresses
//! - [`AddressKind`] - loopback/private/public classification

mod ipv4;
mod range;

pub(crate) use ipv4::parse_octets;
pub use ipv4::{AddressKind, Ipv4Address, MAX_IPV4_LONG};
pub use range::{Ipv4Range, Ipv4RangeIter};
