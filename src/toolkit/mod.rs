//! Sentinel-style IPv4 operations on strings.
//!
//! None of these functions panic or return an error. Invalid input is reported
//! in band: `false`, [`INVALID_IPV4_LONG`], `None`, an empty list, or the input
//! string returned unchanged.
//!
//! - [`validate`] - dotted-decimal validation
//! - [`convert`] - string <-> integer conversion
//! - [`range`] - enumeration of an address range
//! - [`segment`] - same-network check under a mask
//! - [`format`] - fixed-width and normalized formatting
//! - [`classify`] - loopback/private classification

mod classify;
mod convert;
mod format;
mod range;
mod segment;
mod validate;

pub use classify::is_local_ipv4;
pub use convert::{ipv4_long_to_string, ipv4_string_to_long, INVALID_IPV4_LONG};
pub use format::{get_fix_length_ipv4, get_normal_ipv4};
pub use range::{get_ipv4s_between, LARGE_RANGE_WARN};
pub use segment::is_same_ipv4_seg;
pub use validate::is_valid_ipv4;
