//! Conversion between dotted-decimal strings and integer addresses.

use crate::models::Ipv4Address;
use colored::Colorize;

/// Returned by [`ipv4_string_to_long`] for input that is not an address.
pub const INVALID_IPV4_LONG: i64 = -1;

/// Convert a dotted-decimal address to its big-endian integer value.
///
/// # Arguments
/// * `ip` - Dotted-decimal address, leading zeros allowed
///
/// # Returns
/// The value in `[0, 4294967295]`, or [`INVALID_IPV4_LONG`] if `ip` is not valid.
pub fn ipv4_string_to_long(ip: &str) -> i64 {
    match Ipv4Address::new(ip) {
        Ok(addr) => {
            log::trace!("{ip} -> {}", addr.to_long());
            addr.to_long()
        }
        Err(e) => {
            log::debug!("ipv4_string_to_long({ip}): {e}", ip = ip.on_red());
            INVALID_IPV4_LONG
        }
    }
}

/// Convert an integer address back to normalized dotted-decimal.
///
/// Returns `None` for values outside `[0, 4294967295]`, which includes
/// [`INVALID_IPV4_LONG`].
pub fn ipv4_long_to_string(value: i64) -> Option<String> {
    match Ipv4Address::from_long(value) {
        Ok(addr) => {
            log::trace!("{value} -> {addr}");
            Some(addr.to_string())
        }
        Err(e) => {
            log::debug!("ipv4_long_to_string({value}): {e}");
            None
        }
    }
}
