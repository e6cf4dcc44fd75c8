//! Dotted-decimal validation.

use crate::models::parse_octets;
use colored::Colorize;

/// Check whether `ip` is a dotted-decimal IPv4 address.
///
/// Four dot-separated runs of ASCII digits, each with a value of at most 255.
/// Leading zeros are allowed, surrounding whitespace is not. Never panics.
pub fn is_valid_ipv4(ip: &str) -> bool {
    let valid = parse_octets(ip).is_some();
    if !valid {
        log::debug!("Not a dotted-decimal IPv4 address: {ip}", ip = ip.on_red());
    }
    valid
}
