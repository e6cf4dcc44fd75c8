//! Fixed-width and normalized dotted-decimal formatting.

use crate::models::Ipv4Address;

/// Zero pad every octet of `ip` to three digits ("1.2.13.224" -> "001.002.013.224").
///
/// Input that is not a valid address, such as "1.2.13.256", is returned unchanged.
pub fn get_fix_length_ipv4(ip: &str) -> String {
    match Ipv4Address::new(ip) {
        Ok(addr) => addr.to_fixed_width(),
        Err(e) => {
            log::debug!("get_fix_length_ipv4 left input as is: {e}");
            ip.to_string()
        }
    }
}

/// Strip leading zeros from every octet of `ip` ("001.002.013.224" -> "1.2.13.224").
///
/// Input that is not a valid address is returned unchanged.
pub fn get_normal_ipv4(ip: &str) -> String {
    match Ipv4Address::new(ip) {
        Ok(addr) => addr.to_string(),
        Err(e) => {
            log::debug!("get_normal_ipv4 left input as is: {e}");
            ip.to_string()
        }
    }
}
