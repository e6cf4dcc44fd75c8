//! Loopback and private address classification.

use crate::models::Ipv4Address;

/// Check whether `ip` is a loopback or private address.
///
/// Local means `127.0.0.0/8`, `10.0.0.0/8`, `172.16.0.0/12` or `192.168.0.0/16`.
/// Link-local `169.254.0.0/16` and invalid input are not local.
pub fn is_local_ipv4(ip: &str) -> bool {
    match Ipv4Address::new(ip) {
        Ok(addr) => {
            log::trace!("{addr} is {}", addr.kind());
            addr.is_local()
        }
        Err(e) => {
            log::debug!("is_local_ipv4: {e}");
            false
        }
    }
}
