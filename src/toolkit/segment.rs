//! Same-network checks under a bit mask.

use crate::models::Ipv4Address;
use colored::Colorize;
use itertools::Itertools;
use std::error::Error;

/// Check whether every address in `ips` falls in the same network under `mask`.
///
/// Each address is ANDed with the mask and the results compared. The mask is
/// any dotted-decimal value; its bits need not be contiguous.
///
/// Returns `false` if `ips` is empty, if the mask or any address is invalid.
/// A single valid address is always in the same network as itself.
pub fn is_same_ipv4_seg<S: AsRef<str>>(mask: &str, ips: &[S]) -> bool {
    if ips.is_empty() {
        log::debug!("is_same_ipv4_seg({mask}): no addresses given");
        return false;
    }
    match networks(mask, ips) {
        Ok(nets) => nets.iter().all_equal(),
        Err(e) => {
            log::debug!("is_same_ipv4_seg({mask}): {e}", mask = mask.on_red());
            false
        }
    }
}

fn networks<S: AsRef<str>>(mask: &str, ips: &[S]) -> Result<Vec<Ipv4Address>, Box<dyn Error>> {
    let mask = Ipv4Address::new(mask).map_err(|e| format!("mask: {e}"))?;
    ips.iter()
        .map(|ip| Ipv4Address::new(ip.as_ref()).map(|addr| addr.masked(mask)))
        .collect()
}
