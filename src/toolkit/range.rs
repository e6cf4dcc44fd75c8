//! Enumeration of every address between two ends.

use crate::models::Ipv4Range;
use colored::Colorize;

/// Ranges larger than this are logged as a warning before being materialized.
pub const LARGE_RANGE_WARN: u64 = 65_536;

/// List every address between `start` and `end`, inclusive and ascending.
///
/// # Arguments
/// * `start` - One end of the range
/// * `end` - The other end; may be lower than `start`
///
/// # Returns
/// The normalized dotted-decimal addresses, or an empty list if either end is
/// blank or not a valid address. The whole list is allocated up front, so the
/// caller bounds the size of the range.
pub fn get_ipv4s_between(start: &str, end: &str) -> Vec<String> {
    if start.trim().is_empty() || end.trim().is_empty() {
        log::debug!("get_ipv4s_between: blank start={start:?} or end={end:?}");
        return Vec::new();
    }
    let range = match Ipv4Range::parse(start, end) {
        Ok(range) => range,
        Err(e) => {
            log::debug!(
                "get_ipv4s_between({start}, {end}): {e}",
                start = start.on_red(),
                end = end.on_red()
            );
            return Vec::new();
        }
    };

    let count = range.num_addresses();
    if count > LARGE_RANGE_WARN {
        log::warn!("Enumerating {count} addresses for range {range}");
    }
    range.iter().map(|ip| ip.to_string()).collect()
}
