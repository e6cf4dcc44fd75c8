//! Inclusive IPv4 address ranges.

use super::Ipv4Address;
use std::error::Error;
use std::ops::RangeInclusive;

/// Inclusive range `[lo, hi]` of IPv4 addresses.
///
/// The bounds are sorted on construction, so the order the two ends are given in
/// never matters.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct Ipv4Range {
    lo: Ipv4Address,
    hi: Ipv4Address,
}

impl Ipv4Range {
    pub fn new(a: Ipv4Address, b: Ipv4Address) -> Ipv4Range {
        Ipv4Range {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    /// Build a range from two dotted-decimal strings, in either order.
    pub fn parse(a: &str, b: &str) -> Result<Ipv4Range, Box<dyn Error>> {
        Ok(Ipv4Range::new(Ipv4Address::new(a)?, Ipv4Address::new(b)?))
    }

    pub fn lo(&self) -> Ipv4Address {
        self.lo
    }

    pub fn hi(&self) -> Ipv4Address {
        self.hi
    }

    /// Number of addresses in the range, never zero.
    pub fn num_addresses(&self) -> u64 {
        u64::from(u32::from(self.hi)) - u64::from(u32::from(self.lo)) + 1
    }

    pub fn contains(&self, addr: Ipv4Address) -> bool {
        addr >= self.lo && addr <= self.hi
    }

    /// Iterate every address in the range in ascending order.
    pub fn iter(&self) -> Ipv4RangeIter {
        Ipv4RangeIter {
            inner: u32::from(self.lo)..=u32::from(self.hi),
        }
    }
}

impl std::fmt::Display for Ipv4Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

impl<'a> IntoIterator for &'a Ipv4Range {
    type Item = Ipv4Address;
    type IntoIter = Ipv4RangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over an [`Ipv4Range`].
#[derive(Debug, Clone)]
pub struct Ipv4RangeIter {
    inner: RangeInclusive<u32>,
}

impl Iterator for Ipv4RangeIter {
    type Item = Ipv4Address;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Ipv4Address::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Ipv4RangeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Ipv4Address::from)
    }
}
