//! IPv4 address toolkit.
//!
//! Pure functions over dotted-decimal strings: validation, conversion to and
//! from the 32-bit integer space, range enumeration, same-network checks,
//! formatting and local/public classification.
//!
//! The functions in [`toolkit`] never panic on bad input and report it in band.
//! The value types in [`models`] offer the same operations with `Result`s.
//!
//! ```
//! use ipv4_toolkit::{get_ipv4s_between, ipv4_string_to_long, is_same_ipv4_seg};
//!
//! assert_eq!(ipv4_string_to_long("127.0.0.1"), 2130706433);
//! assert_eq!(ipv4_string_to_long("127.0.0.256"), -1);
//! assert_eq!(get_ipv4s_between("10.0.0.2", "10.0.0.1"), vec!["10.0.0.1", "10.0.0.2"]);
//! assert!(is_same_ipv4_seg("255.255.255.0", &["1.2.3.4", "1.2.3.5"]));
//! ```

pub mod logging;
pub mod models;
pub mod toolkit;

pub use logging::init_logging;
pub use models::{AddressKind, Ipv4Address, Ipv4Range, Ipv4RangeIter, MAX_IPV4_LONG};
pub use toolkit::{
    get_fix_length_ipv4, get_ipv4s_between, get_normal_ipv4, ipv4_long_to_string,
    ipv4_string_to_long, is_local_ipv4, is_same_ipv4_seg, is_valid_ipv4, INVALID_IPV4_LONG,
    LARGE_RANGE_WARN,
};
