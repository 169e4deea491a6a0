//! Arithmetic and ordering for IPv4 and IPv6 addresses.
//!
//! The functions and the [`IpOffset`] trait build on the `IpAddr`,
//! `Ipv4Addr` and `Ipv6Addr` types of the standard library. Offsets are
//! arbitrary-precision [`BigInt`]s and results never wrap: moving an
//! address outside its family's range returns a [`RangeError`].
//!
//! IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are treated as IPv4
//! addresses throughout.
//!
//! # Features
//!
//! * `std` (default): implements the standard library's integrations of
//!   the big integer and error types. Without it the crate only needs
//!   `core` and `alloc`.
//! * `tracing`: emits `trace` level events when an operation is rejected.

#![no_std]

extern crate alloc;

pub use self::cmp::{ip_cmp, ip_cmp_sign};
pub use self::error::{Error, RangeError, VersionMismatchError};
pub use self::ipext::{ip_add, ip_sub, IpOffset};
pub use self::version::{ip_version, IpVersion};
pub use num_bigint::BigInt;

mod cmp;
mod error;
mod ipext;
mod version;
