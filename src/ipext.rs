//! Extensions to the standard IP address types for offset arithmetic.

use crate::RangeError;
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Provides `checked_add_offset()` and `checked_sub_offset()` methods for
/// `Ipv4Addr`, `Ipv6Addr` and `IpAddr`.
///
/// The offset is an arbitrary-precision signed integer. Results never wrap:
/// leaving the range of the address family is reported as a `RangeError`.
/// IPv4-mapped `Ipv6Addr`s are moved as IPv4 addresses and stay mapped.
///
/// # Examples
///
/// ```
/// use core::net::{Ipv4Addr, Ipv6Addr};
/// use ipmath::{BigInt, IpOffset};
///
/// let ip4: Ipv4Addr = "192.168.1.1".parse().unwrap();
/// let ip6: Ipv6Addr = "fe80::dead:beef".parse().unwrap();
/// let n = BigInt::from(20);
///
/// assert_eq!(ip4.checked_add_offset(&n), Ok("192.168.1.21".parse().unwrap()));
/// assert_eq!(ip6.checked_add_offset(&n), Ok("fe80::dead:bf03".parse().unwrap()));
/// assert_eq!(ip6.checked_sub_offset(&n), Ok("fe80::dead:bedb".parse().unwrap()));
/// assert!(Ipv4Addr::BROADCAST.checked_add_offset(&BigInt::from(1)).is_err());
/// ```
pub trait IpOffset: Sized {
    /// Returns `self + offset`.
    ///
    /// # Errors
    /// If the result is outside the address family's range, or the offset
    /// is outside the range of IPv4 arithmetic, this will return a
    /// `RangeError`.
    fn checked_add_offset(self, offset: &BigInt) -> Result<Self, RangeError>;

    /// Returns `self - offset`.
    ///
    /// # Errors
    /// Same as `checked_add_offset()` with the negated offset.
    fn checked_sub_offset(self, offset: &BigInt) -> Result<Self, RangeError> {
        self.checked_add_offset(&-offset)
    }
}

impl IpOffset for Ipv4Addr {
    fn checked_add_offset(self, offset: &BigInt) -> Result<Self, RangeError> {
        let delta = match offset.to_i64() {
            Some(delta) => delta,
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(addr = %self, %offset, "offset outside IPv4 arithmetic");
                return Err(RangeError::Ipv4Offset {
                    offset: offset.clone(),
                });
            }
        };

        i64::from(u32::from(self))
            .checked_add(delta)
            .and_then(|value| u32::try_from(value).ok())
            .map(Ipv4Addr::from)
            .ok_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::trace!(addr = %self, %offset, "result outside IPv4 range");
                RangeError::Ipv4Result
            })
    }
}

impl IpOffset for Ipv6Addr {
    fn checked_add_offset(self, offset: &BigInt) -> Result<Self, RangeError> {
        if let Some(v4) = self.to_ipv4_mapped() {
            return v4.checked_add_offset(offset).map(|v4| v4.to_ipv6_mapped());
        }

        let value = BigInt::from(u128::from(self)) + offset;
        // Negative values and values wider than 128 bits are both rejected.
        value.to_u128().map(Ipv6Addr::from).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(addr = %self, %offset, "result outside IPv6 range");
            RangeError::Ipv6Result
        })
    }
}

impl IpOffset for IpAddr {
    fn checked_add_offset(self, offset: &BigInt) -> Result<Self, RangeError> {
        match self {
            IpAddr::V4(a) => a.checked_add_offset(offset).map(IpAddr::V4),
            IpAddr::V6(a) => a.checked_add_offset(offset).map(IpAddr::V6),
        }
    }
}

/// Adds `offset` to an address.
///
/// IPv4 addresses (native or IPv4-mapped) are moved using 64-bit signed
/// arithmetic and must land in `0.0.0.0..=255.255.255.255`. IPv6 addresses
/// are moved using arbitrary-precision arithmetic and must land in
/// `::..=ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff`. The result has the same
/// shape as `addr`.
///
/// # Errors
/// If the offset does not fit in an `i64` for an IPv4 address, or the result
/// is outside the address family's range, this will return a `RangeError`.
///
/// # Examples
///
/// ```
/// use core::net::IpAddr;
/// use ipmath::{ip_add, BigInt, RangeError};
///
/// let ip: IpAddr = "192.168.1.1".parse().unwrap();
/// assert_eq!(ip_add(ip, &BigInt::from(20)), Ok("192.168.1.21".parse().unwrap()));
///
/// let ip: IpAddr = "::".parse().unwrap();
/// assert_eq!(ip_add(ip, &BigInt::from(-1)), Err(RangeError::Ipv6Result));
/// ```
pub fn ip_add(addr: IpAddr, offset: &BigInt) -> Result<IpAddr, RangeError> {
    addr.checked_add_offset(offset)
}

/// Subtracts `offset` from an address, that is `ip_add(addr, -offset)`.
///
/// # Errors
/// Same as [`ip_add`] with the negated offset.
///
/// # Examples
///
/// ```
/// use core::net::IpAddr;
/// use ipmath::{ip_sub, BigInt};
///
/// let ip: IpAddr = "fe80::dead:bf03".parse().unwrap();
/// assert_eq!(ip_sub(ip, &BigInt::from(20)), Ok("fe80::dead:beef".parse().unwrap()));
/// ```
pub fn ip_sub(addr: IpAddr, offset: &BigInt) -> Result<IpAddr, RangeError> {
    addr.checked_sub_offset(offset)
}
