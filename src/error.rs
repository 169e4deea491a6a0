use crate::IpVersion;
use core::net::IpAddr;
use num_bigint::BigInt;
use thiserror::Error;

/// An error which can be returned when comparing two addresses of
/// different IP versions.
///
/// The argument order of the failed call is preserved: `left` is the first
/// address that was passed to [`ip_cmp`](crate::ip_cmp).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("can't compare IPv{left_version} address \"{left}\" with IPv{right_version} address \"{right}\"")]
pub struct VersionMismatchError {
    pub left: IpAddr,
    pub left_version: IpVersion,
    pub right: IpAddr,
    pub right_version: IpVersion,
}

/// An error which can be returned when adding an offset to, or subtracting
/// an offset from, an address would leave the range of its address family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The offset does not fit the 64-bit signed arithmetic used for IPv4.
    #[error("{offset} is outside IPv4 address boundary")]
    Ipv4Offset { offset: BigInt },
    #[error("result outside valid IPv4 address boundary")]
    Ipv4Result,
    #[error("result outside IPv6 address boundary")]
    Ipv6Result,
}

impl RangeError {
    /// Returns the version of the address family whose boundary was
    /// violated.
    pub fn version(&self) -> IpVersion {
        match self {
            RangeError::Ipv4Offset { .. } | RangeError::Ipv4Result => IpVersion::V4,
            RangeError::Ipv6Result => IpVersion::V6,
        }
    }
}

/// Any error returned by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    VersionMismatch(#[from] VersionMismatchError),
    #[error(transparent)]
    Range(#[from] RangeError),
}
