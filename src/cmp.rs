use crate::{ip_version, VersionMismatchError};
use core::cmp::Ordering;
use core::net::IpAddr;

/// Expands an address to its 16 byte form, promoting IPv4 addresses to
/// IPv4-mapped IPv6 addresses.
fn to_octets16(addr: IpAddr) -> [u8; 16] {
    match addr {
        IpAddr::V4(a) => a.to_ipv6_mapped().octets(),
        IpAddr::V6(a) => a.octets(),
    }
}

/// Compares two addresses of the same IP version.
///
/// Both addresses are expanded to 16 bytes and compared most significant
/// byte first, so the order matches their numeric value. An IPv4 address
/// and its IPv4-mapped IPv6 form compare equal.
///
/// # Errors
/// If the addresses are of different versions this will return a
/// `VersionMismatchError`.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use core::net::IpAddr;
/// use ipmath::ip_cmp;
///
/// let a: IpAddr = "192.168.1.1".parse().unwrap();
/// let b: IpAddr = "192.168.1.20".parse().unwrap();
/// let c: IpAddr = "fe80::dead:beef".parse().unwrap();
///
/// assert_eq!(ip_cmp(a, b), Ok(Ordering::Less));
/// assert_eq!(ip_cmp(b, a), Ok(Ordering::Greater));
/// assert!(ip_cmp(c, b).is_err());
/// ```
pub fn ip_cmp(left: IpAddr, right: IpAddr) -> Result<Ordering, VersionMismatchError> {
    let left_version = ip_version(left);
    let right_version = ip_version(right);
    if left_version != right_version {
        #[cfg(feature = "tracing")]
        tracing::trace!(%left, %right, "rejecting comparison across IP versions");
        return Err(VersionMismatchError {
            left,
            left_version,
            right,
            right_version,
        });
    }
    Ok(to_octets16(left).cmp(&to_octets16(right)))
}

/// Like [`ip_cmp`], but returns `-1`, `0` or `1`.
///
/// # Errors
/// If the addresses are of different versions this will return a
/// `VersionMismatchError`.
pub fn ip_cmp_sign(left: IpAddr, right: IpAddr) -> Result<i32, VersionMismatchError> {
    ip_cmp(left, right).map(|ord| ord as i32)
}
