use core::fmt;
use core::net::{IpAddr, Ipv6Addr};

/// The version of an IP address, as determined by [`ip_version`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum IpVersion {
    V4 = 4,
    V6 = 6,
}

impl IpVersion {
    /// Returns the version number, `4` or `6`.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the version of an `Ipv6Addr`, which is `V4` when the address
    /// is IPv4-mapped (`::ffff:a.b.c.d`).
    pub const fn of_ipv6(addr: &Ipv6Addr) -> IpVersion {
        match addr.to_ipv4_mapped() {
            Some(_) => IpVersion::V4,
            None => IpVersion::V6,
        }
    }
}

impl From<IpVersion> for u8 {
    fn from(version: IpVersion) -> u8 {
        version.as_u8()
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_u8())
    }
}

/// Returns the version of an `IpAddr`.
///
/// An address is version 4 when it is a native `Ipv4Addr` or an `Ipv6Addr`
/// holding an IPv4-mapped address. Every other address is version 6.
///
/// # Examples
///
/// ```
/// use core::net::IpAddr;
/// use ipmath::{ip_version, IpVersion};
///
/// let v4: IpAddr = "192.168.1.1".parse().unwrap();
/// let mapped: IpAddr = "::ffff:192.168.1.1".parse().unwrap();
/// let v6: IpAddr = "fe80::1".parse().unwrap();
///
/// assert_eq!(ip_version(v4), IpVersion::V4);
/// assert_eq!(ip_version(mapped), IpVersion::V4);
/// assert_eq!(ip_version(v6), IpVersion::V6);
/// ```
pub const fn ip_version(addr: IpAddr) -> IpVersion {
    match addr {
        IpAddr::V4(_) => IpVersion::V4,
        IpAddr::V6(ref addr) => IpVersion::of_ipv6(addr),
    }
}
