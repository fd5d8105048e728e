//! Conversion between the textual CIDR notation, [`IpNet`] and branch paths in the tree.

use std::net::{Ipv4Addr, Ipv6Addr};

use ipnet::{IpNet, Ipv4Net, Ipv6Net};

use crate::{Error, Result};

/// Address family used to report the prefixes found while walking the tree.
///
/// IPv4 and IPv6 prefixes share one tree, so a branch path alone does not tell which family it
/// was inserted with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WalkFamily {
    /// Report paths of at most 32 bits as IPv4 networks. Deeper nodes are neither reported nor
    /// entered.
    V4,
    /// Report every path as an IPv6 network.
    V6,
    /// Report paths of at most 32 bits as IPv4, longer ones as IPv6.
    #[default]
    Auto,
}

impl WalkFamily {
    /// The network described by the first `depth` bits of `path`, if this family can express it.
    pub(crate) fn net(self, path: u128, depth: u8) -> Option<IpNet> {
        match self {
            WalkFamily::V4 | WalkFamily::Auto if depth <= 32 => {
                Ipv4Net::new(Ipv4Addr::from((path >> 96) as u32), depth)
                    .ok()
                    .map(IpNet::V4)
            }
            WalkFamily::V4 => None,
            WalkFamily::V6 | WalkFamily::Auto => {
                Ipv6Net::new(Ipv6Addr::from(path), depth).ok().map(IpNet::V6)
            }
        }
    }

    /// Whether nodes of the given depth may have children this family can express.
    pub(crate) fn descends(self, depth: u8) -> bool {
        !(self == WalkFamily::V4 && depth >= 32)
    }
}

/// Extend a branch path (most significant bit first) by one bit at position `depth`.
#[inline(always)]
pub(crate) fn branch(path: u128, depth: u8, right: bool) -> u128 {
    if right {
        path | (1u128 << (127 - u32::from(depth)))
    } else {
        path
    }
}

/// Parse a CIDR in textual form.
///
/// Text with a dot after its first character is read as a dotted-quad IPv4 address, anything
/// else as an IPv6 address. An optional `/bits` suffix gives the prefix length, which defaults to
/// the full width of the family (`/32` or `/128`). Host bits after the prefix length are kept.
///
/// ```
/// # use ip_radix::*;
/// assert_eq!(parse_cidr("1.2.3.0/24"), Ok("1.2.3.0/24".parse().unwrap()));
/// assert_eq!(parse_cidr("1.2.3.4"), Ok("1.2.3.4/32".parse().unwrap()));
/// assert_eq!(parse_cidr("dead::/16"), Ok("dead::/16".parse().unwrap()));
/// assert_eq!(parse_cidr("dead::beef"), Ok("dead::beef/128".parse().unwrap()));
/// assert_eq!(parse_cidr("1.2.3.4/33"), Err(Error::BadIp));
/// assert_eq!(parse_cidr("1.2.3.256"), Err(Error::BadIp));
/// ```
pub fn parse_cidr(text: &str) -> Result<IpNet> {
    let (addr, len) = match text.split_once('/') {
        Some((addr, len)) => (addr, Some(len)),
        None => (text, None),
    };
    if text.find('.').map_or(false, |pos| pos > 0) {
        let addr: Ipv4Addr = addr.parse().map_err(|_| Error::BadIp)?;
        let len = parse_len(len, 32)?;
        Ipv4Net::new(addr, len)
            .map(IpNet::V4)
            .map_err(|_| Error::BadIp)
    } else {
        let addr: Ipv6Addr = addr.parse().map_err(|_| Error::BadIp)?;
        let len = parse_len(len, 128)?;
        Ipv6Net::new(addr, len)
            .map(IpNet::V6)
            .map_err(|_| Error::BadIp)
    }
}

fn parse_len(text: Option<&str>, max: u8) -> Result<u8> {
    let Some(text) = text else {
        return Ok(max);
    };
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::BadIp);
    }
    text.parse::<u8>()
        .ok()
        .filter(|len| *len <= max)
        .ok_or(Error::BadIp)
}
