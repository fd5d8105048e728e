//! Prefixes that describe either an IPv4 or an IPv6 network.

use crate::Prefix;

/// Trait that defines a joint prefix, for instance, one that describes either a IPv4 or IPv6
/// address. Both variants are stored in the same tree, so this only decides which key width is
/// used to walk it.
///
/// Every [`Prefix`] is a joint prefix that always takes the first variant.
pub trait JointPrefix {
    /// The first prefix type, e.g., IPv4
    type P1: Prefix;
    /// The second prefix type, e.g., IPv6
    type P2: Prefix;

    /// Get either `Ok(P1)` or `Err(P2)`, as a reference.
    fn p1_or_p2_ref(&self) -> Result<&Self::P1, &Self::P2>;
}

impl<P: Prefix> JointPrefix for P {
    type P1 = P;
    type P2 = P;

    fn p1_or_p2_ref(&self) -> Result<&P, &P> {
        Ok(self)
    }
}

impl JointPrefix for ipnet::IpNet {
    type P1 = ipnet::Ipv4Net;
    type P2 = ipnet::Ipv6Net;

    fn p1_or_p2_ref(&self) -> Result<&ipnet::Ipv4Net, &ipnet::Ipv6Net> {
        match self {
            ipnet::IpNet::V4(p) => Ok(p),
            ipnet::IpNet::V6(p) => Err(p),
        }
    }
}

#[cfg(feature = "ipnetwork")]
impl JointPrefix for ipnetwork::IpNetwork {
    type P1 = ipnetwork::Ipv4Network;
    type P2 = ipnetwork::Ipv6Network;

    fn p1_or_p2_ref(&self) -> Result<&ipnetwork::Ipv4Network, &ipnetwork::Ipv6Network> {
        match self {
            ipnetwork::IpNetwork::V4(p) => Ok(p),
            ipnetwork::IpNetwork::V6(p) => Err(p),
        }
    }
}

#[cfg(feature = "cidr")]
impl JointPrefix for cidr::IpCidr {
    type P1 = cidr::Ipv4Cidr;
    type P2 = cidr::Ipv6Cidr;

    fn p1_or_p2_ref(&self) -> Result<&cidr::Ipv4Cidr, &cidr::Ipv6Cidr> {
        match self {
            cidr::IpCidr::V4(p) => Ok(p),
            cidr::IpCidr::V6(p) => Err(p),
        }
    }
}

/// Run `$e` with `$p` bound to the variant of the joint prefix `$prefix`.
macro_rules! dispatch {
    ($prefix:expr, $p:ident => $e:expr) => {
        match $crate::joint::JointPrefix::p1_or_p2_ref($prefix) {
            Ok($p) => $e,
            Err($p) => $e,
        }
    };
}

pub(crate) use dispatch;
